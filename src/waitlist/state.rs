use std::rc::Rc;

use yew::Reducible;

use super::SubmissionOutcome;
use crate::config::WaitlistSettings;

/// Lifecycle of one waitlist form instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    /// Terminal: the form has been swapped for the confirmation panel.
    Success,
    Failure {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    MarkInvalid,
    ClearInvalid,
    BeginSubmit,
    Resolve(SubmissionOutcome),
    ResetAfterFailure,
}

/// What a form instance should render right now.
#[derive(Debug, Clone, PartialEq)]
pub enum FormView<'a> {
    /// The inputs, with the submit control in its current state.
    Entry {
        button_label: &'a str,
        button_disabled: bool,
        email_invalid: bool,
    },
    /// The form is gone; only the confirmation panel is shown.
    Confirmation { title: &'a str, body: &'a str },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WaitlistForm {
    pub state: FormState,
    pub email_invalid: bool,
}

impl WaitlistForm {
    pub fn accepts_submit(&self) -> bool {
        self.state == FormState::Idle
    }

    pub fn is_complete(&self) -> bool {
        self.state == FormState::Success
    }

    /// The submit control is locked while a request is in flight and while
    /// the retry label is showing.
    pub fn button_disabled(&self) -> bool {
        matches!(self.state, FormState::Submitting | FormState::Failure { .. })
    }

    pub fn button_label<'a>(&self, idle: &'a str, pending: &'a str, retry: &'a str) -> &'a str {
        match self.state {
            FormState::Submitting => pending,
            FormState::Failure { .. } => retry,
            FormState::Idle | FormState::Success => idle,
        }
    }

    pub fn view<'a>(&self, idle_label: &'a str, settings: &'a WaitlistSettings) -> FormView<'a> {
        if self.is_complete() {
            return FormView::Confirmation {
                title: &settings.success_title,
                body: &settings.success_body,
            };
        }
        FormView::Entry {
            button_label: self.button_label(
                idle_label,
                &settings.pending_label,
                &settings.retry_label,
            ),
            button_disabled: self.button_disabled(),
            email_invalid: self.email_invalid,
        }
    }

    /// Applies an action, returning `None` when it isn't legal from the
    /// current state.
    pub fn apply(&self, action: FormAction) -> Option<WaitlistForm> {
        if self.is_complete() {
            return None;
        }
        let next = match (&self.state, action) {
            (_, FormAction::MarkInvalid) => WaitlistForm {
                email_invalid: true,
                ..self.clone()
            },
            (_, FormAction::ClearInvalid) if self.email_invalid => WaitlistForm {
                email_invalid: false,
                ..self.clone()
            },
            (FormState::Idle, FormAction::BeginSubmit) => WaitlistForm {
                state: FormState::Submitting,
                email_invalid: false,
            },
            (FormState::Submitting, FormAction::Resolve(SubmissionOutcome::Success)) => {
                WaitlistForm {
                    state: FormState::Success,
                    email_invalid: false,
                }
            }
            (FormState::Submitting, FormAction::Resolve(SubmissionOutcome::Failure { reason })) => {
                WaitlistForm {
                    state: FormState::Failure { reason },
                    ..self.clone()
                }
            }
            (FormState::Failure { .. }, FormAction::ResetAfterFailure) => WaitlistForm {
                state: FormState::Idle,
                ..self.clone()
            },
            (state, action) => {
                log::debug!("Ignoring {:?} while {:?}", action, state);
                return None;
            }
        };
        Some(next)
    }
}

impl Reducible for WaitlistForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}
