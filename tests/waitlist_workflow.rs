use std::cell::RefCell;
use std::rc::Rc;

use claims::{assert_err, assert_ok};
use futures::executor::block_on;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use neuron_landing::config::WaitlistSettings;
use neuron_landing::waitlist::{
    submit_waitlist, Clock, FormAction, FormState, FormView, SimulatedSubmitter,
    SubmissionError, SubmissionOutcome, SubmissionRequest, Submitter, WaitlistError,
    WaitlistForm,
};

#[derive(Clone, Default)]
struct TestClock {
    sleeps: Rc<RefCell<Vec<u32>>>,
}

impl Clock for TestClock {
    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()> {
        self.sleeps.borrow_mut().push(millis);
        futures::future::ready(()).boxed_local()
    }
}

struct ScriptedSubmitter {
    succeed: bool,
    requests: RefCell<Vec<SubmissionRequest>>,
}

impl ScriptedSubmitter {
    fn new(succeed: bool) -> Self {
        Self {
            succeed,
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl Submitter for ScriptedSubmitter {
    fn submit(&self, request: SubmissionRequest) -> LocalBoxFuture<'static, Result<(), SubmissionError>> {
        self.requests.borrow_mut().push(request);
        let result = if self.succeed {
            Ok(())
        } else {
            Err(SubmissionError::Network)
        };
        futures::future::ready(result).boxed_local()
    }
}

/// Form state plus a log of every state the submit button went through.
struct Harness {
    form: RefCell<WaitlistForm>,
    history: RefCell<Vec<WaitlistForm>>,
}

impl Harness {
    fn new() -> Self {
        Self::starting_at(WaitlistForm::default())
    }

    fn starting_at(form: WaitlistForm) -> Self {
        Self {
            form: RefCell::new(form),
            history: RefCell::new(Vec::new()),
        }
    }

    fn dispatch(&self, action: FormAction) -> bool {
        let next = self.form.borrow().apply(action);
        match next {
            Some(next) => {
                self.history.borrow_mut().push(next.clone());
                *self.form.borrow_mut() = next;
                true
            }
            None => false,
        }
    }

    fn current(&self) -> WaitlistForm {
        self.form.borrow().clone()
    }

    fn run(
        &self,
        email: &str,
        name: &str,
        submitter: &dyn Submitter,
        clock: &TestClock,
    ) -> Result<(), WaitlistError> {
        block_on(submit_waitlist(
            email,
            name,
            submitter,
            clock,
            &WaitlistSettings::default(),
            |action| self.dispatch(action),
        ))
    }
}

#[test]
fn valid_email_lands_on_the_list() {
    let harness = Harness::new();
    let clock = TestClock::default();
    let submitter = ScriptedSubmitter::new(true);

    assert_ok!(harness.run("user@example.com", "Ada", &submitter, &clock));

    assert_eq!(harness.current().state, FormState::Success);
    let history = harness.history.borrow();
    assert_eq!(history[0].state, FormState::Submitting);
    assert!(history[0].button_disabled());
    assert_eq!(
        *submitter.requests.borrow(),
        vec![SubmissionRequest {
            email: "user@example.com".to_string(),
            name: "Ada".to_string(),
        }]
    );
    assert!(WaitlistSettings::default().success_title.contains("on the list"));
}

#[test]
fn success_is_not_resubmitted() {
    let harness = Harness::new();
    let clock = TestClock::default();
    let submitter = ScriptedSubmitter::new(true);
    assert_ok!(harness.run("user@example.com", "", &submitter, &clock));
    let done = harness.current();

    assert!(!harness.dispatch(FormAction::BeginSubmit));
    assert!(!harness.dispatch(FormAction::Resolve(SubmissionOutcome::Success)));
    let err = assert_err!(harness.run("user@example.com", "", &submitter, &clock));
    assert_eq!(err, WaitlistError::NotAccepting);

    assert_eq!(harness.current(), done);
    assert_eq!(submitter.requests.borrow().len(), 1);
    let settings = WaitlistSettings::default();
    assert!(matches!(
        harness.current().view("Join Waitlist", &settings),
        FormView::Confirmation { .. }
    ));
}

#[test]
fn no_second_request_while_submitting() {
    let in_flight = WaitlistForm {
        state: FormState::Submitting,
        email_invalid: false,
    };
    let harness = Harness::starting_at(in_flight.clone());
    let clock = TestClock::default();
    let submitter = ScriptedSubmitter::new(true);

    let err = assert_err!(harness.run("user@example.com", "", &submitter, &clock));
    assert_eq!(err, WaitlistError::NotAccepting);

    assert!(submitter.requests.borrow().is_empty());
    assert_eq!(harness.current(), in_flight);
    assert!(clock.sleeps.borrow().is_empty());
}

#[test]
fn no_new_request_while_retry_label_shows() {
    let harness = Harness::starting_at(WaitlistForm {
        state: FormState::Failure {
            reason: "Network error".to_string(),
        },
        email_invalid: false,
    });
    let submitter = ScriptedSubmitter::new(true);

    let err = assert_err!(harness.run("user@example.com", "", &submitter, &TestClock::default()));
    assert_eq!(err, WaitlistError::NotAccepting);
    assert!(submitter.requests.borrow().is_empty());
}

#[test]
fn invalid_email_never_reaches_submitter() {
    let harness = Harness::new();
    let clock = TestClock::default();
    let submitter = ScriptedSubmitter::new(true);

    let err = assert_err!(harness.run("not-an-email", "", &submitter, &clock));
    assert!(matches!(err, WaitlistError::Validation(_)));

    assert!(submitter.requests.borrow().is_empty());
    let history = harness.history.borrow();
    assert!(history[0].email_invalid);
    assert!(!harness.current().email_invalid);
    assert_eq!(harness.current().state, FormState::Idle);
    assert_eq!(*clock.sleeps.borrow(), vec![2000]);
}

#[test]
fn failure_shows_retry_then_restores_button() {
    let harness = Harness::new();
    let clock = TestClock::default();
    let submitter = ScriptedSubmitter::new(false);

    let err = assert_err!(harness.run("user@example.com", "", &submitter, &clock));
    assert_eq!(err, WaitlistError::Submission(SubmissionError::Network));

    let history = harness.history.borrow();
    let labels: Vec<&str> = history
        .iter()
        .map(|form| form.button_label("Join Waitlist", "Joining...", "Try Again"))
        .collect();
    assert_eq!(labels, vec!["Joining...", "Try Again", "Join Waitlist"]);
    assert!(history[1].button_disabled());
    assert!(!harness.current().button_disabled());
    assert_eq!(*clock.sleeps.borrow(), vec![2000]);
}

#[test]
fn form_can_be_resubmitted_after_failure() {
    let harness = Harness::new();
    let clock = TestClock::default();

    assert_err!(harness.run("user@example.com", "", &ScriptedSubmitter::new(false), &clock));
    assert_ok!(harness.run("user@example.com", "", &ScriptedSubmitter::new(true), &clock));
    assert_eq!(harness.current().state, FormState::Success);
}

#[test]
fn simulated_submitter_drives_both_branches() {
    let settings = WaitlistSettings::default();
    let clock = TestClock::default();

    let lucky = SimulatedSubmitter::new(clock.clone(), &settings, || 0.01);
    let harness = Harness::new();
    assert_ok!(harness.run("user@example.com", "", &lucky, &clock));
    assert!(harness.current().is_complete());

    let unlucky = SimulatedSubmitter::new(clock.clone(), &settings, || 0.999);
    let harness = Harness::new();
    assert_err!(harness.run("user@example.com", "", &unlucky, &clock));
    assert!(harness.current().accepts_submit());

    assert_eq!(
        *clock.sleeps.borrow(),
        vec![settings.submit_delay_ms, settings.submit_delay_ms, settings.retry_display_ms]
    );
}
