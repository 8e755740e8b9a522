use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::waitlist::{
    submit_waitlist, BrowserClock, FormAction, FormView, SimulatedSubmitter, WaitlistForm,
};

/// Delay before the confirmation panel slides in.
const SUCCESS_REVEAL_MS: u32 = 100;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormVariant {
    /// Single-line email capture in the hero.
    #[default]
    Compact,
    /// Full-width form in the waitlist section, with a name field.
    Large,
}

impl FormVariant {
    fn class(self) -> &'static str {
        match self {
            FormVariant::Compact => "waitlist-form",
            FormVariant::Large => "waitlist-form-large",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct WaitlistFormProps {
    #[prop_or_default]
    pub variant: FormVariant,
    #[prop_or_default]
    pub with_name: bool,
    #[prop_or(AttrValue::Static("Join Waitlist"))]
    pub button_label: AttrValue,
}

#[function_component]
pub fn WaitlistFormView(props: &WaitlistFormProps) -> Html {
    let settings = use_state(config::get_waitlist_settings);
    let form = use_reducer(WaitlistForm::default);
    // Applied synchronously on every dispatch, so submit handlers never act
    // on a stale render.
    let current = use_mut_ref(WaitlistForm::default);
    let email = use_state(String::new);
    let name = use_state(String::new);

    let view = form.view(&props.button_label, &settings);
    let (button_label, button_disabled, email_invalid) = match view {
        FormView::Confirmation { title, body } => {
            return html! {
                <SuccessPanel title={title.to_string()} body={body.to_string()} />
            };
        }
        FormView::Entry {
            button_label,
            button_disabled,
            email_invalid,
        } => (button_label.to_string(), button_disabled, email_invalid),
    };

    let onsubmit = {
        let dispatcher = form.dispatcher();
        let current = current.clone();
        let email = email.clone();
        let name = name.clone();
        let settings = settings.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !current.borrow().accepts_submit() {
                return;
            }
            let dispatcher = dispatcher.clone();
            let current = current.clone();
            let email = (*email).clone();
            let name = (*name).clone();
            let settings = (*settings).clone();
            spawn_local(async move {
                let submitter = SimulatedSubmitter::browser(&settings);
                let dispatch = |action: FormAction| {
                    let next = current.borrow().apply(action.clone());
                    match next {
                        Some(next) => {
                            *current.borrow_mut() = next;
                            dispatcher.dispatch(action);
                            true
                        }
                        None => false,
                    }
                };
                let result = submit_waitlist(
                    &email,
                    &name,
                    &submitter,
                    &BrowserClock,
                    &settings,
                    dispatch,
                )
                .await;
                if let Err(e) = result {
                    log::warn!("Waitlist submission did not go through: {}", e);
                }
            });
        })
    };

    html! {
        <form class={props.variant.class()} {onsubmit} novalidate=true>
            {
                if props.with_name {
                    html! {
                        <input
                            type="text"
                            placeholder="Your name"
                            value={(*name).clone()}
                            oninput={
                                let name = name.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    name.set(input.value());
                                })
                            }
                        />
                    }
                } else {
                    html! {}
                }
            }
            <input
                type="email"
                placeholder="Enter your email"
                class={classes!(email_invalid.then_some("input-invalid"))}
                value={(*email).clone()}
                oninput={
                    let email = email.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        email.set(input.value());
                    })
                }
            />
            <button type="submit" class="btn-primary" disabled={button_disabled}>
                { button_label }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct SuccessPanelProps {
    title: String,
    body: String,
}

#[function_component]
fn SuccessPanel(props: &SuccessPanelProps) -> Html {
    let shown = use_state(|| false);
    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(SUCCESS_REVEAL_MS, move || shown.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <div class={classes!("form-success", (*shown).then_some("shown"))}>
            <svg width="64" height="64" viewBox="0 0 24 24" fill="none" stroke="#51ff81" stroke-width="2">
                <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/>
                <polyline points="22 4 12 14.01 9 11.01"/>
            </svg>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.body.clone() }</p>
        </div>
    }
}
