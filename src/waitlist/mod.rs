//! The waitlist sign-up workflow.
//!
//! Everything in here is DOM-free: the form component feeds it raw input
//! values and renders whatever [`WaitlistForm`] state comes back, so the
//! workflow can be driven natively in tests.

mod email;
mod request;
mod state;
mod submitter;
mod workflow;

pub use email::{ValidationError, WaitlistEmail};
pub use request::SubmissionRequest;
pub use state::{FormAction, FormState, FormView, WaitlistForm};
pub use submitter::{BrowserClock, Clock, SimulatedSubmitter, SubmissionError, Submitter};
pub use workflow::{submit_waitlist, WaitlistError};

/// What the remote side said about a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Success,
    Failure { reason: String },
}

impl From<Result<(), SubmissionError>> for SubmissionOutcome {
    fn from(result: Result<(), SubmissionError>) -> Self {
        match result {
            Ok(()) => SubmissionOutcome::Success,
            Err(e) => SubmissionOutcome::Failure {
                reason: e.to_string(),
            },
        }
    }
}
