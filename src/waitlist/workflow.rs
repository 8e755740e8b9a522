use thiserror::Error;

use super::{
    Clock, FormAction, SubmissionError, SubmissionOutcome, SubmissionRequest, Submitter,
    ValidationError,
};
use crate::config::WaitlistSettings;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaitlistError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error("This form is not accepting submissions")]
    NotAccepting,
}

/// Runs one submit of a waitlist form to completion.
///
/// Every visible change is reported through `dispatch`, which applies the
/// action to the caller's [`WaitlistForm`](super::WaitlistForm) and returns
/// whether it was accepted. The submitter is only called once `BeginSubmit`
/// has been accepted, so a form that is already submitting (or done) never
/// sends a second request. Invalid input never reaches the submitter.
/// Failures are not retried here: the form goes back to idle and the user
/// submits again.
pub async fn submit_waitlist<S, C, D>(
    raw_email: &str,
    raw_name: &str,
    submitter: &S,
    clock: &C,
    settings: &WaitlistSettings,
    dispatch: D,
) -> Result<(), WaitlistError>
where
    S: Submitter + ?Sized,
    C: Clock + ?Sized,
    D: Fn(FormAction) -> bool,
{
    let request = match SubmissionRequest::parse(raw_email, raw_name) {
        Ok(request) => request,
        Err(e) => {
            dispatch(FormAction::MarkInvalid);
            clock.sleep(settings.invalid_display_ms).await;
            dispatch(FormAction::ClearInvalid);
            return Err(e.into());
        }
    };

    if !dispatch(FormAction::BeginSubmit) {
        return Err(WaitlistError::NotAccepting);
    }
    let result = submitter.submit(request).await;
    dispatch(FormAction::Resolve(SubmissionOutcome::from(result.clone())));

    if result.is_err() {
        clock.sleep(settings.retry_display_ms).await;
        dispatch(FormAction::ResetAfterFailure);
    }
    result.map_err(WaitlistError::from)
}
