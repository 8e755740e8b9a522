use serde::Serialize;

use super::email::{ValidationError, WaitlistEmail};

/// One sign-up attempt, built from the form inputs at submit time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionRequest {
    pub email: String,
    pub name: String,
}

impl SubmissionRequest {
    pub fn parse(raw_email: &str, raw_name: &str) -> Result<Self, ValidationError> {
        let email = WaitlistEmail::parse(raw_email)?;
        Ok(Self {
            email: email.into(),
            name: raw_name.trim().to_string(),
        })
    }
}
