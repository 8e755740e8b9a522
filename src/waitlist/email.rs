use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please enter your email address")]
    Empty,
    #[error("Please enter a valid email address")]
    Malformed(String),
}

/// A trimmed address of the shape `local@domain.tld`.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let email = raw.trim();
        if email.is_empty() {
            return Err(ValidationError::Empty);
        }
        if !EMAIL_RE.is_match(email) {
            return Err(ValidationError::Malformed(email.to_string()));
        }
        Ok(Self(email.to_string()))
    }
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<WaitlistEmail> for String {
    fn from(email: WaitlistEmail) -> Self {
        email.0
    }
}
