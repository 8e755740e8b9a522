use thiserror::Error;

pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1500;
pub const DEFAULT_SUCCESS_RATE: f64 = 0.95;
pub const DEFAULT_INVALID_DISPLAY_MS: u32 = 2000;
pub const DEFAULT_RETRY_DISPLAY_MS: u32 = 2000;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{key} is not a valid number of milliseconds: {value:?}")]
    InvalidMillis { key: &'static str, value: String },
    #[error("{key} must be a rate between 0 and 1, got {value:?}")]
    InvalidRate { key: &'static str, value: String },
}

/// Timings and wording of the waitlist form.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitlistSettings {
    /// How long the simulated submission takes to resolve.
    pub submit_delay_ms: u32,
    /// Probability that the simulated submission succeeds.
    pub success_rate: f64,
    pub invalid_display_ms: u32,
    pub retry_display_ms: u32,
    pub pending_label: String,
    pub retry_label: String,
    pub success_title: String,
    pub success_body: String,
}

impl Default for WaitlistSettings {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            success_rate: DEFAULT_SUCCESS_RATE,
            invalid_display_ms: DEFAULT_INVALID_DISPLAY_MS,
            retry_display_ms: DEFAULT_RETRY_DISPLAY_MS,
            pending_label: "Joining...".to_string(),
            retry_label: "Try Again".to_string(),
            success_title: "You're on the list!".to_string(),
            success_body: "We'll notify you when our apps are ready to launch.".to_string(),
        }
    }
}

impl WaitlistSettings {
    /// Builds settings from a key lookup, keeping the default for every key
    /// the lookup doesn't know.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(value) = lookup("WAITLIST_SUBMIT_DELAY_MS") {
            settings.submit_delay_ms = parse_millis("WAITLIST_SUBMIT_DELAY_MS", &value)?;
        }
        if let Some(value) = lookup("WAITLIST_SUCCESS_RATE") {
            settings.success_rate = parse_rate("WAITLIST_SUCCESS_RATE", &value)?;
        }
        if let Some(value) = lookup("WAITLIST_INVALID_DISPLAY_MS") {
            settings.invalid_display_ms = parse_millis("WAITLIST_INVALID_DISPLAY_MS", &value)?;
        }
        if let Some(value) = lookup("WAITLIST_RETRY_DISPLAY_MS") {
            settings.retry_display_ms = parse_millis("WAITLIST_RETRY_DISPLAY_MS", &value)?;
        }
        Ok(settings)
    }
}

fn parse_millis(key: &'static str, value: &str) -> Result<u32, ConfigError> {
    value.trim().parse::<u32>().map_err(|_| ConfigError::InvalidMillis {
        key,
        value: value.to_string(),
    })
}

fn parse_rate(key: &'static str, value: &str) -> Result<f64, ConfigError> {
    match value.trim().parse::<f64>() {
        Ok(rate) if (0.0..=1.0).contains(&rate) => Ok(rate),
        _ => Err(ConfigError::InvalidRate {
            key,
            value: value.to_string(),
        }),
    }
}

// Overrides are baked in at build time, e.g. `WAITLIST_SUCCESS_RATE=0.5 trunk serve`.
fn build_env(key: &'static str) -> Option<String> {
    let value = match key {
        "WAITLIST_SUBMIT_DELAY_MS" => option_env!("WAITLIST_SUBMIT_DELAY_MS"),
        "WAITLIST_SUCCESS_RATE" => option_env!("WAITLIST_SUCCESS_RATE"),
        "WAITLIST_INVALID_DISPLAY_MS" => option_env!("WAITLIST_INVALID_DISPLAY_MS"),
        "WAITLIST_RETRY_DISPLAY_MS" => option_env!("WAITLIST_RETRY_DISPLAY_MS"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn get_waitlist_settings() -> WaitlistSettings {
    WaitlistSettings::from_lookup(build_env).unwrap_or_else(|e| {
        log::warn!("Ignoring waitlist overrides: {}", e);
        WaitlistSettings::default()
    })
}
