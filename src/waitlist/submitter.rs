use futures::future::LocalBoxFuture;
use futures::FutureExt;
use thiserror::Error;

use super::SubmissionRequest;
use crate::config::WaitlistSettings;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmissionError {
    #[error("Network error")]
    Network,
}

/// Something that can wait. The browser build uses timers, tests resolve
/// immediately.
pub trait Clock {
    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::TimeoutFuture::new(millis).boxed_local()
    }
}

/// The remote end that registers a waitlist entry.
pub trait Submitter {
    fn submit(&self, request: SubmissionRequest) -> LocalBoxFuture<'static, Result<(), SubmissionError>>;
}

/// Stand-in for the real sign-up endpoint: waits, then succeeds unless the
/// roll lands above the success rate.
pub struct SimulatedSubmitter<C> {
    clock: C,
    delay_ms: u32,
    success_rate: f64,
    roll: fn() -> f64,
}

impl<C: Clock> SimulatedSubmitter<C> {
    pub fn new(clock: C, settings: &WaitlistSettings, roll: fn() -> f64) -> Self {
        Self {
            clock,
            delay_ms: settings.submit_delay_ms,
            success_rate: settings.success_rate,
            roll,
        }
    }
}

impl SimulatedSubmitter<BrowserClock> {
    pub fn browser(settings: &WaitlistSettings) -> Self {
        Self::new(BrowserClock, settings, web_sys::js_sys::Math::random)
    }
}

impl<C: Clock> Submitter for SimulatedSubmitter<C> {
    fn submit(&self, request: SubmissionRequest) -> LocalBoxFuture<'static, Result<(), SubmissionError>> {
        let delay = self.clock.sleep(self.delay_ms);
        let succeeded = (self.roll)() < self.success_rate;
        async move {
            delay.await;
            if succeeded {
                match serde_json::to_string(&request) {
                    Ok(body) => log::info!("Waitlist signup: {}", body),
                    Err(e) => log::warn!("Waitlist signup (unserializable): {:?}", e),
                }
                Ok(())
            } else {
                Err(SubmissionError::Network)
            }
        }
        .boxed_local()
    }
}
