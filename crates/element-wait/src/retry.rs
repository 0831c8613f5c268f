//! The unified retry primitive

use std::future::Future;

use driver_adapter::DriverError;
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

use crate::policy::{Budget, RetryPolicy};

/// Result of a retry run that hit no fatal failure
///
/// A run moves through attempting/retrying until one of three terminal
/// states: a produced value, an immediately propagated non-ignorable failure
/// (the `Err` arm of [`run_with_retry`]), or budget exhaustion.
#[derive(Debug)]
pub enum RetryOutcome<T> {
    /// The action produced a value
    Completed(T),

    /// Budget ran out; carries the attempt count and the last swallowed failure
    Exhausted {
        attempts: u32,
        last: Option<DriverError>,
    },
}

impl<T> RetryOutcome<T> {
    pub fn succeeded(&self) -> bool {
        matches!(self, RetryOutcome::Completed(_))
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            RetryOutcome::Completed(value) => Some(value),
            RetryOutcome::Exhausted { .. } => None,
        }
    }
}

/// Run an action under a retry policy.
///
/// Failures whose kind is on the policy's allow-list are logged and retried
/// until the budget runs out; any other failure is returned immediately with
/// its identity and message intact. Exhaustion is reported in the outcome,
/// never as an error, so callers pick their own contract on top.
pub async fn run_with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    mut action: F,
) -> Result<RetryOutcome<T>, DriverError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DriverError>>,
{
    match policy.budget {
        Budget::Attempts(max_retries) => {
            let mut attempts = 0u32;
            let mut last = None;
            // Runs max_retries + 1 times; a zero budget still attempts once.
            while attempts <= max_retries {
                attempts += 1;
                match action().await {
                    Ok(value) => {
                        if attempts > 1 {
                            debug!("action succeeded on attempt {}", attempts);
                        }
                        return Ok(RetryOutcome::Completed(value));
                    }
                    Err(e) if policy.ignore.allows(e.kind()) => {
                        warn!(
                            "attempt {} failed with ignorable {}: {}",
                            attempts,
                            e.kind().name(),
                            e
                        );
                        last = Some(e);
                    }
                    Err(e) => return Err(e),
                }
            }
            Ok(RetryOutcome::Exhausted { attempts, last })
        }

        Budget::Deadline { timeout, poll } => {
            let start = Instant::now();
            let deadline = start + timeout;
            let mut attempts = 0u32;
            let mut last = None;
            while Instant::now() < deadline {
                attempts += 1;
                match action().await {
                    Ok(value) => {
                        debug!(
                            "action succeeded on attempt {} after {:?}",
                            attempts,
                            start.elapsed()
                        );
                        return Ok(RetryOutcome::Completed(value));
                    }
                    Err(e) if policy.ignore.allows(e.kind()) => {
                        warn!(
                            "attempt {} failed with ignorable {}: {}",
                            attempts,
                            e.kind().name(),
                            e
                        );
                        last = Some(e);
                    }
                    Err(e) => return Err(e),
                }
                sleep(poll).await;
            }
            debug!(
                "deadline {:?} elapsed after {} attempts",
                timeout, attempts
            );
            Ok(RetryOutcome::Exhausted { attempts, last })
        }
    }
}
