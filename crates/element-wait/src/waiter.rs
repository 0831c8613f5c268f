//! Public wait surface over the driver port

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use driver_adapter::{DriverError, DriverErrorKind, DriverPort, ElementHandle, Locator};
use tokio::time::{sleep, Instant};
use tracing::{debug, instrument, warn};

use crate::errors::WaitError;
use crate::policy::{IgnoreKinds, RetryPolicy, WaitConfig};
use crate::retry::{run_with_retry, RetryOutcome};

/// Retrying element locator
///
/// Holds the injected driver session and per-instance defaults. Each call
/// owns its attempt counter and deadline; the underlying session is assumed
/// to be exclusively this waiter's for the duration of a call.
pub struct ElementWaiter {
    driver: Arc<dyn DriverPort>,
    config: WaitConfig,
}

impl ElementWaiter {
    pub fn new(driver: Arc<dyn DriverPort>) -> Self {
        Self::with_config(driver, WaitConfig::default())
    }

    pub fn with_config(driver: Arc<dyn DriverPort>, config: WaitConfig) -> Self {
        Self { driver, config }
    }

    /// Resolve a locator, retrying allow-listed failures up to
    /// `max_retries + 1` attempts.
    ///
    /// Exhaustion maps to [`WaitError::NotFound`], which carries the attempt
    /// count and the last swallowed failure as its source. Non-ignorable
    /// failures propagate unchanged.
    #[instrument(skip_all, fields(locator = %locator, max_retries))]
    pub async fn find_with_retry(
        &self,
        locator: &Locator,
        max_retries: u32,
        ignore: IgnoreKinds,
    ) -> Result<ElementHandle, WaitError> {
        let policy = RetryPolicy::attempts(max_retries).ignoring(ignore);
        let driver = self.driver.clone();
        let outcome = run_with_retry(&policy, || {
            let driver = driver.clone();
            let locator = locator.clone();
            async move { driver.find_element(&locator).await }
        })
        .await?;

        match outcome {
            RetryOutcome::Completed(handle) => Ok(handle),
            RetryOutcome::Exhausted { attempts, last } => {
                warn!("element {} not located after {} attempts", locator, attempts);
                Err(WaitError::NotFound {
                    attempts,
                    last: last
                        .unwrap_or_else(|| DriverError::NoSuchElement(locator.to_string())),
                })
            }
        }
    }

    /// Resolve a locator with the default budget, ignoring staleness
    pub async fn find_element(&self, locator: &Locator) -> Result<ElementHandle, WaitError> {
        self.find_with_retry(locator, self.config.find_retries, IgnoreKinds::STALE_ELEMENT)
            .await
    }

    /// Run an arbitrary action under an attempt-count budget.
    ///
    /// Exhaustion is reported in the outcome rather than raised; callers
    /// inspect [`RetryOutcome::succeeded`] when all they need is a flag.
    pub async fn perform_with_retry<F, Fut>(
        &self,
        action: F,
        max_retries: u32,
        ignore: IgnoreKinds,
    ) -> Result<RetryOutcome<()>, WaitError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<(), DriverError>>,
    {
        let policy = RetryPolicy::attempts(max_retries).ignoring(ignore);
        Ok(run_with_retry(&policy, action).await?)
    }

    /// Run an arbitrary action until it succeeds or `timeout` elapses,
    /// sleeping `poll` between attempts.
    ///
    /// Deadline expiry ends the run with an `Exhausted` outcome and no
    /// error; only non-ignorable failures surface.
    pub async fn perform_within<F, Fut>(
        &self,
        action: F,
        timeout: Duration,
        poll: Duration,
        ignore: IgnoreKinds,
    ) -> Result<RetryOutcome<()>, WaitError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<(), DriverError>>,
    {
        let policy = RetryPolicy::deadline(timeout, poll).ignoring(ignore);
        Ok(run_with_retry(&policy, action).await?)
    }

    /// Resolve a locator and type into it, retrying staleness.
    ///
    /// Returns whether the input landed within the budget.
    pub async fn send_keys_with_retry(
        &self,
        locator: &Locator,
        text: &str,
    ) -> Result<bool, WaitError> {
        let policy = RetryPolicy::attempts(self.config.send_keys_retries);
        let driver = self.driver.clone();
        let outcome = run_with_retry(&policy, || {
            let driver = driver.clone();
            let locator = locator.clone();
            let text = text.to_string();
            async move {
                let element = driver.find_element(&locator).await?;
                driver.send_keys(&element, &text).await
            }
        })
        .await?;
        Ok(outcome.succeeded())
    }

    /// Explicit wait: poll until the locator resolves to a present,
    /// still-attached element or `timeout` elapses.
    ///
    /// A handle that has already gone stale by the attachment probe does not
    /// count; polling continues against a fresh resolution.
    #[instrument(skip_all, fields(locator = %locator, timeout = ?timeout))]
    pub async fn wait_until_present(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> Result<ElementHandle, WaitError> {
        let start = Instant::now();
        let poll = self.config.poll();

        loop {
            match self.driver.find_element(locator).await {
                Ok(handle) => match self.driver.is_attached(&handle).await {
                    Ok(true) => {
                        debug!("element {} present after {:?}", locator, start.elapsed());
                        return Ok(handle);
                    }
                    Ok(false) => {
                        debug!("handle for {} went stale before attachment probe", locator)
                    }
                    Err(e) if e.is_transient() => {
                        debug!("attachment probe for {} failed transiently: {}", locator, e)
                    }
                    Err(e) => return Err(e.into()),
                },
                Err(e)
                    if e.is_transient() || e.kind() == DriverErrorKind::NoSuchElement =>
                {
                    debug!("still waiting for {}: {}", locator, e);
                }
                Err(e) => return Err(e.into()),
            }

            if start.elapsed() >= timeout {
                warn!(
                    "presence wait for {} timed out after {:?}",
                    locator,
                    start.elapsed()
                );
                return Err(WaitError::Timeout { waited: timeout });
            }

            sleep(poll).await;
        }
    }

    /// Presence wait with the default 30-second timeout
    pub async fn wait_for_element(&self, locator: &Locator) -> Result<ElementHandle, WaitError> {
        self.wait_until_present(locator, self.config.presence_timeout())
            .await
    }
}
