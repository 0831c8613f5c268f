//! Retry budgets, ignorable-kind sets and default configuration

use std::time::Duration;

use bitflags::bitflags;
use driver_adapter::DriverErrorKind;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Allow-list of driver failure kinds a retry loop may swallow
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct IgnoreKinds: u8 {
        const STALE_ELEMENT = 1 << 0;
        const NO_SUCH_ELEMENT = 1 << 1;
        const INVALID_SELECTOR = 1 << 2;
        const SCRIPT = 1 << 3;
        const SESSION = 1 << 4;
        const TIMEOUT = 1 << 5;
    }
}

impl IgnoreKinds {
    /// Flag corresponding to a single failure kind
    pub fn of(kind: DriverErrorKind) -> Self {
        match kind {
            DriverErrorKind::StaleElement => IgnoreKinds::STALE_ELEMENT,
            DriverErrorKind::NoSuchElement => IgnoreKinds::NO_SUCH_ELEMENT,
            DriverErrorKind::InvalidSelector => IgnoreKinds::INVALID_SELECTOR,
            DriverErrorKind::Script => IgnoreKinds::SCRIPT,
            DriverErrorKind::Session => IgnoreKinds::SESSION,
            DriverErrorKind::Timeout => IgnoreKinds::TIMEOUT,
        }
    }

    /// Check allow-list membership for a failure kind
    pub fn allows(&self, kind: DriverErrorKind) -> bool {
        self.contains(IgnoreKinds::of(kind))
    }
}

impl From<DriverErrorKind> for IgnoreKinds {
    fn from(kind: DriverErrorKind) -> Self {
        IgnoreKinds::of(kind)
    }
}

/// Retry termination budget
///
/// Exactly one termination mode is active per call. Attempt-count budgets
/// always perform at least one attempt; deadline budgets check the clock
/// before every attempt, so a zero deadline performs none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    /// Retry up to this many additional times after the first attempt
    Attempts(u32),

    /// Retry until `timeout` elapses, sleeping `poll` between attempts
    Deadline { timeout: Duration, poll: Duration },
}

/// Policy for one retry call
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub budget: Budget,
    pub ignore: IgnoreKinds,
}

impl RetryPolicy {
    /// Attempt-count policy, ignoring stale-element failures
    pub fn attempts(max_retries: u32) -> Self {
        Self {
            budget: Budget::Attempts(max_retries),
            ignore: IgnoreKinds::STALE_ELEMENT,
        }
    }

    /// Deadline policy, ignoring stale-element failures
    pub fn deadline(timeout: Duration, poll: Duration) -> Self {
        Self {
            budget: Budget::Deadline { timeout, poll },
            ignore: IgnoreKinds::STALE_ELEMENT,
        }
    }

    /// Replace the ignorable-kind allow-list
    pub fn ignoring(mut self, ignore: IgnoreKinds) -> Self {
        self.ignore = ignore;
        self
    }
}

/// Defaults for the convenience surface
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WaitConfig {
    /// Retry budget for default element resolution
    pub find_retries: u32,
    /// Retry budget for the send-keys convenience
    pub send_keys_retries: u32,
    /// Explicit presence-wait timeout
    pub presence_timeout_ms: u64,
    /// Poll interval for presence waits
    pub poll_ms: u64,
}

impl WaitConfig {
    pub fn presence_timeout(&self) -> Duration {
        Duration::from_millis(self.presence_timeout_ms)
    }

    pub fn poll(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            find_retries: 5,
            send_keys_retries: 3,
            presence_timeout_ms: 30_000,
            poll_ms: 500,
        }
    }
}
