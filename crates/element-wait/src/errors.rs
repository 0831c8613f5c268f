//! Error types for the wait/retry core

use std::time::Duration;

use driver_adapter::DriverError;
use thiserror::Error;

/// Wait error enumeration
#[derive(Debug, Error)]
pub enum WaitError {
    /// Retry budget exhausted without resolving the element
    #[error("element not found after {attempts} attempts")]
    NotFound {
        attempts: u32,
        #[source]
        last: DriverError,
    },

    /// Explicit wait expired without the condition holding
    #[error("condition not met within {waited:?}")]
    Timeout { waited: Duration },

    /// Non-ignorable driver failure, surfaced unchanged
    #[error(transparent)]
    Driver(#[from] DriverError),
}
