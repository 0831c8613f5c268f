//! Async driver port

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::DriverError;
use crate::types::{ElementHandle, Locator};

/// Seam to the external browser driver
///
/// The wait/retry core assumes exclusive use of the underlying session for
/// the duration of a call; concurrent retries against one session are not
/// supported.
#[async_trait]
pub trait DriverPort: Send + Sync {
    /// Resolve a locator to a single element
    async fn find_element(&self, locator: &Locator) -> Result<ElementHandle, DriverError>;

    /// Send input text to a resolved element
    async fn send_keys(&self, element: &ElementHandle, text: &str) -> Result<(), DriverError>;

    /// Execute an arbitrary script in page context
    async fn execute_script(&self, script: &str) -> Result<Value, DriverError>;

    /// Whether a previously resolved handle still refers to a live node
    async fn is_attached(&self, element: &ElementHandle) -> Result<bool, DriverError>;
}
