//! Browser driver seam
//!
//! This crate defines the boundary between the wait/retry core and the
//! external browser-automation collaborator:
//! - Locator and element-handle types
//! - Driver failure taxonomy with retryability classification
//! - The async `DriverPort` trait the driver implements
//! - A scripted test double behind the `stub` feature

pub mod errors;
pub mod port;
pub mod types;

#[cfg(feature = "stub")]
pub mod stub;

pub use errors::{DriverError, DriverErrorKind};
pub use port::DriverPort;
pub use types::{ElementHandle, Locator};

#[cfg(feature = "stub")]
pub use stub::ScriptedDriver;

/// Returns `true` when the scripted driver stub is compiled in.
pub const fn is_stubbed() -> bool {
    cfg!(feature = "stub")
}
