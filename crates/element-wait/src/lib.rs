//! Retry/wait core for flaky DOM interaction
//!
//! This crate implements bounded retry over the driver seam:
//! - A single policy-parameterized retry primitive with a tagged outcome
//! - Attempt-count and deadline budgets with an allow-list of failure kinds
//! - An explicit presence wait with refreshed-element semantics
//!
//! Ignorable failures never terminate a retry loop early; anything outside
//! the allow-list surfaces to the caller unchanged.

pub mod errors;
pub mod policy;
pub mod retry;
pub mod waiter;

pub use errors::WaitError;
pub use policy::{Budget, IgnoreKinds, RetryPolicy, WaitConfig};
pub use retry::{run_with_retry, RetryOutcome};
pub use waiter::ElementWaiter;
