//! Scripted driver stub for tests

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::errors::DriverError;
use crate::port::DriverPort;
use crate::types::{ElementHandle, Locator};

/// Test double with per-call scripted outcomes
///
/// Queued outcomes are consumed front-to-back, one per call; once a queue is
/// empty the fallback outcome applies to every further call. Call counters
/// let tests assert exact attempt counts.
pub struct ScriptedDriver {
    finds: Mutex<VecDeque<Result<ElementHandle, DriverError>>>,
    find_fallback: Mutex<Result<ElementHandle, DriverError>>,
    keys: Mutex<VecDeque<Result<(), DriverError>>>,
    scripts: Mutex<VecDeque<Result<Value, DriverError>>>,
    attached: Mutex<VecDeque<bool>>,
    find_calls: AtomicU32,
    keys_calls: AtomicU32,
    script_calls: AtomicU32,
    attached_calls: AtomicU32,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self {
            finds: Mutex::new(VecDeque::new()),
            find_fallback: Mutex::new(Err(DriverError::NoSuchElement("not scripted".into()))),
            keys: Mutex::new(VecDeque::new()),
            scripts: Mutex::new(VecDeque::new()),
            attached: Mutex::new(VecDeque::new()),
            find_calls: AtomicU32::new(0),
            keys_calls: AtomicU32::new(0),
            script_calls: AtomicU32::new(0),
            attached_calls: AtomicU32::new(0),
        }
    }

    /// Build a handle the way the stub would resolve one
    pub fn handle(locator: &Locator) -> ElementHandle {
        ElementHandle::new("stub-node-1", locator.clone())
    }

    /// Queue one find_element outcome
    pub fn push_find(&self, outcome: Result<ElementHandle, DriverError>) {
        self.finds.lock().unwrap().push_back(outcome);
    }

    /// Queue the same find_element failure `n` times
    pub fn push_find_failures(&self, error: DriverError, n: u32) {
        let mut queue = self.finds.lock().unwrap();
        for _ in 0..n {
            queue.push_back(Err(error.clone()));
        }
    }

    /// Outcome applied once the find queue is empty
    pub fn set_find_fallback(&self, outcome: Result<ElementHandle, DriverError>) {
        *self.find_fallback.lock().unwrap() = outcome;
    }

    /// Queue one send_keys outcome
    pub fn push_keys(&self, outcome: Result<(), DriverError>) {
        self.keys.lock().unwrap().push_back(outcome);
    }

    /// Queue one execute_script outcome
    pub fn push_script(&self, outcome: Result<Value, DriverError>) {
        self.scripts.lock().unwrap().push_back(outcome);
    }

    /// Queue one is_attached answer
    pub fn push_attached(&self, attached: bool) {
        self.attached.lock().unwrap().push_back(attached);
    }

    pub fn find_calls(&self) -> u32 {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn keys_calls(&self) -> u32 {
        self.keys_calls.load(Ordering::SeqCst)
    }

    pub fn script_calls(&self) -> u32 {
        self.script_calls.load(Ordering::SeqCst)
    }

    pub fn attached_calls(&self) -> u32 {
        self.attached_calls.load(Ordering::SeqCst)
    }
}

impl Default for ScriptedDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DriverPort for ScriptedDriver {
    async fn find_element(&self, locator: &Locator) -> Result<ElementHandle, DriverError> {
        let call = self.find_calls.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("stub find_element call {} for {}", call, locator);
        match self.finds.lock().unwrap().pop_front() {
            Some(outcome) => outcome,
            None => self.find_fallback.lock().unwrap().clone(),
        }
    }

    async fn send_keys(&self, element: &ElementHandle, text: &str) -> Result<(), DriverError> {
        let call = self.keys_calls.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            "stub send_keys call {} to {} ({} chars)",
            call,
            element.locator,
            text.len()
        );
        self.keys.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    async fn execute_script(&self, _script: &str) -> Result<Value, DriverError> {
        self.script_calls.fetch_add(1, Ordering::SeqCst);
        self.scripts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }

    async fn is_attached(&self, _element: &ElementHandle) -> Result<bool, DriverError> {
        self.attached_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.attached.lock().unwrap().pop_front().unwrap_or(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_outcomes_then_fallback() {
        let driver = ScriptedDriver::new();
        let locator = Locator::css("#add-to-cart");

        driver.push_find(Err(DriverError::StaleElement("detached".into())));
        driver.push_find(Ok(ScriptedDriver::handle(&locator)));

        assert!(driver.find_element(&locator).await.is_err());
        assert!(driver.find_element(&locator).await.is_ok());
        // Queue drained, fallback applies
        assert!(matches!(
            driver.find_element(&locator).await,
            Err(DriverError::NoSuchElement(_))
        ));
        assert_eq!(driver.find_calls(), 3);
    }

    #[tokio::test]
    async fn test_attached_defaults_true() {
        let driver = ScriptedDriver::new();
        let handle = ScriptedDriver::handle(&Locator::id("price"));

        driver.push_attached(false);
        assert!(!driver.is_attached(&handle).await.unwrap());
        assert!(driver.is_attached(&handle).await.unwrap());
    }
}
