//! Locator and element-handle types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Element query descriptor
///
/// An opaque query resolved by the driver against the current page. Ownership
/// is transient: locators are built per call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locator {
    /// CSS selector
    Css(String),

    /// XPath expression
    XPath(String),

    /// Element id attribute
    Id(String),
}

impl Locator {
    pub fn css(selector: impl Into<String>) -> Self {
        Locator::Css(selector.into())
    }

    pub fn xpath(expression: impl Into<String>) -> Self {
        Locator::XPath(expression.into())
    }

    pub fn id(id: impl Into<String>) -> Self {
        Locator::Id(id.into())
    }

    /// Get locator kind as string
    pub fn kind_name(&self) -> &'static str {
        match self {
            Locator::Css(_) => "css",
            Locator::XPath(_) => "xpath",
            Locator::Id(_) => "id",
        }
    }

    /// The raw query text
    pub fn query(&self) -> &str {
        match self {
            Locator::Css(q) | Locator::XPath(q) | Locator::Id(q) => q,
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.kind_name(), self.query())
    }
}

/// Handle to a resolved element
///
/// Carries the driver-side object id plus the locator that produced it. A
/// handle may go stale when the page mutates; callers probe liveness through
/// `DriverPort::is_attached`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementHandle {
    /// Driver-side node reference
    pub object_id: String,

    /// Locator that resolved this handle
    pub locator: Locator,
}

impl ElementHandle {
    pub fn new(object_id: impl Into<String>, locator: Locator) -> Self {
        Self {
            object_id: object_id.into(),
            locator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_display() {
        assert_eq!(Locator::css("#search").to_string(), "css=#search");
        assert_eq!(
            Locator::xpath("//button[@type='submit']").to_string(),
            "xpath=//button[@type='submit']"
        );
        assert_eq!(Locator::id("compare-total").to_string(), "id=compare-total");
    }

    #[test]
    fn test_locator_query() {
        let locator = Locator::css(".product-thumb");
        assert_eq!(locator.kind_name(), "css");
        assert_eq!(locator.query(), ".product-thumb");
    }
}
