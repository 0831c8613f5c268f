//! Driver failure taxonomy

use thiserror::Error;

/// Driver-level failure
///
/// `Clone` so retry loops can keep the last failure while continuing to poll.
#[derive(Debug, Error, Clone)]
pub enum DriverError {
    /// A previously resolved handle no longer refers to a live node
    #[error("stale element reference: {0}")]
    StaleElement(String),

    /// The locator resolved to no elements
    #[error("no such element: {0}")]
    NoSuchElement(String),

    /// The locator query itself is malformed
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    /// Script execution failed in page context
    #[error("script error: {0}")]
    Script(String),

    /// The driver session is gone or unusable
    #[error("session error: {0}")]
    Session(String),

    /// A driver-internal operation timed out
    #[error("driver timeout: {0}")]
    Timeout(String),
}

/// Failure kind discriminant, used for allow-list membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverErrorKind {
    StaleElement,
    NoSuchElement,
    InvalidSelector,
    Script,
    Session,
    Timeout,
}

impl DriverErrorKind {
    /// Get kind name as string
    pub fn name(&self) -> &'static str {
        match self {
            DriverErrorKind::StaleElement => "stale-element",
            DriverErrorKind::NoSuchElement => "no-such-element",
            DriverErrorKind::InvalidSelector => "invalid-selector",
            DriverErrorKind::Script => "script",
            DriverErrorKind::Session => "session",
            DriverErrorKind::Timeout => "timeout",
        }
    }
}

impl DriverError {
    pub fn kind(&self) -> DriverErrorKind {
        match self {
            DriverError::StaleElement(_) => DriverErrorKind::StaleElement,
            DriverError::NoSuchElement(_) => DriverErrorKind::NoSuchElement,
            DriverError::InvalidSelector(_) => DriverErrorKind::InvalidSelector,
            DriverError::Script(_) => DriverErrorKind::Script,
            DriverError::Session(_) => DriverErrorKind::Session,
            DriverError::Timeout(_) => DriverErrorKind::Timeout,
        }
    }

    /// Check if the failure is safe to retry against the same session
    pub fn is_transient(&self) -> bool {
        matches!(
            self.kind(),
            DriverErrorKind::StaleElement | DriverErrorKind::Timeout
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let err = DriverError::StaleElement("node detached".into());
        assert_eq!(err.kind(), DriverErrorKind::StaleElement);
        assert!(err.is_transient());

        let err = DriverError::Session("browser closed".into());
        assert_eq!(err.kind(), DriverErrorKind::Session);
        assert!(!err.is_transient());
    }

    #[test]
    fn test_message_preserved() {
        let err = DriverError::NoSuchElement("css=#missing".into());
        assert_eq!(err.to_string(), "no such element: css=#missing");
    }
}
