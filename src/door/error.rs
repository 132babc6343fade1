//! Door error types.
//!
//! This module defines the error raised when a timeout check finds a
//! door that was left open past its configured grace period.

use thiserror::Error;

/// Errors that can occur when checking a timed door.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DoorError {
    /// The door was still open when the timeout elapsed.
    #[error("door left open past the {timeout_seconds}s timeout")]
    LeftOpen {
        /// The grace period that elapsed before the check.
        timeout_seconds: u64,
    },
}

impl DoorError {
    /// Returns true if this error reports a door left open.
    #[must_use]
    pub fn is_left_open(&self) -> bool {
        matches!(self, Self::LeftOpen { .. })
    }

    /// Returns the timeout that elapsed before the violation was observed.
    #[must_use]
    pub fn timeout_seconds(&self) -> u64 {
        match self {
            Self::LeftOpen { timeout_seconds } => *timeout_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_left_open() {
        let err = DoorError::LeftOpen {
            timeout_seconds: 30,
        };
        assert!(err.to_string().contains("left open"));
        assert!(err.to_string().contains("30s"));
    }

    #[test]
    fn test_is_left_open() {
        let err = DoorError::LeftOpen { timeout_seconds: 5 };
        assert!(err.is_left_open());
    }

    #[test]
    fn test_timeout_seconds() {
        let err = DoorError::LeftOpen {
            timeout_seconds: 120,
        };
        assert_eq!(err.timeout_seconds(), 120);
    }

    #[test]
    fn test_error_clone() {
        let err = DoorError::LeftOpen { timeout_seconds: 1 };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }

    #[test]
    fn test_error_eq() {
        let err1 = DoorError::LeftOpen { timeout_seconds: 5 };
        let err2 = DoorError::LeftOpen { timeout_seconds: 5 };
        let err3 = DoorError::LeftOpen { timeout_seconds: 6 };

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
