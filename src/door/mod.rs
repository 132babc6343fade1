//! Timed door model.
//!
//! This module contains the door side of the library:
//! - `TimedDoor`: open/closed state with a configured grace period
//! - `TimeoutObserver`: adapter that checks a door when a timer fires
//! - `DoorError`: the violation raised when a door is left open

pub mod error;
pub mod observer;

pub use error::DoorError;
pub use observer::TimeoutObserver;

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::types::{DoorConfig, DoorState};

/// A door with a configured grace period before an open state is reported.
///
/// The door starts closed. Its open flag lives in an `AtomicBool` so the
/// door can be locked and unlocked through a shared reference while an
/// observer holds a borrow of it.
#[derive(Debug)]
pub struct TimedDoor {
    /// Immutable configuration, fixed at construction.
    config: DoorConfig,
    /// Whether the door is currently open.
    open: AtomicBool,
}

impl TimedDoor {
    /// Creates a new closed door with the given configuration.
    pub fn new(config: DoorConfig) -> Self {
        Self {
            config,
            open: AtomicBool::new(false),
        }
    }

    /// Creates a new closed door with the given timeout in seconds.
    pub fn with_timeout(timeout_seconds: u64) -> Self {
        Self::new(DoorConfig::default().with_timeout_seconds(timeout_seconds))
    }

    /// Opens the door.
    ///
    /// Unlocking an already open door is a no-op.
    pub fn unlock(&self) {
        self.open.store(true, Ordering::SeqCst);
        debug!("Door unlocked");
    }

    /// Closes the door.
    ///
    /// Locking an already closed door is a no-op.
    pub fn lock(&self) {
        self.open.store(false, Ordering::SeqCst);
        debug!("Door locked");
    }

    /// Returns true if the door is currently open.
    #[must_use]
    pub fn is_opened(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Returns the current state of the door.
    #[must_use]
    pub fn state(&self) -> DoorState {
        if self.is_opened() {
            DoorState::Open
        } else {
            DoorState::Closed
        }
    }

    /// Returns the configured grace period in seconds.
    #[must_use]
    pub fn timeout_seconds(&self) -> u64 {
        self.config.timeout_seconds
    }

    /// Returns a reference to the door configuration.
    #[must_use]
    pub fn config(&self) -> &DoorConfig {
        &self.config
    }

    /// Checks whether the door was left open.
    ///
    /// This is the trigger invoked by the timeout callback. It observes
    /// the current state without transitioning it.
    ///
    /// # Errors
    ///
    /// Returns `DoorError::LeftOpen` if the door is currently open.
    pub fn check_state(&self) -> Result<(), DoorError> {
        if self.is_opened() {
            warn!(
                "Door still open after {}s grace period",
                self.config.timeout_seconds
            );
            return Err(DoorError::LeftOpen {
                timeout_seconds: self.config.timeout_seconds,
            });
        }

        debug!("Door check passed: door is closed");
        Ok(())
    }
}

impl Default for TimedDoor {
    fn default() -> Self {
        Self::new(DoorConfig::default())
    }
}

// ============================================================================
// Tests
// ============================================================================
