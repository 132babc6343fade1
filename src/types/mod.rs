//! Core data types for the doorwatch library.
//!
//! This module defines the data structures used for:
//! - Door state representation
//! - Door configuration with validation

use serde::{Deserialize, Serialize};

// ============================================================================
// DoorState
// ============================================================================

/// Represents the current state of a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorState {
    /// Door is closed (and locked)
    Closed,
    /// Door is open (unlocked)
    Open,
}

impl DoorState {
    /// Returns the string representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            DoorState::Closed => "closed",
            DoorState::Open => "open",
        }
    }

    /// Returns true if the door is open.
    pub fn is_open(&self) -> bool {
        matches!(self, DoorState::Open)
    }
}

impl Default for DoorState {
    fn default() -> Self {
        DoorState::Closed
    }
}

// ============================================================================
// DoorConfig
// ============================================================================

/// Configuration for a timed door.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorConfig {
    /// Grace period in seconds before an open door is reported (1-3600)
    pub timeout_seconds: u64,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}

impl DoorConfig {
    /// Creates a new configuration with the specified timeout.
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_seconds < 1 || self.timeout_seconds > 3600 {
            return Err("timeout must be in the 1-3600 second range".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
