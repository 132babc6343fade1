//! Doorwatch Library
//!
//! This library models a door that must not be left open past a
//! configured timeout. It includes:
//! - Timed door with open/closed state and a grace period
//! - One-shot async timer firing a registered callback
//! - Timeout observer adapter connecting door and timer
//! - Type definitions for configuration and state
//!
//! # Example
//!
//! ```
//! use doorwatch::{TimedDoor, TimeoutObserver, Timer};
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let door = TimedDoor::with_timeout(1);
//! let observer = TimeoutObserver::new(&door);
//! let timer = Timer::new();
//!
//! door.unlock();
//! door.lock();
//!
//! // The door was closed again in time, so the check passes.
//! timer
//!     .register(door.timeout_seconds(), &observer)
//!     .await
//!     .unwrap();
//! # }
//! ```

pub mod door;
pub mod timer;
pub mod types;

// Re-export commonly used types for convenience
pub use door::{DoorError, TimedDoor, TimeoutObserver};
pub use timer::{MockTimeoutError, MockTimerClient, Timer, TimerClient};
pub use types::{DoorConfig, DoorState};
