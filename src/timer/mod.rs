//! One-shot timer firing a registered callback.
//!
//! The timer knows nothing about doors: it waits out a delay on the
//! tokio clock and then invokes whatever [`TimerClient`] was passed to
//! [`Timer::register`]. The callback runs inline on the registering
//! task, so an error raised inside it propagates straight back to the
//! caller of `register`.
//!
//! Each registration is one-shot; re-arming means calling `register`
//! again. Under `#[tokio::test(start_paused = true)]` the delay elapses
//! on tokio's virtual clock, so tests never sleep in real time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use thiserror::Error;
use tokio::time::{sleep, Duration};
use tracing::debug;

// ============================================================================
// TimerClient
// ============================================================================

/// Callback target invoked when a timer's delay elapses.
pub trait TimerClient {
    /// Error raised by the callback and propagated out of `register`.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Invoked once when the registered delay has elapsed.
    fn on_timeout(&self) -> Result<(), Self::Error>;
}

// ============================================================================
// Timer
// ============================================================================

/// One-shot timer.
///
/// Stateless: the client is a parameter of the scheduling call rather
/// than a field, so repeated registrations share nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Timer;

impl Timer {
    /// Creates a new timer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits out the delay, then invokes the client's timeout callback.
    ///
    /// # Errors
    ///
    /// Propagates whatever error `client.on_timeout()` raises.
    pub async fn register<C>(&self, timeout_seconds: u64, client: &C) -> Result<(), C::Error>
    where
        C: TimerClient + ?Sized,
    {
        debug!("Timer armed for {}s", timeout_seconds);
        sleep(Duration::from_secs(timeout_seconds)).await;

        debug!("Timer fired after {}s", timeout_seconds);
        client.on_timeout()
    }
}

// ============================================================================
// MockTimerClient
// ============================================================================

/// Error returned by a [`MockTimerClient`] configured to fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("mock timeout callback failed")]
pub struct MockTimeoutError;

/// Recording timer client for test harnesses.
#[derive(Debug, Default)]
pub struct MockTimerClient {
    timeout_calls: Mutex<Vec<()>>,
    should_fail: AtomicBool,
}

impl MockTimerClient {
    /// Creates a new mock that succeeds on every callback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout_calls: Mutex::new(Vec::new()),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Makes subsequent callbacks return an error.
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Returns how many times the callback has fired.
    #[must_use]
    pub fn timeout_call_count(&self) -> usize {
        self.timeout_calls.lock().unwrap().len()
    }
}

impl TimerClient for MockTimerClient {
    type Error = MockTimeoutError;

    fn on_timeout(&self) -> Result<(), MockTimeoutError> {
        self.timeout_calls.lock().unwrap().push(());

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(MockTimeoutError);
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
