//! Timeout observer adapter.
//!
//! Connects a `TimedDoor` to the timer's callback interface: when the
//! timer fires, the observer inspects the door it is bound to and
//! propagates the violation if the door is still open.

use crate::timer::TimerClient;

use super::error::DoorError;
use super::TimedDoor;

/// Adapter binding a door to the timer callback interface.
///
/// Holds a plain borrow of the door, so the door must outlive any
/// observer bound to it. The observer is stateless beyond this
/// reference; one door may have any number of observers.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutObserver<'a> {
    /// The door this observer inspects when the timer fires.
    door: &'a TimedDoor,
}

impl<'a> TimeoutObserver<'a> {
    /// Creates an observer bound to the given door for its whole lifetime.
    #[must_use]
    pub fn new(door: &'a TimedDoor) -> Self {
        Self { door }
    }

    /// Returns the door this observer is bound to.
    #[must_use]
    pub fn door(&self) -> &TimedDoor {
        self.door
    }
}

impl TimerClient for TimeoutObserver<'_> {
    type Error = DoorError;

    fn on_timeout(&self) -> Result<(), DoorError> {
        self.door.check_state()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod timeout_observer_tests {
        use super::*;

        #[test]
        fn test_door_accessor() {
            let door = TimedDoor::with_timeout(1);
            let observer = TimeoutObserver::new(&door);

            assert_eq!(observer.door().timeout_seconds(), 1);
            assert!(std::ptr::eq(observer.door(), &door));
        }

        #[test]
        fn test_on_timeout_closed_door() {
            let door = TimedDoor::with_timeout(1);
            let observer = TimeoutObserver::new(&door);

            assert!(observer.on_timeout().is_ok());
        }

        #[test]
        fn test_on_timeout_open_door() {
            let door = TimedDoor::with_timeout(1);
            let observer = TimeoutObserver::new(&door);

            door.unlock();

            let err = observer.on_timeout().unwrap_err();
            assert!(err.is_left_open());
        }

        #[test]
        fn test_on_timeout_after_relock() {
            let door = TimedDoor::with_timeout(1);
            let observer = TimeoutObserver::new(&door);

            door.unlock();
            door.lock();

            assert!(observer.on_timeout().is_ok());
        }

        #[test]
        fn test_multiple_observers_share_one_door() {
            let door = TimedDoor::with_timeout(1);
            let first = TimeoutObserver::new(&door);
            let second = TimeoutObserver::new(&door);

            door.unlock();

            assert!(first.on_timeout().is_err());
            assert!(second.on_timeout().is_err());
        }
    }
}
