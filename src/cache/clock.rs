//! Clock Module
//!
//! Time source abstraction injected into the cache at construction, so tests
//! can drive expiration deterministically while production code reads the
//! wall clock.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, TimeDelta, Utc};

// == Clock Trait ==
/// A source of the current instant.
///
/// The cache owns its clock for its entire lifetime and reads it exactly
/// once per compaction pass.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

// == System Clock ==
/// Default clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// == Manual Clock ==
/// A controllable clock for deterministic tests.
///
/// Cloning shares the underlying instant, so a test can hand one handle to
/// the cache and keep another to advance time. Single-threaded, like the
/// cache itself.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    // == Constructor ==
    /// Creates a manual clock fixed at the given instant.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Rc::new(Cell::new(start)),
        }
    }

    // == Set ==
    /// Moves the clock to an absolute instant.
    pub fn set(&self, instant: DateTime<Utc>) {
        self.current.set(instant);
    }

    // == Advance ==
    /// Moves the clock forward by the given delta.
    pub fn advance(&self, delta: TimeDelta) {
        self.current.set(self.current.get() + delta);
    }

    /// Moves the clock forward by the given number of milliseconds.
    pub fn advance_millis(&self, millis: u64) {
        self.advance(TimeDelta::milliseconds(millis as i64));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.current.get()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_manual_clock_holds_instant() {
        let start = Utc::now();
        let clock = ManualClock::new(start);

        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start);
    }

    #[test]
    fn test_manual_clock_advance() {
        let start = Utc::now();
        let clock = ManualClock::new(start);

        clock.advance_millis(250);
        assert_eq!(clock.now(), start + TimeDelta::milliseconds(250));
    }

    #[test]
    fn test_manual_clock_set() {
        let start = Utc::now();
        let later = start + TimeDelta::seconds(30);
        let clock = ManualClock::new(start);

        clock.set(later);
        assert_eq!(clock.now(), later);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let start = Utc::now();
        let clock = ManualClock::new(start);
        let handle = clock.clone();

        handle.advance_millis(100);
        assert_eq!(clock.now(), start + TimeDelta::milliseconds(100));
    }
}
