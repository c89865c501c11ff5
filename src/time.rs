//! Wall-clock abstraction.
//!
//! Observation timestamps come from a [`Clock`] so the run controller can
//! be driven with fixed times in tests.

use chrono::{DateTime, Utc};

/// Source of the current UTC time.
///
/// # Example
///
/// ```
/// use ip_tracker::time::{Clock, SystemClock};
///
/// assert!(SystemClock.now().timestamp() > 0);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// The real clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_between_surrounding_reads() {
        let before = Utc::now();
        let now = SystemClock.now();
        let after = Utc::now();

        assert!(before <= now && now <= after);
    }

    #[test]
    fn system_clock_is_usable_behind_a_reference() {
        fn read(clock: &impl Clock) -> DateTime<Utc> {
            clock.now()
        }

        assert!(read(&SystemClock).timestamp() > 0);
    }
}
