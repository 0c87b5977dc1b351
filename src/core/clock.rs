//! Sources of "now".
//!
//! Relative expressions ("tomorrow", "next week") are always resolved against
//! an explicit timestamp. The [`Clock`] trait is where that timestamp comes
//! from at the edges of the program.

use chrono::{Local, NaiveDateTime};

/// Supplies the current local wall-clock time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// The current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert_eq!(FixedClock(at).now(), at);
    }

    #[test]
    fn test_system_clock_is_recent() {
        let epoch = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(SystemClock.now() > epoch);
    }
}
