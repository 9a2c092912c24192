//! Clock abstraction so time-dependent logic stays deterministic in tests.

use chrono::{DateTime, Utc};

/// Source of "now" for age calculations.
///
/// Domain code takes `&impl Clock` instead of reading the wall clock
/// directly. Production callers pass [`SystemClock`]; tests pass
/// [`FixedClock`] for reproducible output.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_always_returns_its_instant() {
        let instant = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }
}
