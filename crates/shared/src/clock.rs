//! Injectable clock.
//!
//! Anything that needs "now" (year validation window, current/past period
//! checks, daily allowance) receives it through a `Clock` or an explicit
//! instant. Nothing in the engine calls `Local::now()` itself.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Source of the current local date-time.
pub trait Clock: Send + Sync {
    /// Current local instant (naive, local wall-clock time).
    fn now(&self) -> NaiveDateTime;

    /// Current local date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Current calendar year.
    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Reads the operating system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Always returns the same instant. Used by tests and replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    /// Creates a clock frozen at `now`.
    #[must_use]
    pub const fn new(now: NaiveDateTime) -> Self {
        Self(now)
    }

    /// Creates a clock frozen at local midnight of `date`.
    #[must_use]
    pub fn at_date(date: NaiveDate) -> Self {
        Self(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
