//! Accepted year range for periods.

use tirelire_shared::Clock;
use tirelire_shared::config::PeriodConfig;

/// Inclusive range of years a `Period` may take.
///
/// Built from an explicit current year so validation never depends on a
/// hidden clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    min: i32,
    max: i32,
}

impl YearWindow {
    /// Creates a window `[min, max]`.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Window for the given current year: `[config.min_year, current + config.years_ahead]`.
    #[must_use]
    pub const fn for_current_year(current_year: i32, config: &PeriodConfig) -> Self {
        Self::new(config.min_year, current_year.saturating_add(config.years_ahead))
    }

    /// Window relative to the clock's current year.
    pub fn from_clock(clock: &dyn Clock, config: &PeriodConfig) -> Self {
        Self::for_current_year(clock.current_year(), config)
    }

    /// Earliest accepted year.
    #[must_use]
    pub const fn min(self) -> i32 {
        self.min
    }

    /// Latest accepted year.
    #[must_use]
    pub const fn max(self) -> i32 {
        self.max
    }

    /// Returns true if `year` is accepted.
    #[must_use]
    pub const fn contains(self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }
}
