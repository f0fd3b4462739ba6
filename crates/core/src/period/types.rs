//! Calendar month period.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tirelire_shared::types::Locale;

use super::error::PeriodError;
use super::window::YearWindow;

/// Raw period as received from callers, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodInput {
    /// Month, expected 1-12.
    pub month: u32,
    /// Four-digit year.
    pub year: i32,
}

/// A validated calendar month.
///
/// Only constructible through [`Period::new`] (or the parsers built on it),
/// so every instance has a month in 1-12 and a year inside the `YearWindow`
/// it was checked against. Ordering is chronological: by year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "PeriodInput")]
pub struct Period {
    start: NaiveDate,
    next_start: NaiveDate,
}

/// Chronological position of the month containing `instant`.
fn instant_ordinal(instant: NaiveDateTime) -> i64 {
    i64::from(instant.year()) * 12 + i64::from(instant.month())
}

impl Period {
    /// Creates a period after checking month and year.
    pub fn new(year: i32, month: u32, window: &YearWindow) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        let out_of_range = PeriodError::YearOutOfRange {
            year,
            min: window.min(),
            max: window.max(),
        };
        if !window.contains(year) {
            return Err(out_of_range);
        }

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(out_of_range.clone())?;
        let next_start = start
            .checked_add_months(Months::new(1))
            .ok_or(out_of_range)?;
        Ok(Self { start, next_start })
    }

    /// Validates a raw input record.
    pub fn from_input(input: PeriodInput, window: &YearWindow) -> Result<Self, PeriodError> {
        Self::new(input.year, input.month, window)
    }

    /// The period containing `instant`.
    pub fn containing(instant: NaiveDateTime, window: &YearWindow) -> Result<Self, PeriodError> {
        Self::new(instant.year(), instant.month(), window)
    }

    /// Calendar year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.start.year()
    }

    /// Month number (1-12).
    #[must_use]
    pub fn month(self) -> u32 {
        self.start.month()
    }

    /// `year * 12 + month`; consecutive months differ by exactly one.
    #[must_use]
    pub fn ordinal(self) -> i64 {
        i64::from(self.year()) * 12 + i64::from(self.month())
    }

    /// Total order on `(year, month)`.
    #[must_use]
    pub fn compare(a: Self, b: Self) -> Ordering {
        a.cmp(&b)
    }

    /// Number of months from `self` to `other` (negative if `other` is earlier).
    #[must_use]
    pub fn months_until(self, other: Self) -> i64 {
        other.ordinal() - self.ordinal()
    }

    /// First instant of the month and first instant of the following month.
    #[must_use]
    pub fn boundaries(self) -> (NaiveDateTime, NaiveDateTime) {
        (
            self.start.and_time(NaiveTime::MIN),
            self.next_start.and_time(NaiveTime::MIN),
        )
    }

    /// Returns true if `instant` lies in `[start, end)`.
    #[must_use]
    pub fn contains(self, instant: NaiveDateTime) -> bool {
        let (start, end) = self.boundaries();
        instant >= start && instant < end
    }

    /// Position of this period relative to the month containing `now`.
    #[must_use]
    pub fn relative_to(self, now: NaiveDateTime) -> Ordering {
        self.ordinal().cmp(&instant_ordinal(now))
    }

    /// Returns true if `now` falls in this period.
    #[must_use]
    pub fn is_current(self, now: NaiveDateTime) -> bool {
        self.relative_to(now) == Ordering::Equal
    }

    /// Returns true if this period ended before the month containing `now`.
    #[must_use]
    pub fn is_past(self, now: NaiveDateTime) -> bool {
        self.relative_to(now) == Ordering::Less
    }

    /// Returns true if this period starts after the month containing `now`.
    #[must_use]
    pub fn is_future(self, now: NaiveDateTime) -> bool {
        self.relative_to(now) == Ordering::Greater
    }

    /// Number of days in the month.
    #[must_use]
    pub fn days_in_month(self) -> i64 {
        (self.next_start - self.start).num_days()
    }

    /// Days left in the period as of `today`, today included.
    ///
    /// Full month length for a future period, zero for a past one.
    #[must_use]
    pub fn remaining_days(self, today: NaiveDate) -> i64 {
        if today < self.start {
            self.days_in_month()
        } else if today >= self.next_start {
            0
        } else {
            (self.next_start - today).num_days()
        }
    }

    /// The following month, validated against `window`.
    pub fn next(self, window: &YearWindow) -> Result<Self, PeriodError> {
        Self::new(self.next_start.year(), self.next_start.month(), window)
    }

    /// The preceding month, validated against `window`.
    pub fn previous(self, window: &YearWindow) -> Result<Self, PeriodError> {
        let (year, month) = if self.month() == 1 {
            (self.year() - 1, 12)
        } else {
            (self.year(), self.month() - 1)
        };
        Self::new(year, month, window)
    }

    /// Human-readable rendering, e.g. "Janvier 2025".
    #[must_use]
    pub fn format(self, locale: Locale) -> String {
        locale.month_name(self.month()).map_or_else(
            || self.to_string(),
            |name| format!("{name} {}", self.year()),
        )
    }

    /// Parses the output of [`Period::format`] back into a period.
    ///
    /// Month names are matched case-insensitively.
    pub fn parse_formatted(
        s: &str,
        locale: Locale,
        window: &YearWindow,
    ) -> Result<Self, PeriodError> {
        let parse_error = || PeriodError::Parse(s.to_string());
        let mut parts = s.split_whitespace();
        let (Some(name), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(parse_error());
        };
        let month = locale.month_from_name(name).ok_or_else(parse_error)?;
        let year = year.parse::<i32>().map_err(|_| parse_error())?;
        Self::new(year, month, window)
    }

    /// Parses the canonical "YYYY-MM" form produced by `Display`.
    pub fn parse_iso(s: &str, window: &YearWindow) -> Result<Self, PeriodError> {
        let parse_error = || PeriodError::Parse(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(parse_error)?;
        let year = year.parse::<i32>().map_err(|_| parse_error())?;
        let month = month.parse::<u32>().map_err(|_| parse_error())?;
        Self::new(year, month, window)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl From<Period> for PeriodInput {
    fn from(period: Period) -> Self {
        Self {
            month: period.month(),
            year: period.year(),
        }
    }
}
