//! Period error types.

use thiserror::Error;

/// Period construction and parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Month outside 1-12.
    #[error("Invalid month {0}: must be between 1 and 12")]
    InvalidMonth(u32),

    /// Year outside the accepted window.
    #[error("Year {year} is out of range: must be between {min} and {max}")]
    YearOutOfRange {
        /// Rejected year.
        year: i32,
        /// Earliest accepted year.
        min: i32,
        /// Latest accepted year.
        max: i32,
    },

    /// String could not be read as a period.
    #[error("Cannot parse period from {0:?}")]
    Parse(String),
}

impl PeriodError {
    /// Name of the input field this error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidMonth(_) => "month",
            Self::YearOutOfRange { .. } => "year",
            Self::Parse(_) => "period",
        }
    }
}
