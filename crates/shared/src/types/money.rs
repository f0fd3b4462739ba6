//! Money type stored as integer minor units.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `i64` cents; every sum is exact. Conversion to a decimal
//! representation only happens at the display boundary. Only checked
//! arithmetic is exposed; there are no `+`/`-` operators on `Money`.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::locale::Locale;

/// Number of minor units in one major unit (cents per euro).
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Represents a monetary amount in minor currency units.
///
/// Serialized as a bare integer (`320000` is 3200.00).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from minor units (cents).
    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Checked addition. `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. `None` on overflow.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Sums amounts, returning `None` if any intermediate sum overflows.
    pub fn checked_sum<I>(iter: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter()
            .try_fold(Self::ZERO, |acc, amount| acc.checked_add(amount))
    }

    /// Returns `max(self, 0)`.
    #[must_use]
    pub const fn clamp_non_negative(self) -> Self {
        if self.0 < 0 { Self::ZERO } else { self }
    }

    /// Divides by an integer and rounds half-to-even on the minor unit.
    ///
    /// Returns `None` for a zero divisor or on overflow.
    #[must_use]
    pub fn div_round_half_even(self, divisor: i64) -> Option<Self> {
        let quotient = self.0.checked_div(divisor)?;
        let remainder = self.0.checked_rem(divisor)?;
        if remainder == 0 {
            return Some(Self(quotient));
        }

        // Truncation went toward zero; the true quotient lies one step further
        // in the direction of the result's sign.
        let step = if (self.0 < 0) == (divisor < 0) { 1 } else { -1 };
        let twice_remainder = u128::from(remainder.unsigned_abs()) * 2;
        let divisor_abs = u128::from(divisor.unsigned_abs());

        let rounded = match twice_remainder.cmp(&divisor_abs) {
            Ordering::Less => quotient,
            Ordering::Greater => quotient.checked_add(step)?,
            Ordering::Equal if quotient % 2 == 0 => quotient,
            Ordering::Equal => quotient.checked_add(step)?,
        };
        Some(Self(rounded))
    }

    /// Decimal view in major units (`320000` -> `3200.00`).
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Converts a major-unit decimal back to minor units.
    ///
    /// Returns `None` when the value has sub-cent precision or does not fit.
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Option<Self> {
        let scaled = value.checked_mul(Decimal::from(MINOR_UNITS_PER_MAJOR))?;
        if !scaled.fract().is_zero() {
            return None;
        }
        scaled.to_i64().map(Self)
    }

    /// Formats with the locale's group and decimal separators ("3 200,00").
    #[must_use]
    pub fn format_with(self, locale: Locale) -> String {
        let abs = self.0.unsigned_abs();
        let units = (abs / MINOR_UNITS_PER_MAJOR.unsigned_abs()).to_string();
        let cents = abs % MINOR_UNITS_PER_MAJOR.unsigned_abs();

        let mut grouped = String::with_capacity(units.len() + units.len() / 3 * 2);
        for (i, ch) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push_str(locale.group_separator());
            }
            grouped.push(ch);
        }

        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{sign}{grouped}{}{cents:02}", locale.decimal_separator())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl From<i64> for Money {
    fn from(minor: i64) -> Self {
        Self(minor)
    }
}
