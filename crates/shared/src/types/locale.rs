//! Display locales.
//!
//! Only the pieces the engine renders itself: month names and number
//! separators. Message localization belongs to the caller.

use serde::{Deserialize, Serialize};

const MONTHS_FR: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Supported display locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// French (default).
    #[default]
    Fr,
    /// English.
    En,
}

impl Locale {
    fn month_table(self) -> &'static [&'static str; 12] {
        match self {
            Self::Fr => &MONTHS_FR,
            Self::En => &MONTHS_EN,
        }
    }

    /// Returns the capitalized month name for `month` (1-12).
    #[must_use]
    pub fn month_name(self, month: u32) -> Option<&'static str> {
        let index = usize::try_from(month.checked_sub(1)?).ok()?;
        self.month_table().get(index).copied()
    }

    /// Looks a month number up by name, ignoring case and surrounding spaces.
    #[must_use]
    pub fn month_from_name(self, name: &str) -> Option<u32> {
        let needle = name.trim().to_lowercase();
        self.month_table()
            .iter()
            .position(|candidate| candidate.to_lowercase() == needle)
            .and_then(|index| u32::try_from(index + 1).ok())
    }

    /// Thousands separator.
    #[must_use]
    pub const fn group_separator(self) -> &'static str {
        match self {
            Self::Fr => " ",
            Self::En => ",",
        }
    }

    /// Decimal separator.
    #[must_use]
    pub const fn decimal_separator(self) -> &'static str {
        match self {
            Self::Fr => ",",
            Self::En => ".",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fr => write!(f, "fr"),
            Self::En => write!(f, "en"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fr" | "fr-fr" | "fr_fr" => Ok(Self::Fr),
            "en" | "en-us" | "en_us" | "en-gb" | "en_gb" => Ok(Self::En),
            _ => Err(format!("Unknown locale: {s}")),
        }
    }
}
