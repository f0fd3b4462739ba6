//! Engine configuration management.
//!
//! Every value has a default, so the engine runs without any file. Callers
//! load it once at startup and pass the pieces down explicitly.

use serde::Deserialize;

use crate::types::Locale;

/// Engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Locale used to render periods and amounts.
    #[serde(default)]
    pub locale: Locale,
    /// Allowed period range.
    #[serde(default)]
    pub period: PeriodConfig,
    /// Which planned lines count as already due when computing the
    /// available-to-spend figure.
    #[serde(default)]
    pub due_policy: DuePolicyKind,
}

/// Allowed period range, relative to the injected clock's current year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PeriodConfig {
    /// Earliest accepted year.
    #[serde(default = "default_min_year")]
    pub min_year: i32,
    /// How many years after the current year are accepted.
    #[serde(default = "default_years_ahead")]
    pub years_ahead: i32,
}

fn default_min_year() -> i32 {
    2020
}

fn default_years_ahead() -> i32 {
    10
}

impl Default for PeriodConfig {
    fn default() -> Self {
        Self {
            min_year: default_min_year(),
            years_ahead: default_years_ahead(),
        }
    }
}

/// Named due predicates selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuePolicyKind {
    /// Every line is due; nothing is reserved.
    AllDue,
    /// No line is due yet; every unconsumed obligation is reserved.
    NothingDue,
    /// Non-recurring lines are due immediately, recurring lines are reserved.
    #[default]
    NonRecurringDue,
}

impl EngineConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `TIRELIRE__*` environment variables (`TIRELIRE__PERIOD__MIN_YEAR`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("TIRELIRE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
