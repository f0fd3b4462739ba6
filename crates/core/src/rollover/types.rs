//! Rollover chain types.

use serde::Serialize;
use tirelire_shared::types::{BudgetId, Money};

use crate::consumption::ConsumptionReport;
use crate::formulas::PeriodSummary;
use crate::period::Period;

/// One resolved period of a rollover chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolloverStep {
    /// Budget of this period.
    pub budget_id: BudgetId,
    /// Month covered.
    pub period: Period,
    /// Starting balance persisted with the budget.
    pub stored_starting_balance: Money,
    /// True when the stored starting balance differs from the carried one
    /// and should be re-persisted.
    pub is_stale: bool,
    /// Line attribution for the period.
    pub report: ConsumptionReport,
    /// Figures computed from the carried starting balance.
    pub summary: PeriodSummary,
}

impl RolloverStep {
    /// Starting balance carried in from the previous period (or the seed).
    #[must_use]
    pub const fn starting_balance(&self) -> Money {
        self.summary.starting_balance
    }

    /// Ending balance, carried into the next period.
    #[must_use]
    pub const fn ending_balance(&self) -> Money {
        self.summary.ending_balance
    }
}
