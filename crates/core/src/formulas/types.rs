//! Period summary types.

use chrono::NaiveDate;
use serde::Serialize;
use tirelire_shared::types::{BudgetId, Money};

use super::due::DuePolicy;
use crate::consumption::KindTotals;
use crate::period::Period;

/// Figures for one budget period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    /// Budget summarized.
    pub budget_id: BudgetId,
    /// Month covered.
    pub period: Period,
    /// Balance the period started from.
    pub starting_balance: Money,
    /// `starting + income - expense - saving`.
    pub ending_balance: Money,
    /// Actual totals per kind.
    pub totals: KindTotals,
    /// Planned totals per kind.
    pub planned: KindTotals,
    /// Still owed on expense and saving lines that are not due yet.
    pub reserved: Money,
    /// `ending_balance - reserved`.
    pub available_to_spend: Money,
    /// `starting + planned income - planned expense - planned saving`.
    pub projected_ending_balance: Money,
    /// Days left in the period as of the summary date, today included.
    pub remaining_days: i64,
    /// `available_to_spend` spread over the remaining days. `None` once the period is over.
    pub daily_allowance: Option<Money>,
}

/// Caller-supplied inputs that are not part of the budget itself.
#[derive(Clone, Copy)]
pub struct SummaryOptions<'a> {
    /// Decides which lines are already due.
    pub due: &'a dyn DuePolicy,
    /// Date the summary is computed for.
    pub today: NaiveDate,
}

impl<'a> SummaryOptions<'a> {
    /// Options for `today` with the given due policy.
    #[must_use]
    pub fn new(due: &'a dyn DuePolicy, today: NaiveDate) -> Self {
        Self { due, today }
    }
}

impl std::fmt::Debug for SummaryOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryOptions")
            .field("today", &self.today)
            .finish_non_exhaustive()
    }
}
