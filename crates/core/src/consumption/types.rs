//! Consumption result types.

use rust_decimal::Decimal;
use serde::Serialize;
use tirelire_shared::types::{BudgetLineId, Money, TransactionId};

use crate::budget::{FlowKind, Transaction};

/// Where a line stands against its plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsumptionStatus {
    /// Consumed less than planned.
    Under,
    /// Consumed exactly the planned amount.
    At,
    /// Consumed more than planned.
    Over,
}

impl ConsumptionStatus {
    /// Status of `consumed` against `planned`.
    #[must_use]
    pub fn of(planned: Money, consumed: Money) -> Self {
        match consumed.cmp(&planned) {
            std::cmp::Ordering::Less => Self::Under,
            std::cmp::Ordering::Equal => Self::At,
            std::cmp::Ordering::Greater => Self::Over,
        }
    }
}

/// Planned versus consumed for one budget line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineConsumption {
    /// The line.
    pub line_id: BudgetLineId,
    /// Its kind.
    pub kind: FlowKind,
    /// Planned amount.
    pub planned: Money,
    /// Sum of matched transactions.
    pub consumed: Money,
    /// `planned - consumed`, negative when overspent.
    pub remaining: Money,
    /// `consumed / planned` in percent, two decimals. `None` when nothing was planned.
    pub percentage: Option<Decimal>,
    /// Under, at or over plan.
    pub status: ConsumptionStatus,
    /// Transactions attributed to the line, in input order.
    pub matched: Vec<TransactionId>,
    /// Matched transactions whose type differs from the line's kind. They
    /// reached the line through an explicit `line_id` and count in `consumed`.
    pub kind_mismatches: Vec<TransactionId>,
}

/// Why a transaction was not attributed to any line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum UnmatchedReason {
    /// Non-recurring and no explicit line reference.
    Unassigned,
    /// References a line that is not part of the budget.
    DanglingReference {
        /// The missing line.
        #[serde(rename = "lineId")]
        line_id: BudgetLineId,
    },
    /// Recurring, but no recurring line has the same kind and name.
    NoCandidate,
}

/// Result of matching one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Attributed to this line.
    Matched(BudgetLineId),
    /// Not attributed.
    Unmatched(UnmatchedReason),
}

/// A transaction left out of per-line attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmatchedTransaction {
    /// The transaction.
    pub transaction: Transaction,
    /// Why it was not attributed.
    #[serde(flatten)]
    pub reason: UnmatchedReason,
}

/// Amounts per flow kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindTotals {
    /// Income.
    pub income: Money,
    /// Expense.
    pub expense: Money,
    /// Saving.
    pub saving: Money,
}

impl KindTotals {
    /// Amount for `kind`.
    #[must_use]
    pub const fn get(&self, kind: FlowKind) -> Money {
        match kind {
            FlowKind::Income => self.income,
            FlowKind::Expense => self.expense,
            FlowKind::Saving => self.saving,
        }
    }

    /// Adds `amount` to the `kind` bucket. `None` on overflow.
    #[must_use]
    pub fn checked_add(mut self, kind: FlowKind, amount: Money) -> Option<Self> {
        let slot = match kind {
            FlowKind::Income => &mut self.income,
            FlowKind::Expense => &mut self.expense,
            FlowKind::Saving => &mut self.saving,
        };
        *slot = slot.checked_add(amount)?;
        Some(self)
    }

    /// `income - expense - saving`. `None` on overflow.
    #[must_use]
    pub fn net(&self) -> Option<Money> {
        self.income.checked_sub(self.expense)?.checked_sub(self.saving)
    }
}

/// Per-line attribution of a budget's transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionReport {
    /// One entry per budget line, in line order.
    pub per_line: Vec<LineConsumption>,
    /// Transactions attributed to no line, in input order.
    pub unmatched: Vec<UnmatchedTransaction>,
    /// Per-kind sums of every transaction, matched or not.
    pub totals: KindTotals,
}

impl ConsumptionReport {
    /// Consumption of a single line.
    #[must_use]
    pub fn line(&self, id: BudgetLineId) -> Option<&LineConsumption> {
        self.per_line.iter().find(|c| c.line_id == id)
    }

    /// Per-kind sums of unmatched transactions. `None` on overflow.
    #[must_use]
    pub fn unmatched_totals(&self) -> Option<KindTotals> {
        self.unmatched.iter().try_fold(KindTotals::default(), |acc, u| {
            acc.checked_add(u.transaction.kind(), u.transaction.amount())
        })
    }
}
