//! Budget data types.
//!
//! Two layers: `*Input` records are what callers deserialize from storage or
//! transport; `Budget`, `BudgetLine` and `Transaction` are the validated
//! forms the calculators operate on. The validated forms have private fields
//! and are only produced by [`super::validation::validate_budget`].

use serde::{Deserialize, Serialize};
use tirelire_shared::types::{BudgetId, BudgetLineId, Money, TransactionId, UserId};

use crate::period::{Period, PeriodInput};

/// Direction of a planned line or an actual transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    /// Money coming in.
    Income,
    /// Money spent.
    Expense,
    /// Money set aside.
    Saving,
}

impl FlowKind {
    /// All kinds, in reporting order.
    pub const ALL: [Self; 3] = [Self::Income, Self::Expense, Self::Saving];

    /// Returns true for kinds that reduce the balance.
    #[must_use]
    pub const fn is_outflow(self) -> bool {
        matches!(self, Self::Expense | Self::Saving)
    }
}

/// How a transaction recurs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseKind {
    /// Same amount every month (rent, subscriptions).
    Fixed,
    /// Recurs but the amount varies (groceries).
    #[default]
    Variable,
    /// Happens once.
    OneOff,
}

// ============================================================================
// Raw input records
// ============================================================================

/// A planned line as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLineInput {
    /// Line ID.
    pub id: BudgetLineId,
    /// Income, expense or saving.
    pub kind: FlowKind,
    /// Planned amount in minor units.
    pub planned_amount: Money,
    /// Whether the line repeats every month.
    #[serde(default)]
    pub recurring: bool,
    /// Display name, also used to match recurring transactions.
    #[serde(default)]
    pub name: String,
}

/// A transaction as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    /// Transaction ID.
    pub id: TransactionId,
    /// Budget the transaction was recorded against.
    pub budget_id: BudgetId,
    /// Amount in minor units.
    pub amount: Money,
    /// Income, expense or saving.
    #[serde(rename = "type")]
    pub kind: FlowKind,
    /// Recurrence classification.
    #[serde(default)]
    pub expense_kind: ExpenseKind,
    /// Whether the transaction is regenerated every month.
    #[serde(default)]
    pub recurring: bool,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Explicit link to a planned line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_id: Option<BudgetLineId>,
}

/// A monthly budget as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInput {
    /// Budget ID.
    pub id: BudgetId,
    /// Owner, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Month the budget covers.
    pub period: PeriodInput,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Balance carried over from the previous month, as last persisted.
    #[serde(default)]
    pub starting_balance: Money,
    /// Planned lines.
    #[serde(default)]
    pub lines: Vec<BudgetLineInput>,
    /// Recorded transactions.
    #[serde(default)]
    pub transactions: Vec<TransactionInput>,
}

// ============================================================================
// Validated records
// ============================================================================

/// A validated planned line. `planned_amount` is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLine {
    pub(crate) id: BudgetLineId,
    pub(crate) kind: FlowKind,
    pub(crate) planned_amount: Money,
    pub(crate) recurring: bool,
    pub(crate) name: String,
}

impl BudgetLine {
    /// Line ID.
    #[must_use]
    pub const fn id(&self) -> BudgetLineId {
        self.id
    }

    /// Income, expense or saving.
    #[must_use]
    pub const fn kind(&self) -> FlowKind {
        self.kind
    }

    /// Planned amount (non-negative).
    #[must_use]
    pub const fn planned_amount(&self) -> Money {
        self.planned_amount
    }

    /// Whether the line repeats every month.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.recurring
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A validated transaction. `amount` is strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub(crate) id: TransactionId,
    pub(crate) budget_id: BudgetId,
    pub(crate) amount: Money,
    #[serde(rename = "type")]
    pub(crate) kind: FlowKind,
    pub(crate) expense_kind: ExpenseKind,
    pub(crate) recurring: bool,
    pub(crate) name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) line_id: Option<BudgetLineId>,
}

impl Transaction {
    /// Transaction ID.
    #[must_use]
    pub const fn id(&self) -> TransactionId {
        self.id
    }

    /// Owning budget.
    #[must_use]
    pub const fn budget_id(&self) -> BudgetId {
        self.budget_id
    }

    /// Amount (strictly positive).
    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }

    /// Income, expense or saving.
    #[must_use]
    pub const fn kind(&self) -> FlowKind {
        self.kind
    }

    /// Recurrence classification.
    #[must_use]
    pub const fn expense_kind(&self) -> ExpenseKind {
        self.expense_kind
    }

    /// Whether the transaction is regenerated every month.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.recurring
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explicit line reference, if any.
    #[must_use]
    pub const fn line_id(&self) -> Option<BudgetLineId> {
        self.line_id
    }
}

/// A validated monthly budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub(crate) id: BudgetId,
    pub(crate) user_id: Option<UserId>,
    pub(crate) period: Period,
    pub(crate) description: String,
    pub(crate) starting_balance: Money,
    pub(crate) lines: Vec<BudgetLine>,
    pub(crate) transactions: Vec<Transaction>,
}

impl Budget {
    /// Budget ID.
    #[must_use]
    pub const fn id(&self) -> BudgetId {
        self.id
    }

    /// Owner, when known.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Month covered.
    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }

    /// Free-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Starting balance as stored with the budget.
    #[must_use]
    pub const fn starting_balance(&self) -> Money {
        self.starting_balance
    }

    /// Planned lines, in input order.
    #[must_use]
    pub fn lines(&self) -> &[BudgetLine] {
        &self.lines
    }

    /// Recorded transactions, in input order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Looks a line up by ID.
    #[must_use]
    pub fn line(&self, id: BudgetLineId) -> Option<&BudgetLine> {
        self.lines.iter().find(|line| line.id == id)
    }
}
