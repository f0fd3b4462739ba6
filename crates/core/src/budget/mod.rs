//! Monthly budgets, their planned lines and recorded transactions.

pub mod error;
pub mod types;
pub mod validation;

pub use error::{AmbiguousMatchError, BudgetError};
pub use types::{
    Budget, BudgetInput, BudgetLine, BudgetLineInput, ExpenseKind, FlowKind, Transaction,
    TransactionInput,
};
pub use validation::{validate_budget, validate_budgets};
