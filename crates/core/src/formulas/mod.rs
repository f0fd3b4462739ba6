//! Period balances: ending balance, available to spend, daily allowance.

pub mod due;
pub mod service;
pub mod types;


pub use due::{AllDue, DuePolicy, NonRecurringDue, NothingDue};
pub use service::BudgetFormulas;
pub use types::{PeriodSummary, SummaryOptions};
