//! Planned versus actual, per budget line.
//!
//! Transactions are attributed to lines by [`LineMatcher`]; the calculators
//! then sum them in integer minor units. Rounding only happens on the
//! percentage figure.

pub mod aggregate;
pub mod line;
pub mod matcher;
pub mod types;

#[cfg(test)]
mod tests;

pub use aggregate::compute_all_consumptions;
pub use line::{compute_line_consumption, percentage};
pub use matcher::LineMatcher;
pub use types::{
    ConsumptionReport, ConsumptionStatus, KindTotals, LineConsumption, MatchOutcome,
    UnmatchedReason, UnmatchedTransaction,
};
