//! Carrying ending balances from one month to the next.

pub mod chain;
pub mod parallel;
pub mod types;


pub use chain::RolloverChain;
pub use parallel::{SummaryJob, resolve_independent_chains, summarize_independent};
pub use types::RolloverStep;
