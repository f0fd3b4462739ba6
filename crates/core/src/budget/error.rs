//! Budget error types.

use thiserror::Error;
use tirelire_shared::ValidationErrors;
use tirelire_shared::types::{BudgetLineId, TransactionId};

use super::types::FlowKind;
use crate::period::Period;

/// A recurring transaction matched more than one recurring line by name.
///
/// The engine reports every candidate and never picks one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Transaction {transaction_id} ({kind:?} {name:?}) matches {} recurring lines",
    .candidates.len()
)]
pub struct AmbiguousMatchError {
    /// The transaction that could not be attributed.
    pub transaction_id: TransactionId,
    /// Its kind.
    pub kind: FlowKind,
    /// The name it was matched by.
    pub name: String,
    /// Every line that matched, in budget order.
    pub candidates: Vec<BudgetLineId>,
}

/// Budget calculation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// Input failed validation; every problem found is listed.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// A recurring transaction could not be attributed to a single line.
    #[error(transparent)]
    AmbiguousMatch(#[from] AmbiguousMatchError),

    /// Periods handed to the rollover chain are not strictly ascending.
    #[error("Periods must be strictly ascending: {next} follows {previous}")]
    UnorderedChain {
        /// Earlier position in the input.
        previous: Period,
        /// Position that does not come after it.
        next: Period,
    },

    /// Budgets handed to the rollover chain belong to different users.
    #[error("Rollover chain mixes budgets from different users")]
    MixedOwners,

    /// Re-chaining was asked to start past the end of the chain.
    #[error("Cannot re-chain from position {index}: chain has {len} periods")]
    ChainIndexOutOfRange {
        /// Requested start position.
        index: usize,
        /// Number of periods in the chain.
        len: usize,
    },

    /// A sum left the representable range.
    #[error("Amount overflow while computing {0}")]
    Overflow(&'static str),
}

impl From<ValidationErrors> for BudgetError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
