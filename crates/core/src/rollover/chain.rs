//! Sequential carry of ending balances.
//!
//! The ending balance of each period is the starting balance of the next, so
//! a user's periods are processed strictly in order. Re-chaining after an edit
//! only recomputes from the edited period on.

use tirelire_shared::types::{Money, UserId};

use super::types::RolloverStep;
use crate::budget::{Budget, BudgetError};
use crate::formulas::{BudgetFormulas, SummaryOptions};

/// Rollover chain resolver.
pub struct RolloverChain;

impl RolloverChain {
    /// Checks that `budgets` are strictly ascending by period and belong to one user.
    ///
    /// Budgets without an owner are accepted alongside any owner.
    pub fn check(budgets: &[Budget]) -> Result<(), BudgetError> {
        for pair in budgets.windows(2) {
            let (previous, next) = (&pair[0], &pair[1]);
            if previous.period() >= next.period() {
                return Err(BudgetError::UnorderedChain {
                    previous: previous.period(),
                    next: next.period(),
                });
            }
        }

        let mut owner: Option<UserId> = None;
        for user in budgets.iter().filter_map(Budget::user_id) {
            match owner {
                Some(known) if known != user => return Err(BudgetError::MixedOwners),
                _ => owner = Some(user),
            }
        }
        Ok(())
    }

    /// Resolves the whole chain.
    ///
    /// The first period starts from `seed`, or from its stored starting
    /// balance when no seed is given. Every later period starts from the
    /// previous ending balance.
    #[tracing::instrument(level = "trace", skip_all, fields(periods = budgets.len()))]
    pub fn resolve(
        budgets: &[Budget],
        seed: Option<Money>,
        options: SummaryOptions<'_>,
    ) -> Result<Vec<RolloverStep>, BudgetError> {
        Self::check(budgets)?;
        let Some(first) = budgets.first() else {
            return Ok(Vec::new());
        };
        let seed = seed.unwrap_or_else(|| first.starting_balance());
        Self::carry(budgets, seed, Vec::with_capacity(budgets.len()), options)
    }

    /// Re-chains from position `index` after budgets at or after it changed.
    ///
    /// Steps before `index` are reused from `previous` as they are; the
    /// period at `index` starts from the ending balance of `previous[index - 1]`
    /// (or from `previous[0]`'s starting balance when `index` is 0).
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(periods = budgets.len(), index = index)
    )]
    pub fn resolve_from(
        budgets: &[Budget],
        previous: &[RolloverStep],
        index: usize,
        options: SummaryOptions<'_>,
    ) -> Result<Vec<RolloverStep>, BudgetError> {
        if index >= budgets.len() || index >= previous.len() {
            return Err(BudgetError::ChainIndexOutOfRange {
                index,
                len: budgets.len().min(previous.len()),
            });
        }
        Self::check(budgets)?;

        let seed = match index {
            0 => previous[0].starting_balance(),
            _ => previous[index - 1].ending_balance(),
        };
        let mut steps = Vec::with_capacity(budgets.len());
        steps.extend_from_slice(&previous[..index]);
        Self::carry(&budgets[index..], seed, steps, options)
    }

    fn carry(
        budgets: &[Budget],
        seed: Money,
        mut steps: Vec<RolloverStep>,
        options: SummaryOptions<'_>,
    ) -> Result<Vec<RolloverStep>, BudgetError> {
        let mut starting = seed;
        for budget in budgets {
            let (report, summary) = BudgetFormulas::summarize(budget, starting, options)?;
            starting = summary.ending_balance;
            steps.push(RolloverStep {
                budget_id: budget.id(),
                period: budget.period(),
                stored_starting_balance: budget.starting_balance(),
                is_stale: budget.starting_balance() != summary.starting_balance,
                report,
                summary,
            });
        }
        Ok(steps)
    }
}
