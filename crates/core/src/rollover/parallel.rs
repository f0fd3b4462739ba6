//! Parallel work over budgets that do not depend on each other.

use rayon::prelude::*;
use tirelire_shared::types::Money;

use super::chain::RolloverChain;
use super::types::RolloverStep;
use crate::budget::{Budget, BudgetError};
use crate::formulas::{BudgetFormulas, PeriodSummary, SummaryOptions};

/// A budget whose starting balance is already known.
#[derive(Debug, Clone, Copy)]
pub struct SummaryJob<'a> {
    /// Budget to summarize.
    pub budget: &'a Budget,
    /// Its starting balance.
    pub starting_balance: Money,
}

/// Summarizes independent budgets in parallel.
///
/// Results come back in input order; one failing budget does not affect the others.
#[must_use]
pub fn summarize_independent(
    jobs: &[SummaryJob<'_>],
    options: SummaryOptions<'_>,
) -> Vec<Result<PeriodSummary, BudgetError>> {
    jobs.par_iter()
        .map(|job| {
            BudgetFormulas::summarize(job.budget, job.starting_balance, options)
                .map(|(_, summary)| summary)
        })
        .collect()
}

/// Resolves several users' chains in parallel, each chain sequentially.
///
/// Every chain starts from its first budget's stored starting balance.
/// Results come back in input order.
#[must_use]
pub fn resolve_independent_chains(
    chains: &[Vec<Budget>],
    options: SummaryOptions<'_>,
) -> Vec<Result<Vec<RolloverStep>, BudgetError>> {
    chains
        .par_iter()
        .map(|chain| RolloverChain::resolve(chain, None, options))
        .collect()
}
