//! Consumption of every line of a budget in one pass.

use std::collections::HashMap;

use tirelire_shared::types::BudgetLineId;

use super::line::consumption_of;
use super::matcher::LineMatcher;
use super::types::{ConsumptionReport, KindTotals, MatchOutcome, UnmatchedTransaction};
use crate::budget::{Budget, BudgetError, Transaction};

/// Attributes every transaction of `budget` and computes each line's consumption.
///
/// Each transaction lands in exactly one line's `matched` list or in
/// `unmatched`. `totals` covers all transactions whatever the match outcome.
/// An ambiguous recurring transaction fails the whole call.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(budget_id = %budget.id(), period = %budget.period())
)]
pub fn compute_all_consumptions(budget: &Budget) -> Result<ConsumptionReport, BudgetError> {
    let matcher = LineMatcher::new(budget.lines());
    let mut by_line: HashMap<BudgetLineId, Vec<&Transaction>> = HashMap::new();
    let mut unmatched = Vec::new();
    let mut totals = KindTotals::default();

    for transaction in budget.transactions() {
        totals = totals
            .checked_add(transaction.kind(), transaction.amount())
            .ok_or(BudgetError::Overflow("transaction totals"))?;

        match matcher.match_transaction(transaction)? {
            MatchOutcome::Matched(line_id) => by_line.entry(line_id).or_default().push(transaction),
            MatchOutcome::Unmatched(reason) => unmatched.push(UnmatchedTransaction {
                transaction: transaction.clone(),
                reason,
            }),
        }
    }

    let per_line = budget
        .lines()
        .iter()
        .map(|line| {
            let matched = by_line.get(&line.id()).map_or(&[][..], Vec::as_slice);
            consumption_of(line, matched)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ConsumptionReport {
        per_line,
        unmatched,
        totals,
    })
}
