//! Consumption of a single budget line.

use rust_decimal::Decimal;
use tirelire_shared::types::Money;

use super::matcher::LineMatcher;
use super::types::{ConsumptionStatus, LineConsumption, MatchOutcome};
use crate::budget::{BudgetError, BudgetLine, Transaction};

/// Computes planned versus consumed for `line`.
///
/// `transactions` is the whole budget's transaction list; `matcher` must be
/// built over the whole budget's lines so name ambiguity can be seen. Any
/// ambiguous transaction fails the call, even one that would not land on
/// `line`.
pub fn compute_line_consumption(
    line: &BudgetLine,
    transactions: &[Transaction],
    matcher: &LineMatcher<'_>,
) -> Result<LineConsumption, BudgetError> {
    let mut matched = Vec::new();
    for transaction in transactions {
        if matcher.match_transaction(transaction)? == MatchOutcome::Matched(line.id()) {
            matched.push(transaction);
        }
    }
    consumption_of(line, &matched)
}

/// Builds the consumption record from the transactions already attributed to `line`.
pub(crate) fn consumption_of(
    line: &BudgetLine,
    matched: &[&Transaction],
) -> Result<LineConsumption, BudgetError> {
    let consumed = Money::checked_sum(matched.iter().map(|t| t.amount()))
        .ok_or(BudgetError::Overflow("line consumption"))?;
    let planned = line.planned_amount();
    let remaining = planned
        .checked_sub(consumed)
        .ok_or(BudgetError::Overflow("line remaining"))?;

    Ok(LineConsumption {
        line_id: line.id(),
        kind: line.kind(),
        planned,
        consumed,
        remaining,
        percentage: percentage(planned, consumed),
        status: ConsumptionStatus::of(planned, consumed),
        matched: matched.iter().map(|t| t.id()).collect(),
        kind_mismatches: matched
            .iter()
            .filter(|t| t.kind() != line.kind())
            .map(|t| t.id())
            .collect(),
    })
}

/// `consumed / planned * 100`, rounded half-to-even to two decimals.
///
/// Computed on integers so the only rounding is the final one.
/// `None` when `planned` is zero.
#[must_use]
pub fn percentage(planned: Money, consumed: Money) -> Option<Decimal> {
    let divisor = i128::from(planned.minor_units());
    if divisor == 0 {
        return None;
    }
    // Hundredths of a percent.
    let numerator = i128::from(consumed.minor_units()) * 10_000;

    let quotient = numerator / divisor;
    let remainder = numerator % divisor;
    let twice = remainder.unsigned_abs() * 2;
    let step = if (numerator < 0) == (divisor < 0) { 1 } else { -1 };

    let rounded = match twice.cmp(&divisor.unsigned_abs()) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + step,
        std::cmp::Ordering::Equal if quotient % 2 == 0 => quotient,
        std::cmp::Ordering::Equal => quotient + step,
    };
    Decimal::try_from_i128_with_scale(rounded, 2).ok()
}
