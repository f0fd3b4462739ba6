//! Transaction to line attribution.

use std::collections::{HashMap, HashSet};

use tirelire_shared::types::BudgetLineId;

use super::types::{MatchOutcome, UnmatchedReason};
use crate::budget::{AmbiguousMatchError, BudgetLine, FlowKind, Transaction};

/// Attributes transactions to the lines of one budget.
///
/// Matching runs in two phases:
/// 1. an explicit `line_id` wins when it names a line of the budget, whatever
///    that line's kind. A missing line is a dangling reference, not an error;
/// 2. a recurring transaction without `line_id` is matched by kind and
///    trimmed name against recurring lines. Several candidates is an error.
///
/// Everything else is unassigned.
#[derive(Debug)]
pub struct LineMatcher<'a> {
    known: HashSet<BudgetLineId>,
    recurring: HashMap<(FlowKind, &'a str), Vec<BudgetLineId>>,
}

impl<'a> LineMatcher<'a> {
    /// Indexes `lines` for matching.
    #[must_use]
    pub fn new(lines: &'a [BudgetLine]) -> Self {
        let mut known = HashSet::with_capacity(lines.len());
        let mut recurring: HashMap<(FlowKind, &'a str), Vec<BudgetLineId>> = HashMap::new();

        for line in lines {
            known.insert(line.id());
            if line.is_recurring() {
                recurring
                    .entry((line.kind(), line.name().trim()))
                    .or_default()
                    .push(line.id());
            }
        }

        Self { known, recurring }
    }

    /// Decides where `transaction` belongs.
    pub fn match_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<MatchOutcome, AmbiguousMatchError> {
        if let Some(line_id) = transaction.line_id() {
            return Ok(if self.known.contains(&line_id) {
                MatchOutcome::Matched(line_id)
            } else {
                MatchOutcome::Unmatched(UnmatchedReason::DanglingReference { line_id })
            });
        }

        if !transaction.is_recurring() {
            return Ok(MatchOutcome::Unmatched(UnmatchedReason::Unassigned));
        }

        let name = transaction.name().trim();
        match self.recurring.get(&(transaction.kind(), name)).map(Vec::as_slice) {
            None | Some([]) => Ok(MatchOutcome::Unmatched(UnmatchedReason::NoCandidate)),
            Some([only]) => Ok(MatchOutcome::Matched(*only)),
            Some(candidates) => Err(AmbiguousMatchError {
                transaction_id: transaction.id(),
                kind: transaction.kind(),
                name: name.to_string(),
                candidates: candidates.to_vec(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::ExpenseKind;
    use tirelire_shared::types::{BudgetId, Money, TransactionId};

    fn line(kind: FlowKind, name: &str, recurring: bool) -> BudgetLine {
        BudgetLine {
            id: BudgetLineId::new(),
            kind,
            planned_amount: Money::from_minor(10_000),
            recurring,
            name: name.to_string(),
        }
    }

    fn tx(
        kind: FlowKind,
        name: &str,
        recurring: bool,
        line_id: Option<BudgetLineId>,
    ) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            budget_id: BudgetId::new(),
            amount: Money::from_minor(500),
            kind,
            expense_kind: ExpenseKind::Fixed,
            recurring,
            name: name.to_string(),
            line_id,
        }
    }

    #[test]
    fn test_explicit_reference_wins_over_name() {
        let lines = vec![
            line(FlowKind::Expense, "Loyer", true),
            line(FlowKind::Expense, "Courses", false),
        ];
        let matcher = LineMatcher::new(&lines);
        let t = tx(FlowKind::Expense, "Loyer", true, Some(lines[1].id()));
        assert_eq!(matcher.match_transaction(&t), Ok(MatchOutcome::Matched(lines[1].id())));
    }

    #[test]
    fn test_dangling_reference_is_not_an_error() {
        let lines = vec![line(FlowKind::Expense, "Loyer", true)];
        let matcher = LineMatcher::new(&lines);
        let missing = BudgetLineId::new();
        let t = tx(FlowKind::Expense, "Loyer", true, Some(missing));
        assert_eq!(
            matcher.match_transaction(&t),
            Ok(MatchOutcome::Unmatched(UnmatchedReason::DanglingReference { line_id: missing }))
        );
    }

    #[test]
    fn test_reference_to_other_kind_is_still_matched() {
        let lines = vec![line(FlowKind::Expense, "Courses", false)];
        let matcher = LineMatcher::new(&lines);
        let t = tx(FlowKind::Saving, "Livret A", false, Some(lines[0].id()));
        assert_eq!(matcher.match_transaction(&t), Ok(MatchOutcome::Matched(lines[0].id())));
    }

    #[test]
    fn test_recurring_matches_by_kind_and_trimmed_name() {
        let lines = vec![
            line(FlowKind::Income, "Loyer", true),
            line(FlowKind::Expense, " Loyer ", true),
        ];
        let matcher = LineMatcher::new(&lines);
        let t = tx(FlowKind::Expense, "Loyer", true, None);
        assert_eq!(matcher.match_transaction(&t), Ok(MatchOutcome::Matched(lines[1].id())));
    }

    #[test]
    fn test_name_match_is_case_sensitive() {
        let lines = vec![line(FlowKind::Expense, "Loyer", true)];
        let matcher = LineMatcher::new(&lines);
        let t = tx(FlowKind::Expense, "loyer", true, None);
        assert_eq!(
            matcher.match_transaction(&t),
            Ok(MatchOutcome::Unmatched(UnmatchedReason::NoCandidate))
        );
    }

    #[test]
    fn test_non_recurring_lines_are_not_candidates() {
        let lines = vec![line(FlowKind::Expense, "Loyer", false)];
        let matcher = LineMatcher::new(&lines);
        let t = tx(FlowKind::Expense, "Loyer", true, None);
        assert_eq!(
            matcher.match_transaction(&t),
            Ok(MatchOutcome::Unmatched(UnmatchedReason::NoCandidate))
        );
    }

    #[test]
    fn test_non_recurring_without_reference_is_unassigned() {
        let lines = vec![line(FlowKind::Expense, "Loyer", true)];
        let matcher = LineMatcher::new(&lines);
        let t = tx(FlowKind::Expense, "Loyer", false, None);
        assert_eq!(
            matcher.match_transaction(&t),
            Ok(MatchOutcome::Unmatched(UnmatchedReason::Unassigned))
        );
    }

    #[test]
    fn test_ambiguous_name_lists_every_candidate() {
        let lines = vec![
            line(FlowKind::Expense, "Loyer", true),
            line(FlowKind::Expense, "Loyer", true),
        ];
        let matcher = LineMatcher::new(&lines);
        let t = tx(FlowKind::Expense, "Loyer", true, None);
        let err = matcher.match_transaction(&t).unwrap_err();
        assert_eq!(err.transaction_id, t.id());
        assert_eq!(err.candidates, vec![lines[0].id(), lines[1].id()]);
    }
}
