//! Property-based tests for consumption.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use tirelire_shared::types::{BudgetId, BudgetLineId, Money, TransactionId};

use super::{ConsumptionStatus, LineMatcher, compute_all_consumptions, compute_line_consumption};
use crate::budget::{Budget, BudgetError, BudgetLine, ExpenseKind, FlowKind, Transaction};
use crate::period::Period;
use crate::testing::{WINDOW, any_budget, unambiguous_budget};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every transaction is either matched to one line or unmatched, never both.
    #[test]
    fn prop_transactions_are_partitioned(budget in unambiguous_budget()) {
        let report = compute_all_consumptions(&budget).unwrap();

        let mut seen = HashSet::new();
        for line in &report.per_line {
            for id in &line.matched {
                prop_assert!(seen.insert(*id), "transaction {} matched twice", id);
            }
        }
        for u in &report.unmatched {
            let id = u.transaction.id();
            prop_assert!(seen.insert(id), "transaction {} matched and unmatched", id);
        }
        let all: HashSet<_> = budget.transactions().iter().map(Transaction::id).collect();
        prop_assert_eq!(seen, all);
    }

    /// Matched plus unmatched transactions, bucketed by their own type, add up to the totals.
    #[test]
    fn prop_attribution_adds_up_to_totals(budget in unambiguous_budget()) {
        let report = compute_all_consumptions(&budget).unwrap();
        let by_id: HashMap<_, _> = budget.transactions().iter().map(|t| (t.id(), t)).collect();

        let mut attributed = report.unmatched_totals().unwrap();
        for line in &report.per_line {
            let mut consumed = Money::ZERO;
            for id in &line.matched {
                let t = by_id[id];
                attributed = attributed.checked_add(t.kind(), t.amount()).unwrap();
                consumed = consumed.checked_add(t.amount()).unwrap();
            }
            prop_assert_eq!(consumed, line.consumed);
        }
        prop_assert_eq!(attributed, report.totals);
    }

    /// Totals do not depend on matching at all.
    #[test]
    fn prop_totals_are_plain_sums(budget in unambiguous_budget()) {
        let report = compute_all_consumptions(&budget).unwrap();
        for kind in FlowKind::ALL {
            let expected: i64 = budget
                .transactions()
                .iter()
                .filter(|t| t.kind() == kind)
                .map(|t| t.amount().minor_units())
                .sum();
            prop_assert_eq!(report.totals.get(kind), Money::from_minor(expected));
        }
    }

    /// Same input, same output.
    #[test]
    fn prop_aggregate_is_idempotent(budget in any_budget()) {
        prop_assert_eq!(compute_all_consumptions(&budget), compute_all_consumptions(&budget));
    }

    /// The per-line calculator agrees with the aggregate one.
    #[test]
    fn prop_line_and_aggregate_agree(budget in unambiguous_budget()) {
        let report = compute_all_consumptions(&budget).unwrap();
        let matcher = LineMatcher::new(budget.lines());
        for line in budget.lines() {
            let single = compute_line_consumption(line, budget.transactions(), &matcher).unwrap();
            prop_assert_eq!(Some(&single), report.line(line.id()));
        }
    }

    /// Status follows the sign of `remaining`.
    #[test]
    fn prop_status_matches_remaining(budget in unambiguous_budget()) {
        let report = compute_all_consumptions(&budget).unwrap();
        for line in &report.per_line {
            let expected = match line.remaining.minor_units().signum() {
                1 => ConsumptionStatus::Under,
                0 => ConsumptionStatus::At,
                _ => ConsumptionStatus::Over,
            };
            prop_assert_eq!(line.status, expected);
        }
    }
}

fn recurring_line(name: &str) -> BudgetLine {
    BudgetLine {
        id: BudgetLineId::new(),
        kind: FlowKind::Expense,
        planned_amount: Money::from_minor(80_000),
        recurring: true,
        name: name.to_string(),
    }
}

#[test]
fn test_ambiguity_aborts_whole_report() {
    let id = BudgetId::new();
    let budget = Budget {
        id,
        user_id: None,
        period: Period::new(2025, 1, &WINDOW).unwrap(),
        description: String::new(),
        starting_balance: Money::ZERO,
        lines: vec![recurring_line("Loyer"), recurring_line("Loyer"), recurring_line("Internet")],
        transactions: vec![Transaction {
            id: TransactionId::new(),
            budget_id: id,
            amount: Money::from_minor(80_000),
            kind: FlowKind::Expense,
            expense_kind: ExpenseKind::Fixed,
            recurring: true,
            name: "Loyer".to_string(),
            line_id: None,
        }],
    };

    match compute_all_consumptions(&budget) {
        Err(BudgetError::AmbiguousMatch(err)) => {
            assert_eq!(err.candidates, vec![budget.lines[0].id, budget.lines[1].id]);
            assert_eq!(err.name, "Loyer");
        }
        other => panic!("expected ambiguous match, got {other:?}"),
    }
}

#[test]
fn test_explicit_reference_to_other_kind_is_attributed() {
    let id = BudgetId::new();
    let groceries = BudgetLine {
        id: BudgetLineId::new(),
        kind: FlowKind::Expense,
        planned_amount: Money::from_minor(2_000),
        recurring: false,
        name: "Courses".to_string(),
    };
    let line_id = groceries.id;
    let saving = Transaction {
        id: TransactionId::new(),
        budget_id: id,
        amount: Money::from_minor(500),
        kind: FlowKind::Saving,
        expense_kind: ExpenseKind::OneOff,
        recurring: false,
        name: "Livret A".to_string(),
        line_id: Some(line_id),
    };
    let saving_id = saving.id;
    let budget = Budget {
        id,
        user_id: None,
        period: Period::new(2025, 1, &WINDOW).unwrap(),
        description: String::new(),
        starting_balance: Money::ZERO,
        lines: vec![groceries],
        transactions: vec![saving],
    };

    let report = compute_all_consumptions(&budget).unwrap();
    assert!(report.unmatched.is_empty());
    let line = report.line(line_id).unwrap();
    assert_eq!(line.consumed, Money::from_minor(500));
    assert_eq!(line.remaining, Money::from_minor(1_500));
    assert_eq!(line.status, ConsumptionStatus::Under);
    assert_eq!(line.kind_mismatches, vec![saving_id]);
    assert_eq!(report.totals.saving, Money::from_minor(500));
    assert_eq!(report.totals.expense, Money::ZERO);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["perLine"][0]["kindMismatches"][0], saving_id.to_string());
}

#[test]
fn test_report_serializes_camel_case() {
    let id = BudgetId::new();
    let line = recurring_line("Loyer");
    let dangling = BudgetLineId::new();
    let budget = Budget {
        id,
        user_id: None,
        period: Period::new(2025, 1, &WINDOW).unwrap(),
        description: String::new(),
        starting_balance: Money::ZERO,
        lines: vec![line],
        transactions: vec![Transaction {
            id: TransactionId::new(),
            budget_id: id,
            amount: Money::from_minor(500),
            kind: FlowKind::Expense,
            expense_kind: ExpenseKind::OneOff,
            recurring: false,
            name: "Cadeau".to_string(),
            line_id: Some(dangling),
        }],
    };

    let json = serde_json::to_value(compute_all_consumptions(&budget).unwrap()).unwrap();
    assert_eq!(json["perLine"][0]["status"], "under");
    assert_eq!(json["perLine"][0]["percentage"], "0.00");
    assert_eq!(json["unmatched"][0]["reason"], "dangling_reference");
    assert_eq!(json["unmatched"][0]["lineId"], dangling.to_string());
    assert_eq!(json["totals"]["expense"], 500);
}
