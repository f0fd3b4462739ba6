//! Proptest strategies shared by the calculator tests.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::sample::Index;
use tirelire_shared::types::{BudgetId, BudgetLineId, Money, TransactionId};

use crate::budget::{Budget, BudgetLine, ExpenseKind, FlowKind, Transaction};
use crate::period::{Period, YearWindow};

pub(crate) const WINDOW: YearWindow = YearWindow::new(2020, 2036);

const NAMES: [&str; 4] = ["Loyer", "Courses", "Salaire", "Livret A"];

pub(crate) fn any_kind() -> impl Strategy<Value = FlowKind> {
    prop_oneof![
        Just(FlowKind::Income),
        Just(FlowKind::Expense),
        Just(FlowKind::Saving)
    ]
}

fn any_line() -> impl Strategy<Value = BudgetLine> {
    (any_kind(), 0i64..1_000_000, any::<bool>(), 0usize..NAMES.len()).prop_map(
        |(kind, planned, recurring, name)| BudgetLine {
            id: BudgetLineId::new(),
            kind,
            planned_amount: Money::from_minor(planned),
            recurring,
            name: NAMES[name].to_string(),
        },
    )
}

/// How a generated transaction refers to a line.
#[derive(Debug, Clone)]
enum Link {
    None,
    Existing(Index),
    Dangling,
}

fn any_link() -> impl Strategy<Value = Link> {
    prop_oneof![
        Just(Link::None),
        any::<Index>().prop_map(Link::Existing),
        Just(Link::Dangling)
    ]
}

type TxSeed = (FlowKind, i64, bool, usize, Link);

fn any_tx_seed() -> impl Strategy<Value = TxSeed> {
    (any_kind(), 1i64..500_000, any::<bool>(), 0usize..NAMES.len(), any_link())
}

fn build(
    year: i32,
    month: u32,
    starting: i64,
    lines: Vec<BudgetLine>,
    seeds: Vec<TxSeed>,
) -> Budget {
    let id = BudgetId::new();
    let transactions = seeds
        .into_iter()
        .map(|(kind, amount, recurring, name, link)| Transaction {
            id: TransactionId::new(),
            budget_id: id,
            amount: Money::from_minor(amount),
            kind,
            expense_kind: ExpenseKind::Variable,
            recurring,
            name: NAMES[name].to_string(),
            line_id: match link {
                Link::None => None,
                Link::Existing(_) if lines.is_empty() => None,
                Link::Existing(index) => Some(index.get(&lines).id),
                Link::Dangling => Some(BudgetLineId::new()),
            },
        })
        .collect();

    Budget {
        id,
        user_id: None,
        period: Period::new(year, month, &WINDOW).unwrap(),
        description: String::new(),
        starting_balance: Money::from_minor(starting),
        lines,
        transactions,
    }
}

/// Any budget, possibly with ambiguous recurring names.
pub(crate) fn any_budget() -> impl Strategy<Value = Budget> {
    (
        2020i32..=2036,
        1u32..=12,
        -1_000_000i64..1_000_000,
        prop::collection::vec(any_line(), 0..6),
        prop::collection::vec(any_tx_seed(), 0..12),
    )
        .prop_map(|(year, month, starting, lines, seeds)| {
            build(year, month, starting, lines, seeds)
        })
}

/// A budget where no recurring transaction can match two lines.
pub(crate) fn unambiguous_budget() -> impl Strategy<Value = Budget> {
    any_budget().prop_map(|mut budget| {
        let mut seen = HashSet::new();
        for line in &mut budget.lines {
            if line.recurring && !seen.insert((line.kind, line.name.clone())) {
                line.recurring = false;
            }
        }
        budget
    })
}
