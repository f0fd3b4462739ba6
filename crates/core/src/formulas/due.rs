//! Which planned lines count as already due.
//!
//! The available-to-spend figure reserves what is still owed on lines that
//! are not due yet. The formula only asks one question per line; callers
//! decide the answer.

use tirelire_shared::config::DuePolicyKind;

use crate::budget::BudgetLine;

/// Answers whether a planned line is already due.
pub trait DuePolicy: Sync {
    /// Returns true if `line` is due, so nothing is reserved for it.
    fn is_due(&self, line: &BudgetLine) -> bool;
}

/// Every line is due.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllDue;

impl DuePolicy for AllDue {
    fn is_due(&self, _line: &BudgetLine) -> bool {
        true
    }
}

/// No line is due yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NothingDue;

impl DuePolicy for NothingDue {
    fn is_due(&self, _line: &BudgetLine) -> bool {
        false
    }
}

/// Non-recurring lines are due immediately; recurring lines are not yet due.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonRecurringDue;

impl DuePolicy for NonRecurringDue {
    fn is_due(&self, line: &BudgetLine) -> bool {
        !line.is_recurring()
    }
}

impl<F> DuePolicy for F
where
    F: Fn(&BudgetLine) -> bool + Sync,
{
    fn is_due(&self, line: &BudgetLine) -> bool {
        self(line)
    }
}

impl DuePolicy for DuePolicyKind {
    fn is_due(&self, line: &BudgetLine) -> bool {
        match self {
            Self::AllDue => AllDue.is_due(line),
            Self::NothingDue => NothingDue.is_due(line),
            Self::NonRecurringDue => NonRecurringDue.is_due(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::FlowKind;
    use rstest::rstest;
    use tirelire_shared::types::{BudgetLineId, Money};

    fn line(recurring: bool) -> BudgetLine {
        BudgetLine {
            id: BudgetLineId::new(),
            kind: FlowKind::Expense,
            planned_amount: Money::from_minor(1_000),
            recurring,
            name: "Assurance".to_string(),
        }
    }

    #[rstest]
    #[case(DuePolicyKind::AllDue, true, true)]
    #[case(DuePolicyKind::AllDue, false, true)]
    #[case(DuePolicyKind::NothingDue, true, false)]
    #[case(DuePolicyKind::NothingDue, false, false)]
    #[case(DuePolicyKind::NonRecurringDue, true, false)]
    #[case(DuePolicyKind::NonRecurringDue, false, true)]
    fn test_configured_policies(
        #[case] kind: DuePolicyKind,
        #[case] recurring: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(kind.is_due(&line(recurring)), expected);
    }

    #[test]
    fn test_closure_policy() {
        let by_name = |l: &BudgetLine| l.name() == "Assurance";
        assert!(by_name.is_due(&line(true)));
    }
}
