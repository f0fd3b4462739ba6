//! Entry-boundary validation.
//!
//! Turns raw `BudgetInput` records into validated `Budget`s. Every rule is
//! checked and every failure is reported; nothing is computed from a budget
//! that failed here.

use std::collections::HashSet;

use tirelire_shared::ValidationErrors;

use super::error::BudgetError;
use super::types::{Budget, BudgetInput, BudgetLine, Transaction};
use crate::period::{Period, YearWindow};

/// Validates one budget.
///
/// Rules:
/// - period month in 1-12 and year inside `window`
/// - planned amounts are not negative
/// - transaction amounts are strictly positive
/// - every transaction belongs to this budget
/// - line and transaction IDs are unique
pub fn validate_budget(input: BudgetInput, window: &YearWindow) -> Result<Budget, BudgetError> {
    let mut errors = ValidationErrors::new();

    let period = match Period::from_input(input.period, window) {
        Ok(period) => Some(period),
        Err(e) => {
            errors.add(format!("period.{}", e.field()), e.to_string());
            None
        }
    };

    let mut line_ids = HashSet::with_capacity(input.lines.len());
    let mut lines = Vec::with_capacity(input.lines.len());
    for (i, line) in input.lines.into_iter().enumerate() {
        if line.planned_amount.is_negative() {
            errors.add(
                format!("lines[{i}].plannedAmount"),
                format!("must not be negative, got {}", line.planned_amount.minor_units()),
            );
        }
        if !line_ids.insert(line.id) {
            errors.add(format!("lines[{i}].id"), format!("duplicate line id {}", line.id));
        }
        lines.push(BudgetLine {
            id: line.id,
            kind: line.kind,
            planned_amount: line.planned_amount,
            recurring: line.recurring,
            name: line.name,
        });
    }

    let mut transaction_ids = HashSet::with_capacity(input.transactions.len());
    let mut transactions = Vec::with_capacity(input.transactions.len());
    for (i, tx) in input.transactions.into_iter().enumerate() {
        if !tx.amount.is_positive() {
            errors.add(
                format!("transactions[{i}].amount"),
                format!("must be strictly positive, got {}", tx.amount.minor_units()),
            );
        }
        if tx.budget_id != input.id {
            errors.add(
                format!("transactions[{i}].budgetId"),
                format!("belongs to budget {}, not {}", tx.budget_id, input.id),
            );
        }
        if !transaction_ids.insert(tx.id) {
            errors.add(
                format!("transactions[{i}].id"),
                format!("duplicate transaction id {}", tx.id),
            );
        }
        transactions.push(Transaction {
            id: tx.id,
            budget_id: tx.budget_id,
            amount: tx.amount,
            kind: tx.kind,
            expense_kind: tx.expense_kind,
            recurring: tx.recurring,
            name: tx.name,
            line_id: tx.line_id,
        });
    }

    match period {
        Some(period) if errors.is_empty() => Ok(Budget {
            id: input.id,
            user_id: input.user_id,
            period,
            description: input.description,
            starting_balance: input.starting_balance,
            lines,
            transactions,
        }),
        _ => Err(BudgetError::Validation(errors)),
    }
}

/// Validates several budgets, reporting failures of all of them together.
///
/// Field paths are prefixed with `budgets[i]`.
pub fn validate_budgets<I>(inputs: I, window: &YearWindow) -> Result<Vec<Budget>, BudgetError>
where
    I: IntoIterator<Item = BudgetInput>,
{
    let mut errors = ValidationErrors::new();
    let mut budgets = Vec::new();

    for (i, input) in inputs.into_iter().enumerate() {
        match validate_budget(input, window) {
            Ok(budget) => budgets.push(budget),
            Err(BudgetError::Validation(inner)) => {
                errors.extend_prefixed(&format!("budgets[{i}]"), inner);
            }
            Err(other) => return Err(other),
        }
    }

    errors.into_result(budgets).map_err(BudgetError::Validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::types::{BudgetLineInput, ExpenseKind, FlowKind, TransactionInput};
    use crate::period::PeriodInput;
    use tirelire_shared::types::{BudgetId, BudgetLineId, Money, TransactionId};

    const WINDOW: YearWindow = YearWindow::new(2020, 2036);

    fn line(planned: i64) -> BudgetLineInput {
        BudgetLineInput {
            id: BudgetLineId::new(),
            kind: FlowKind::Expense,
            planned_amount: Money::from_minor(planned),
            recurring: false,
            name: "Courses".to_string(),
        }
    }

    fn tx(budget_id: BudgetId, amount: i64) -> TransactionInput {
        TransactionInput {
            id: TransactionId::new(),
            budget_id,
            amount: Money::from_minor(amount),
            kind: FlowKind::Expense,
            expense_kind: ExpenseKind::Variable,
            recurring: false,
            name: "Courses".to_string(),
            line_id: None,
        }
    }

    fn budget(month: u32, year: i32) -> BudgetInput {
        BudgetInput {
            id: BudgetId::new(),
            user_id: None,
            period: PeriodInput { month, year },
            description: String::new(),
            starting_balance: Money::from_minor(100_000),
            lines: vec![],
            transactions: vec![],
        }
    }

    fn fields(err: &BudgetError) -> Vec<String> {
        match err {
            BudgetError::Validation(errors) => errors.iter().map(|e| e.field.clone()).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_budget_passes() {
        let mut input = budget(1, 2025);
        input.lines.push(line(0));
        input.lines.push(line(30_000));
        input.transactions.push(tx(input.id, 1));

        let budget = validate_budget(input.clone(), &WINDOW).unwrap();
        assert_eq!(budget.id(), input.id);
        assert_eq!(budget.period().to_string(), "2025-01");
        assert_eq!(budget.lines().len(), 2);
        assert_eq!(budget.transactions().len(), 1);
        assert_eq!(budget.starting_balance(), Money::from_minor(100_000));
    }

    #[test]
    fn test_invalid_month_rejected() {
        let err = validate_budget(budget(13, 2025), &WINDOW).unwrap_err();
        assert_eq!(fields(&err), vec!["period.month"]);
    }

    #[test]
    fn test_year_out_of_window_rejected() {
        let err = validate_budget(budget(1, 2019), &WINDOW).unwrap_err();
        assert_eq!(fields(&err), vec!["period.year"]);
    }

    #[test]
    fn test_collects_every_error() {
        let mut input = budget(0, 2025);
        input.lines.push(line(-1));
        let foreign = BudgetId::new();
        input.transactions.push(tx(input.id, 0));
        input.transactions.push(tx(foreign, -50));

        let err = validate_budget(input, &WINDOW).unwrap_err();
        assert_eq!(
            fields(&err),
            vec![
                "period.month",
                "lines[0].plannedAmount",
                "transactions[0].amount",
                "transactions[1].amount",
                "transactions[1].budgetId",
            ]
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut input = budget(1, 2025);
        let first = line(100);
        let mut second = line(200);
        second.id = first.id;
        input.lines = vec![first, second];

        let t = tx(input.id, 10);
        input.transactions = vec![t.clone(), t];

        let err = validate_budget(input, &WINDOW).unwrap_err();
        assert_eq!(fields(&err), vec!["lines[1].id", "transactions[1].id"]);
    }

    #[test]
    fn test_validate_budgets_prefixes_paths() {
        let err = validate_budgets([budget(1, 2025), budget(13, 2025)], &WINDOW).unwrap_err();
        assert_eq!(fields(&err), vec!["budgets[1].period.month"]);

        let ok = validate_budgets([budget(1, 2025), budget(2, 2025)], &WINDOW).unwrap();
        assert_eq!(ok.len(), 2);
    }
}
