//! Balance formulas over a consumption report.

use chrono::NaiveDate;
use tirelire_shared::types::Money;

use super::due::DuePolicy;
use super::types::{PeriodSummary, SummaryOptions};
use crate::budget::{Budget, BudgetError};
use crate::consumption::{ConsumptionReport, KindTotals, compute_all_consumptions};
use crate::period::Period;

/// Budget formulas. Every function is pure; the same arguments always give
/// the same figures.
pub struct BudgetFormulas;

impl BudgetFormulas {
    /// `starting + income - expense - saving`, exact in minor units.
    pub fn ending_balance(
        starting_balance: Money,
        totals: &KindTotals,
    ) -> Result<Money, BudgetError> {
        totals
            .net()
            .and_then(|net| starting_balance.checked_add(net))
            .ok_or(BudgetError::Overflow("ending balance"))
    }

    /// Amount still owed on expense and saving lines that `due` says are not due yet.
    ///
    /// Each line reserves `max(remaining, 0)`: an overspent line reserves nothing.
    /// Lines missing from `report` reserve their full planned amount.
    pub fn reserved(
        budget: &Budget,
        report: &ConsumptionReport,
        due: &dyn DuePolicy,
    ) -> Result<Money, BudgetError> {
        let owed = budget
            .lines()
            .iter()
            .filter(|line| line.kind().is_outflow() && !due.is_due(line))
            .map(|line| {
                report
                    .line(line.id())
                    .map_or(line.planned_amount(), |c| c.remaining)
                    .clamp_non_negative()
            });
        Money::checked_sum(owed).ok_or(BudgetError::Overflow("reserved amount"))
    }

    /// `ending_balance - reserved`.
    pub fn available_to_spend(
        budget: &Budget,
        starting_balance: Money,
        report: &ConsumptionReport,
        due: &dyn DuePolicy,
    ) -> Result<Money, BudgetError> {
        let ending = Self::ending_balance(starting_balance, &report.totals)?;
        let reserved = Self::reserved(budget, report, due)?;
        ending
            .checked_sub(reserved)
            .ok_or(BudgetError::Overflow("available to spend"))
    }

    /// `available` spread over the days left in `period`, rounded half-to-even.
    ///
    /// A future period uses its full length. `None` once the period is over.
    #[must_use]
    pub fn daily_allowance(period: Period, available: Money, today: NaiveDate) -> Option<Money> {
        match period.remaining_days(today) {
            0 => None,
            days => available.div_round_half_even(days),
        }
    }

    /// Sum of planned amounts per line kind.
    pub fn planned_totals(budget: &Budget) -> Result<KindTotals, BudgetError> {
        budget
            .lines()
            .iter()
            .try_fold(KindTotals::default(), |acc, line| {
                acc.checked_add(line.kind(), line.planned_amount())
            })
            .ok_or(BudgetError::Overflow("planned totals"))
    }

    /// `starting + planned income - planned expense - planned saving`.
    pub fn projected_ending_balance(
        starting_balance: Money,
        planned: &KindTotals,
    ) -> Result<Money, BudgetError> {
        planned
            .net()
            .and_then(|net| starting_balance.checked_add(net))
            .ok_or(BudgetError::Overflow("projected ending balance"))
    }

    /// Summarizes `budget` from an explicit starting balance and its consumption report.
    ///
    /// The budget's stored starting balance is ignored; rollover decides what
    /// the period really starts from.
    pub fn compute_period_summary(
        budget: &Budget,
        starting_balance: Money,
        report: &ConsumptionReport,
        options: SummaryOptions<'_>,
    ) -> Result<PeriodSummary, BudgetError> {
        let ending_balance = Self::ending_balance(starting_balance, &report.totals)?;
        let reserved = Self::reserved(budget, report, options.due)?;
        let available_to_spend =
            Self::available_to_spend(budget, starting_balance, report, options.due)?;
        let planned = Self::planned_totals(budget)?;
        let projected_ending_balance = Self::projected_ending_balance(starting_balance, &planned)?;
        let period = budget.period();

        Ok(PeriodSummary {
            budget_id: budget.id(),
            period,
            starting_balance,
            ending_balance,
            totals: report.totals,
            planned,
            reserved,
            available_to_spend,
            projected_ending_balance,
            remaining_days: period.remaining_days(options.today),
            daily_allowance: Self::daily_allowance(period, available_to_spend, options.today),
        })
    }

    /// Computes the consumption report, then the summary.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(budget_id = %budget.id(), period = %budget.period())
    )]
    pub fn summarize(
        budget: &Budget,
        starting_balance: Money,
        options: SummaryOptions<'_>,
    ) -> Result<(ConsumptionReport, PeriodSummary), BudgetError> {
        let report = compute_all_consumptions(budget)?;
        let summary = Self::compute_period_summary(budget, starting_balance, &report, options)?;
        Ok((report, summary))
    }
}
