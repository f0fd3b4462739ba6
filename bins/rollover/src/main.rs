//! Tirelire rollover tool
//!
//! Reads a JSON array of budgets, validates them, resolves each user's
//! rollover chain and prints the resolved steps as JSON on stdout.
//!
//! Usage: tirelire-rollover <budgets.json>

use std::collections::BTreeMap;

use anyhow::Context;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tirelire_core::budget::{Budget, BudgetError, BudgetInput, validate_budgets};
use tirelire_core::formulas::SummaryOptions;
use tirelire_core::period::YearWindow;
use tirelire_core::rollover::{RolloverStep, resolve_independent_chains};
use tirelire_shared::types::UserId;
use tirelire_shared::{Clock, EngineConfig, SystemClock};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the JSON result
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tirelire=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EngineConfig::load().context("Failed to load configuration")?;
    let clock = SystemClock;

    let path = std::env::args()
        .nth(1)
        .context("Usage: tirelire-rollover <budgets.json>")?;
    let raw = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
    let inputs: Vec<BudgetInput> =
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse {path}"))?;
    info!(budgets = inputs.len(), path = %path, "Loaded budgets");

    let window = YearWindow::from_clock(&clock, &config.period);
    let budgets = match validate_budgets(inputs, &window) {
        Ok(budgets) => budgets,
        Err(BudgetError::Validation(errors)) => {
            for error in &errors {
                warn!(field = %error.field, "{}", error.message);
            }
            anyhow::bail!("{} validation error(s)", errors.len());
        }
        Err(other) => return Err(other.into()),
    };

    let chains = group_by_owner(budgets);
    debug!(chains = chains.len(), "Resolving rollover chains");

    let options = SummaryOptions::new(&config.due_policy, clock.today());
    let mut resolved = Vec::new();
    for result in resolve_independent_chains(&chains, options) {
        let steps = result?;
        for step in &steps {
            report_step(step, &config);
        }
        resolved.extend(steps);
    }

    println!("{}", serde_json::to_string_pretty(&resolved)?);
    info!(periods = resolved.len(), "Rollover resolved");

    Ok(())
}

/// One chain per owner, each sorted by period.
fn group_by_owner(budgets: Vec<Budget>) -> Vec<Vec<Budget>> {
    let mut chains: BTreeMap<Option<UserId>, Vec<Budget>> = BTreeMap::new();
    for budget in budgets {
        chains.entry(budget.user_id()).or_default().push(budget);
    }
    chains
        .into_values()
        .map(|mut chain| {
            chain.sort_by_key(Budget::period);
            chain
        })
        .collect()
}

fn report_step(step: &RolloverStep, config: &EngineConfig) {
    let period = step.period.format(config.locale);

    if step.is_stale {
        warn!(
            budget_id = %step.budget_id,
            stored = %step.stored_starting_balance.format_with(config.locale),
            carried = %step.starting_balance().format_with(config.locale),
            "Stale starting balance for {period}"
        );
    }

    for unmatched in &step.report.unmatched {
        info!(
            transaction_id = %unmatched.transaction.id(),
            reason = ?unmatched.reason,
            "Unmatched transaction in {period}"
        );
    }

    for line in &step.report.per_line {
        for transaction_id in &line.kind_mismatches {
            info!(
                %transaction_id,
                line_id = %line.line_id,
                line_kind = ?line.kind,
                "Transaction of another kind linked to a line in {period}"
            );
        }
    }

    debug!(
        ending = %step.ending_balance().format_with(config.locale),
        available = %step.summary.available_to_spend.format_with(config.locale),
        "Resolved {period}"
    );
}
