//! Analyze command implementation
//!
//! Prints breakeven, max profit/loss and Greeks for one strategy.

use std::io::Write;

use payoff_core::types::Date;
use payoff_models::strategies::compute_strategy_with;
use tracing::info;

use super::{prepare, StrategyRequest};
use crate::config::CliConfig;
use crate::output::{write_analysis, AnalysisReport};
use crate::Result;

/// Run the analyze command
pub fn run(request: &StrategyRequest, config: &CliConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&mut out, request, config, Date::today())
}

/// Analyze `request` as of `today` and write the report to `out`
pub fn execute<W: Write>(
    out: &mut W,
    request: &StrategyRequest,
    config: &CliConfig,
    today: Date,
) -> Result<()> {
    let prepared = prepare(request, config, today)?;
    let engine = config.engine_config()?;
    let result = compute_strategy_with(&prepared.spec, &prepared.market, &engine);
    let strategy = prepared.spec.strategy();

    info!(
        strategy = %prepared.spec.kind(),
        quantity = prepared.spec.quantity(),
        days = prepared.expiry.days,
        "Analysis complete"
    );

    let report = AnalysisReport {
        strategy: prepared.spec.kind(),
        quantity: prepared.spec.quantity(),
        expiry: prepared.expiry,
        summary: strategy.summary(),
        wing_width: strategy.wing_width(),
        analytics: result.analytics,
    };
    write_analysis(out, &report, config.format)
}
