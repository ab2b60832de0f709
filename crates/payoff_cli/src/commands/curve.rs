//! Curve command implementation
//!
//! Emits the sampled payoff diagram at expiry.

use std::io::Write;

use payoff_core::types::Date;
use payoff_models::strategies::compute_strategy_with;
use tracing::info;

use super::{prepare, StrategyRequest};
use crate::config::CliConfig;
use crate::output::write_curve;
use crate::Result;

/// Run the curve command
pub fn run(request: &StrategyRequest, config: &CliConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&mut out, request, config, Date::today())
}

/// Sample the payoff for `request` and write it to `out`
pub fn execute<W: Write>(
    out: &mut W,
    request: &StrategyRequest,
    config: &CliConfig,
    today: Date,
) -> Result<()> {
    let prepared = prepare(request, config, today)?;
    let engine = config.engine_config()?;
    let result = compute_strategy_with(&prepared.spec, &prepared.market, &engine);

    info!(
        strategy = %prepared.spec.kind(),
        points = result.curve.len(),
        min = ?result.curve.min_profit_loss(),
        max = ?result.curve.max_profit_loss(),
        "Payoff curve sampled"
    );

    write_curve(out, &result.curve, config.format)
}
