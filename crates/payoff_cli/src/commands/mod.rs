//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write to any
//! `io::Write` so they can be exercised without a terminal.

pub mod analyze;
pub mod curve;
pub mod greeks;
pub mod strategies;

use payoff_core::types::Date;
use payoff_models::analytical::MarketParameters;
use payoff_models::strategies::StrategySpec;

use crate::config::CliConfig;
use crate::input::{build_market, build_spec, resolve_expiry, Expiry, LegInputs, MarketInputs};
use crate::Result;

/// Raw inputs shared by `analyze` and `curve`
#[derive(Debug, Clone, Default)]
pub struct StrategyRequest {
    /// Strategy name or alias
    pub name: String,
    /// Strike and premium fields
    pub legs: LegInputs,
    /// Entered quantity, clamped to at least 1
    pub quantity: i64,
    /// Spot and percent market inputs
    pub market: MarketInputs,
    /// Expiry date (YYYY-MM-DD)
    pub expiry: Option<String>,
    /// Calendar days to expiry
    pub days: Option<u32>,
}

/// Validated engine inputs for one request
pub(crate) struct Prepared {
    pub spec: StrategySpec,
    pub expiry: Expiry,
    pub market: MarketParameters,
}

pub(crate) fn prepare(request: &StrategyRequest, config: &CliConfig, today: Date) -> Result<Prepared> {
    let spec = build_spec(&request.name, &request.legs, request.quantity)?;
    let expiry = resolve_expiry(today, request.expiry.as_deref(), request.days)?;
    let market = build_market(&request.market, &config.market, &expiry)?;
    Ok(Prepared {
        spec,
        expiry,
        market,
    })
}
