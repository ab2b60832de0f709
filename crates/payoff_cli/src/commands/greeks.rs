//! Greeks command implementation
//!
//! Prices a single vanilla leg with Black-Scholes.

use std::io::Write;

use payoff_core::types::Date;
use payoff_models::instruments::OptionKind;
use tracing::info;

use crate::config::CliConfig;
use crate::input::{build_market, resolve_expiry, MarketInputs};
use crate::output::write_greeks;
use crate::{CliError, Result};

/// Raw inputs for the greeks command
#[derive(Debug, Clone, Default)]
pub struct GreeksRequest {
    /// Strike price
    pub strike: f64,
    /// "call" or "put"
    pub kind: String,
    /// Spot and percent market inputs
    pub market: MarketInputs,
    /// Expiry date (YYYY-MM-DD)
    pub expiry: Option<String>,
    /// Calendar days to expiry
    pub days: Option<u32>,
}

/// Run the greeks command
pub fn run(request: &GreeksRequest, config: &CliConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&mut out, request, config, Date::today())
}

/// Price one leg as of `today` and write its Greeks to `out`
pub fn execute<W: Write>(
    out: &mut W,
    request: &GreeksRequest,
    config: &CliConfig,
    today: Date,
) -> Result<()> {
    let kind: OptionKind = request.kind.parse()?;
    if !request.strike.is_finite() || request.strike <= 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "Strike must be positive, got {}",
            request.strike
        )));
    }

    let expiry = resolve_expiry(today, request.expiry.as_deref(), request.days)?;
    let market = build_market(&request.market, &config.market, &expiry)?;
    let greeks = market
        .model()
        .greeks(request.strike, market.time_to_expiry(), kind);

    info!(
        kind = %kind,
        strike = request.strike,
        days = expiry.days,
        price = greeks.price,
        "Leg priced"
    );

    write_greeks(out, &greeks, config.format)
}
