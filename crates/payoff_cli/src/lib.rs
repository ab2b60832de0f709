//! # payoff_cli: Command-line front end for the payoff engine
//!
//! Parses raw user inputs (strategy name, strikes, premiums, percentages and
//! an expiry date), converts them into validated engine inputs, runs the
//! strategy engine, and renders the result as a table, JSON or CSV.
//!
//! ## Modules
//!
//! - `config`: layered configuration (defaults, `payoff.toml`, `PAYOFF_*`
//!   environment, command-line flags)
//! - `input`: raw inputs to `StrategySpec` / `MarketParameters`
//! - `output`: table, JSON and CSV rendering
//! - `commands`: `analyze`, `curve`, `greeks`, `strategies`

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
