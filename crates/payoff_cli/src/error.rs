//! CLI error types

use payoff_core::types::{DateError, PricingError};
use payoff_models::analytical::AnalyticalError;
use payoff_models::instruments::InstrumentError;
use payoff_models::strategies::StrategyError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Engine rejected the inputs
    #[error("{0}")]
    Pricing(#[from] PricingError),

    /// Configuration could not be loaded or is out of range
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O failure writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Argument value could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Missing or inconsistent argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON or CSV encoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<StrategyError> for CliError {
    fn from(err: StrategyError) -> Self {
        CliError::Pricing(err.into())
    }
}

impl From<AnalyticalError> for CliError {
    fn from(err: AnalyticalError) -> Self {
        CliError::Pricing(err.into())
    }
}

impl From<InstrumentError> for CliError {
    fn from(err: InstrumentError) -> Self {
        CliError::Pricing(err.into())
    }
}

impl From<DateError> for CliError {
    fn from(err: DateError) -> Self {
        CliError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
