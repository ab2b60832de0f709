//! Error types for analytical pricing inputs.
//!
//! This module provides:
//! - `AnalyticalError`: Rejected market parameters

use payoff_core::types::PricingError;
use thiserror::Error;

/// Market parameter validation errors.
///
/// Raised by [`MarketParameters::new`](super::MarketParameters::new); the raw
/// Black-Scholes model itself never fails.
///
/// # Examples
/// ```
/// use payoff_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Non-positive spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Non-positive volatility with time remaining.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Negative time to expiry.
    #[error("Invalid time to expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Negative dividend yield.
    #[error("Invalid dividend yield: q = {dividend}")]
    InvalidDividend {
        /// The invalid dividend yield
        dividend: f64,
    },

    /// NaN or infinite input.
    #[error("Non-finite {name}: {value}")]
    NonFinite {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
