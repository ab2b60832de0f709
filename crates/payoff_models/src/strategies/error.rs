//! Strategy error types.
//!
//! This module provides structured error handling for strategy
//! construction and engine configuration.

use payoff_core::types::PricingError;
use thiserror::Error;

use super::kind::StrategyKind;

/// Strategy-related errors.
///
/// # Variants
/// - `StrikeOrdering`: Strikes violate the ordering the strategy requires
/// - `InvalidQuantity`: Contract quantity is zero
/// - `InvalidStrike`: Strike is non-positive or non-finite
/// - `InvalidPremium`: Premium is negative or non-finite
/// - `UnknownStrategy`: Name does not match any catalogue entry
/// - `InvalidConfig`: Engine configuration out of range
///
/// # Examples
/// ```
/// use payoff_models::strategies::{StrategyError, StrategyKind};
///
/// let err = StrategyError::StrikeOrdering {
///     strategy: StrategyKind::IronCondor,
///     requirement: "K1 < K2 < K3 < K4",
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Iron Condor strikes must satisfy K1 < K2 < K3 < K4"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrategyError {
    /// Strike ordering precondition violated.
    #[error("{strategy} strikes must satisfy {requirement}")]
    StrikeOrdering {
        /// Strategy whose ordering failed
        strategy: StrategyKind,
        /// Required ordering, e.g. "K1 < K2 < K3"
        requirement: &'static str,
    },

    /// Quantity must be at least one contract.
    #[error("Invalid quantity: {quantity} (must be at least 1)")]
    InvalidQuantity {
        /// The invalid quantity
        quantity: u32,
    },

    /// Strike is non-positive or non-finite.
    #[error("Invalid strike for {leg}: K = {strike}")]
    InvalidStrike {
        /// Leg label, e.g. "K2"
        leg: &'static str,
        /// The invalid strike value
        strike: f64,
    },

    /// Premium is negative or non-finite.
    #[error("Invalid premium for {leg}: P = {premium}")]
    InvalidPremium {
        /// Leg label, e.g. "P2"
        leg: &'static str,
        /// The invalid premium value
        premium: f64,
    },

    /// Strategy name not in the catalogue.
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Engine configuration error.
    #[error("Invalid config parameter {name}: {reason}")]
    InvalidConfig {
        /// Parameter name
        name: &'static str,
        /// Reason for rejection
        reason: String,
    },
}

impl From<StrategyError> for PricingError {
    fn from(err: StrategyError) -> Self {
        match err {
            StrategyError::UnknownStrategy(name) => PricingError::UnsupportedStrategy(name),
            err @ StrategyError::InvalidConfig { .. } => PricingError::InvalidConfig(err.to_string()),
            other => PricingError::InvalidInput(other.to_string()),
        }
    }
}
