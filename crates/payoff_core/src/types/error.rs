//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors surfaced by the pricing and payoff engine
//! - `DateError`: Errors from date construction and parsing

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Every layer-specific error converts into this type so that callers
/// outside the engine can handle a single error category.
///
/// # Variants
/// - `InvalidInput`: Invalid market data, leg data, or strike ordering
/// - `InvalidConfig`: Engine configuration out of range
/// - `UnsupportedStrategy`: Strategy not part of the catalogue
///
/// # Examples
/// ```
/// use payoff_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Invalid engine configuration
    InvalidConfig(String),

    /// Strategy not supported
    UnsupportedStrategy(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            PricingError::UnsupportedStrategy(msg) => {
                write!(f, "Unsupported strategy: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use payoff_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

impl From<DateError> for PricingError {
    fn from(err: DateError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
