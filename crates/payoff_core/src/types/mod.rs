//! Core calendar, unit, and error types.
//!
//! This module provides:
//! - `time`: `Date` wrapper and the ACT/365 expiry helpers used by the engine
//! - `units`: percentage to fraction conversion for market inputs
//! - `error`: Structured error types for pricing and date operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`days_to_expiry`], [`time_to_expiry`], [`DAYS_PER_YEAR`] from `time`
//! - [`percent_to_fraction`] from `units`
//! - [`PricingError`], [`DateError`] from `error`

pub mod error;
pub mod time;
pub mod units;

// Re-export commonly used types at module level
pub use error::{DateError, PricingError};
pub use time::{days_to_expiry, time_to_expiry, Date, DAYS_PER_YEAR};
pub use units::percent_to_fraction;
