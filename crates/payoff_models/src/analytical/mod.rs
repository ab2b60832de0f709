//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model with continuous dividend yield
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Market parameter bundle with input hardening
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Works with `f32` and `f64`
//! - **Explicit expiry boundary**: `T <= 0` returns intrinsic value, never divides by `T`
//! - **No silent validation**: the raw model propagates NaN/∞ for malformed
//!   inputs; validation lives in [`MarketParameters::new`]

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod greeks;
pub mod market;

// Re-export main types at module level
pub use black_scholes::{price, BlackScholes};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use greeks::Greeks;
pub use market::MarketParameters;
