//! Unit conversions for market inputs.
//!
//! Volatility, risk-free rate, and dividend yield are quoted in percent by
//! users and consumed as annualised fractions by the pricing model.

/// Converts a percentage quote into a fraction (`20.0` → `0.2`).
///
/// # Examples
/// ```
/// use payoff_core::types::percent_to_fraction;
///
/// assert!((percent_to_fraction(5.0) - 0.05).abs() < 1e-15);
/// assert_eq!(percent_to_fraction(0.0), 0.0);
/// ```
#[inline]
pub fn percent_to_fraction(percent: f64) -> f64 {
    percent / 100.0
}
