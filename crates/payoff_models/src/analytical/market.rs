//! Validated market parameters for one valuation.

use super::black_scholes::BlackScholes;
use super::error::AnalyticalError;

/// Market inputs shared by every leg of a strategy.
///
/// All rates are annualised fractions (`0.20` for 20%) and time is in years.
/// Validation rules:
/// - every value must be finite
/// - `spot > 0`
/// - `time_to_expiry >= 0`
/// - `dividend_yield >= 0`
/// - `volatility > 0` when `time_to_expiry > 0`; at expiry the intrinsic
///   branch ignores volatility, so `0` is accepted there
///
/// # Examples
/// ```
/// use payoff_models::analytical::MarketParameters;
///
/// let market = MarketParameters::new(100.0, 0.20, 0.05, 0.0, 0.25).unwrap();
/// assert_eq!(market.spot(), 100.0);
///
/// // Expired: volatility no longer matters
/// assert!(MarketParameters::new(100.0, 0.0, 0.05, 0.0, 0.0).is_ok());
/// assert!(MarketParameters::new(100.0, 0.0, 0.05, 0.0, 0.1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarketParameters {
    spot: f64,
    volatility: f64,
    risk_free_rate: f64,
    dividend_yield: f64,
    time_to_expiry: f64,
}

impl MarketParameters {
    /// Creates validated market parameters.
    ///
    /// # Errors
    /// Returns the first violated rule as an [`AnalyticalError`].
    pub fn new(
        spot: f64,
        volatility: f64,
        risk_free_rate: f64,
        dividend_yield: f64,
        time_to_expiry: f64,
    ) -> Result<Self, AnalyticalError> {
        for (name, value) in [
            ("spot", spot),
            ("volatility", volatility),
            ("risk-free rate", risk_free_rate),
            ("dividend yield", dividend_yield),
            ("time to expiry", time_to_expiry),
        ] {
            if !value.is_finite() {
                return Err(AnalyticalError::NonFinite { name, value });
            }
        }

        if spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if time_to_expiry < 0.0 {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: time_to_expiry,
            });
        }
        if dividend_yield < 0.0 {
            return Err(AnalyticalError::InvalidDividend {
                dividend: dividend_yield,
            });
        }
        if volatility < 0.0 || (time_to_expiry > 0.0 && volatility == 0.0) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            volatility,
            risk_free_rate,
            dividend_yield,
            time_to_expiry,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the annualised volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the annualised risk-free rate.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Returns the annualised dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn time_to_expiry(&self) -> f64 {
        self.time_to_expiry
    }

    /// Returns true when the valuation is at or past expiry.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.time_to_expiry <= 0.0
    }

    /// Builds the Black-Scholes model for these parameters.
    pub fn model(&self) -> BlackScholes<f64> {
        BlackScholes::new(
            self.spot,
            self.risk_free_rate,
            self.dividend_yield,
            self.volatility,
        )
    }
}
