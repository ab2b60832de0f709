//! Black-Scholes pricing model for European options with dividend yield.
//!
//! This module provides the Black-Scholes-Merton model for pricing European
//! call and put options with analytical Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Expiry Boundary
//!
//! For `T <= 0` every method returns the intrinsic-value limit: price is
//! `max(S-K, 0)` / `max(K-S, 0)`, delta is exactly `0` or `±1`, and the other
//! Greeks are exactly `0`. No division by `T` is attempted there.

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::greeks::Greeks;
use crate::instruments::OptionKind;

/// Black-Scholes-Merton model for European option pricing.
///
/// Holds the market side of the valuation (spot, rate, dividend yield,
/// volatility); strike and expiry are supplied per call so one model can
/// value every leg of a strategy.
///
/// Construction performs no validation: non-positive spot, strike, or
/// volatility with `T > 0` yield NaN/∞ results. Use
/// [`MarketParameters`](super::MarketParameters) for validated inputs.
///
/// # Examples
/// ```
/// use payoff_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2);
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Continuous dividend yield (q)
    dividend: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price
    /// * `rate` - Risk-free interest rate (annualised fraction, may be negative)
    /// * `dividend` - Continuous dividend yield (annualised fraction)
    /// * `volatility` - Volatility (annualised fraction)
    pub fn new(spot: T, rate: T, dividend: T, volatility: T) -> Self {
        Self {
            spot,
            rate,
            dividend,
            volatility,
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend(&self) -> T {
        self.dividend
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term.
    ///
    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    ///
    /// Only meaningful for `expiry > 0`.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap();
        let log_moneyness = (self.spot / strike).ln();
        let drift =
            (self.rate - self.dividend + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / (self.volatility * expiry.sqrt())
    }

    /// Computes the d2 term.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the European call price.
    ///
    /// # Examples
    /// ```
    /// use payoff_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2);
    /// assert!((bs.price_call(100.0, 1.0) - 10.4506).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        self.greeks(strike, expiry, OptionKind::Call).price
    }

    /// Computes the European put price.
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        self.greeks(strike, expiry, OptionKind::Put).price
    }

    /// Computes price and all Greeks for one leg.
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiry in years (T)
    /// * `kind` - Call or put
    ///
    /// # Examples
    /// ```
    /// use payoff_models::analytical::BlackScholes;
    /// use payoff_models::instruments::OptionKind;
    ///
    /// let bs = BlackScholes::new(110.0_f64, 0.05, 0.0, 0.2);
    /// let expired = bs.greeks(100.0, 0.0, OptionKind::Call);
    /// assert_eq!(expired.price, 10.0);
    /// assert_eq!(expired.delta, 1.0);
    /// assert_eq!(expired.gamma, 0.0);
    /// ```
    pub fn greeks(&self, strike: T, expiry: T, kind: OptionKind) -> Greeks<T> {
        if expiry <= T::zero() {
            return self.intrinsic(strike, kind);
        }

        let one = T::one();
        let two = T::from(2.0).unwrap();
        let hundred = T::from(100.0).unwrap();
        let days_per_year = T::from(365.0).unwrap();

        let sqrt_t = expiry.sqrt();
        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * sqrt_t;

        let dividend_discount = (-self.dividend * expiry).exp();
        let discount = (-self.rate * expiry).exp();
        let pdf_d1 = norm_pdf(d1);

        // Kind-dependent terms: N(±d1), N(±d2), and the sign applied to them
        let (sign, n_d1, n_d2) = match kind {
            OptionKind::Call => (one, norm_cdf(d1), norm_cdf(d2)),
            OptionKind::Put => (-one, norm_cdf(-d1), norm_cdf(-d2)),
        };

        let price = sign * (self.spot * dividend_discount * n_d1 - strike * discount * n_d2);
        let delta = sign * dividend_discount * n_d1;
        let gamma = dividend_discount * pdf_d1 / (self.spot * self.volatility * sqrt_t);
        let vega = self.spot * dividend_discount * pdf_d1 * sqrt_t / hundred;

        // Theta per calendar day. Only the N(±d) arguments follow the kind;
        // the r and q terms keep the call-side signs for puts as well.
        let decay = -(self.spot * pdf_d1 * self.volatility * dividend_discount) / (two * sqrt_t);
        let theta = (decay - self.rate * strike * discount * n_d2
            + self.dividend * self.spot * dividend_discount * n_d1)
            / days_per_year;

        let rho = sign * strike * expiry * discount * n_d2 / hundred;

        Greeks {
            price,
            delta,
            gamma,
            theta,
            vega,
            rho,
        }
    }

    /// Intrinsic-value Greeks at (or past) expiry.
    fn intrinsic(&self, strike: T, kind: OptionKind) -> Greeks<T> {
        let zero = T::zero();
        let one = T::one();

        let (price, delta) = match kind {
            OptionKind::Call => (
                (self.spot - strike).max(zero),
                if self.spot > strike { one } else { zero },
            ),
            OptionKind::Put => (
                (strike - self.spot).max(zero),
                if self.spot < strike { -one } else { zero },
            ),
        };

        Greeks {
            price,
            delta,
            ..Greeks::zero()
        }
    }
}

/// Prices a single vanilla leg and returns its Greeks.
///
/// Argument order follows the usual (S, K, T, r, σ, q) convention. No input
/// validation is performed: malformed numbers propagate as NaN/∞.
///
/// # Examples
/// ```
/// use payoff_models::analytical::price;
/// use payoff_models::instruments::OptionKind;
///
/// let g = price(100.0, 100.0, 30.0 / 365.0, 0.05, 0.20, 0.0, OptionKind::Call);
/// assert!((g.price - 2.49).abs() < 0.01);
/// assert!((g.delta - 0.54).abs() < 0.01);
/// ```
pub fn price(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    dividend: f64,
    kind: OptionKind,
) -> Greeks<f64> {
    BlackScholes::new(spot, rate, dividend, volatility).greeks(strike, expiry, kind)
}
