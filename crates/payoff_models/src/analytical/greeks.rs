//! Price and sensitivity bundle for one valuation point.

use num_traits::Float;
use std::ops::{Add, AddAssign};

/// Option price with its first- and second-order sensitivities.
///
/// Units follow the desk convention:
/// - `theta` is per calendar day (365-day year)
/// - `vega` is per 1 percentage point of volatility
/// - `rho` is per 1 percentage point of the risk-free rate
///
/// Values are defined at a single (S, K, T, r, σ, q) point and carry no
/// identity; combine legs with `+` and [`Greeks::scale`].
///
/// # Examples
/// ```
/// use payoff_models::analytical::Greeks;
///
/// let call = Greeks { price: 5.0, delta: 0.5, gamma: 0.02, theta: -0.03, vega: 0.1, rho: 0.04 };
/// let short = call.scale(-1.0);
/// assert_eq!((call + short).delta, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// Option value
    pub price: T,
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// Time decay per calendar day
    pub theta: T,
    /// Sensitivity to a 1% volatility move
    pub vega: T,
    /// Sensitivity to a 1% rate move
    pub rho: T,
}

impl<T: Float> Greeks<T> {
    /// All-zero Greeks, the identity for aggregation.
    #[inline]
    pub fn zero() -> Self {
        let zero = T::zero();
        Self {
            price: zero,
            delta: zero,
            gamma: zero,
            theta: zero,
            vega: zero,
            rho: zero,
        }
    }

    /// Multiplies every field by `factor` (signed quantity for a leg).
    #[inline]
    pub fn scale(&self, factor: T) -> Self {
        Self {
            price: self.price * factor,
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            theta: self.theta * factor,
            vega: self.vega * factor,
            rho: self.rho * factor,
        }
    }

    /// Returns true when every field is finite.
    pub fn is_finite(&self) -> bool {
        [
            self.price, self.delta, self.gamma, self.theta, self.vega, self.rho,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl<T: Float> Default for Greeks<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float> Add for Greeks<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            price: self.price + rhs.price,
            delta: self.delta + rhs.delta,
            gamma: self.gamma + rhs.gamma,
            theta: self.theta + rhs.theta,
            vega: self.vega + rhs.vega,
            rho: self.rho + rhs.rho,
        }
    }
}

impl<T: Float> AddAssign for Greeks<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Float> std::iter::Sum for Greeks<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, g| acc + g)
    }
}
