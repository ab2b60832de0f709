//! Option kind, side, and leg definitions.

use std::fmt;
use std::str::FromStr;

use super::InstrumentError;
use crate::analytical::{Greeks, MarketParameters};

/// Type of vanilla option.
///
/// # Examples
/// ```
/// use payoff_models::instruments::OptionKind;
///
/// assert_eq!(OptionKind::Call.intrinsic(110.0, 100.0), 10.0);
/// assert_eq!(OptionKind::Put.intrinsic(110.0, 100.0), 0.0);
/// assert_eq!("put".parse::<OptionKind>().unwrap(), OptionKind::Put);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Right to buy: max(S - K, 0)
    Call,
    /// Right to sell: max(K - S, 0)
    Put,
}

impl OptionKind {
    /// Intrinsic value at terminal price `spot`.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionKind::Put)
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionKind {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            _ => Err(InstrumentError::UnknownOptionKind(s.trim().to_string())),
        }
    }
}

/// Direction of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Bought: pays the premium, receives the payoff
    Long,
    /// Sold: receives the premium, owes the payoff
    Short,
}

impl Side {
    /// +1 for Long, -1 for Short.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Side::Long => 1.0,
            Side::Short => -1.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Long => write!(f, "long"),
            Side::Short => write!(f, "short"),
        }
    }
}

/// Strike and per-share premium quoted for one leg.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegQuote {
    /// Strike price (K)
    pub strike: f64,
    /// Premium per share (P)
    pub premium: f64,
}

impl LegQuote {
    /// Creates a quote.
    #[inline]
    pub fn new(strike: f64, premium: f64) -> Self {
        Self { strike, premium }
    }
}

/// One vanilla option within a strategy.
///
/// # Examples
/// ```
/// use payoff_models::instruments::{OptionKind, OptionLeg, Side};
///
/// let short_call = OptionLeg::new(Side::Short, OptionKind::Call, 100.0, 3.0, 1);
/// // Premium kept below the strike, loses above strike + premium
/// assert_eq!(short_call.payoff_at(95.0), 3.0);
/// assert_eq!(short_call.payoff_at(110.0), -7.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionLeg {
    /// Long or short
    pub side: Side,
    /// Call or put
    pub kind: OptionKind,
    /// Strike price
    pub strike: f64,
    /// Premium per share
    pub premium: f64,
    /// Number of contracts
    pub quantity: u32,
}

impl OptionLeg {
    /// Creates a leg.
    pub fn new(side: Side, kind: OptionKind, strike: f64, premium: f64, quantity: u32) -> Self {
        Self {
            side,
            kind,
            strike,
            premium,
            quantity,
        }
    }

    /// Signed quantity: positive for long, negative for short.
    #[inline]
    pub fn signed_quantity(&self) -> f64 {
        self.side.sign() * f64::from(self.quantity)
    }

    /// Profit/loss per share at expiry, net of premium, times leg quantity.
    #[inline]
    pub fn payoff_at(&self, price: f64) -> f64 {
        self.signed_quantity() * (self.kind.intrinsic(price, self.strike) - self.premium)
    }

    /// Black-Scholes Greeks of this leg, signed by side and scaled by quantity.
    pub fn greeks(&self, market: &MarketParameters) -> Greeks<f64> {
        market
            .model()
            .greeks(self.strike, market.time_to_expiry(), self.kind)
            .scale(self.signed_quantity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_intrinsic() {
        assert_eq!(OptionKind::Call.intrinsic(90.0, 100.0), 0.0);
        assert_eq!(OptionKind::Put.intrinsic(90.0, 100.0), 10.0);
    }

    #[test]
    fn test_option_kind_parse() {
        assert_eq!("CALL".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!(" p ".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert_eq!(
            "Straddle".parse::<OptionKind>(),
            Err(InstrumentError::UnknownOptionKind("Straddle".into()))
        );
    }

    #[test]
    fn test_option_kind_predicates() {
        assert!(OptionKind::Call.is_call());
        assert!(OptionKind::Put.is_put());
        assert!(!OptionKind::Put.is_call());
    }

    #[test]
    fn test_side_sign() {
        assert_eq!(Side::Long.sign(), 1.0);
        assert_eq!(Side::Short.sign(), -1.0);
    }

    #[test]
    fn test_long_put_leg_payoff() {
        let leg = OptionLeg::new(Side::Long, OptionKind::Put, 100.0, 4.0, 2);
        assert_eq!(leg.payoff_at(90.0), 12.0);
        assert_eq!(leg.payoff_at(120.0), -8.0);
    }

    #[test]
    fn test_leg_greeks_signed_and_scaled() {
        let market = MarketParameters::new(100.0, 0.2, 0.05, 0.0, 0.5).unwrap();
        let long = OptionLeg::new(Side::Long, OptionKind::Call, 100.0, 0.0, 1).greeks(&market);
        let short = OptionLeg::new(Side::Short, OptionKind::Call, 100.0, 0.0, 3).greeks(&market);
        assert_relative_eq!(short.delta, -3.0 * long.delta, epsilon = 1e-12);
        assert_relative_eq!(short.vega, -3.0 * long.vega, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(OptionKind::Call.to_string(), "call");
        assert_eq!(Side::Short.to_string(), "short");
    }
}
