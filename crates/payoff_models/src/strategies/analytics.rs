//! Closed-form breakeven, max profit/loss and Greeks per strategy.

use std::fmt;

use tracing::debug;

use super::curve::CONTRACT_MULTIPLIER;
use super::strategy::{Strategy, StrategySpec};
use crate::analytical::{Greeks, MarketParameters};
use crate::instruments::{OptionKind, OptionLeg, Side};

/// A profit or loss limit that may be unbounded.
///
/// Serialises as a number, or as the string `"unbounded"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// A finite amount in currency units
    Finite(f64),
    /// No limit
    Unbounded,
}

impl Bound {
    /// Finite value, `None` when unbounded.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match self {
            Bound::Finite(v) => Some(*v),
            Bound::Unbounded => None,
        }
    }

    /// Returns true when unbounded.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Bound::Unbounded)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Finite(v) => write!(f, "${:.2}", v),
            Bound::Unbounded => write!(f, "Unlimited"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Bound {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Bound::Finite(v) => serializer.serialize_f64(*v),
            Bound::Unbounded => serializer.serialize_str("unbounded"),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Bound {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BoundVisitor;

        impl<'de> serde::de::Visitor<'de> for BoundVisitor {
            type Value = Bound;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or the string \"unbounded\"")
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Bound, E> {
                Ok(Bound::Finite(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Bound, E> {
                Ok(Bound::Finite(v as f64))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Bound, E> {
                Ok(Bound::Finite(v as f64))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Bound, E> {
                if v.eq_ignore_ascii_case("unbounded") {
                    Ok(Bound::Unbounded)
                } else {
                    Err(E::invalid_value(serde::de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(BoundVisitor)
    }
}

/// Terminal price level(s) at which profit/loss is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Breakeven {
    /// One level
    Single(f64),
    /// Two levels, lower first
    Range {
        /// Lower breakeven
        lower: f64,
        /// Upper breakeven
        upper: f64,
    },
}

impl Breakeven {
    /// Levels in ascending order as listed.
    pub fn levels(&self) -> Vec<f64> {
        match *self {
            Breakeven::Single(level) => vec![level],
            Breakeven::Range { lower, upper } => vec![lower, upper],
        }
    }
}

impl fmt::Display for Breakeven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Breakeven::Single(level) => write!(f, "${:.2}", level),
            Breakeven::Range { lower, upper } => write!(f, "${:.2} and ${:.2}", lower, upper),
        }
    }
}

/// How strategy Greeks are assembled from the legs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GreeksMode {
    /// K1 leg only, long and unscaled, kind inferred from the strategy
    /// name. The strangle sums its call and put legs.
    #[default]
    PrimaryLeg,
    /// Signed sum over every leg of one contract.
    Aggregate,
}

/// Summary analytics for one strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyAnalytics {
    /// Breakeven level(s)
    pub breakeven: Breakeven,
    /// Maximum profit over all terminal prices
    pub max_profit: Bound,
    /// Maximum loss over all terminal prices, as a positive amount
    pub max_loss: Bound,
    /// Strategy Greeks
    pub greeks: Greeks<f64>,
}

/// Breakeven and max profit/loss with primary-leg Greeks.
///
/// # Examples
/// ```
/// use payoff_models::analytical::MarketParameters;
/// use payoff_models::instruments::LegQuote;
/// use payoff_models::strategies::{analyze, Bound, Breakeven, Strategy, StrategySpec};
///
/// let spec = StrategySpec::new(
///     Strategy::LongStraddle { strike: 100.0, call_premium: 5.0, put_premium: 4.0 },
///     1,
/// ).unwrap();
/// let market = MarketParameters::new(100.0, 0.2, 0.05, 0.0, 0.25).unwrap();
///
/// let analytics = analyze(&spec, &market);
/// assert_eq!(analytics.breakeven, Breakeven::Range { lower: 91.0, upper: 109.0 });
/// assert_eq!(analytics.max_loss, Bound::Finite(900.0));
/// assert_eq!(analytics.max_profit, Bound::Unbounded);
/// ```
pub fn analyze(spec: &StrategySpec, market: &MarketParameters) -> StrategyAnalytics {
    analyze_with_mode(spec, market, GreeksMode::PrimaryLeg)
}

/// [`analyze`] with a selectable Greeks mode.
pub fn analyze_with_mode(
    spec: &StrategySpec,
    market: &MarketParameters,
    mode: GreeksMode,
) -> StrategyAnalytics {
    let (breakeven, max_profit, max_loss) = limits(spec);
    let greeks = strategy_greeks(spec, market, mode);

    debug!(
        strategy = spec.kind().name(),
        quantity = spec.quantity(),
        breakeven = %breakeven,
        max_profit = %max_profit,
        max_loss = %max_loss,
        ?mode,
        "strategy analysed"
    );

    StrategyAnalytics {
        breakeven,
        max_profit,
        max_loss,
        greeks,
    }
}

fn limits(spec: &StrategySpec) -> (Breakeven, Bound, Bound) {
    let scale = f64::from(spec.quantity()) * CONTRACT_MULTIPLIER;
    let finite = |per_share: f64| Bound::Finite(per_share * scale);

    match *spec.strategy() {
        Strategy::LongCall(q) => (
            Breakeven::Single(q.strike + q.premium),
            Bound::Unbounded,
            finite(q.premium),
        ),
        Strategy::LongPut(q) => (
            Breakeven::Single(q.strike - q.premium),
            finite(q.strike - q.premium),
            finite(q.premium),
        ),
        Strategy::ShortCall(q) => (
            Breakeven::Single(q.strike + q.premium),
            finite(q.premium),
            Bound::Unbounded,
        ),
        Strategy::ShortPut(q) => (
            Breakeven::Single(q.strike - q.premium),
            finite(q.premium),
            finite(q.strike),
        ),
        Strategy::BullCallSpread { long, short } => {
            let debit = long.premium - short.premium;
            (
                Breakeven::Single(long.strike + debit),
                finite(short.strike - long.strike - debit),
                finite(debit),
            )
        }
        Strategy::BearPutSpread { long, short } => {
            let debit = long.premium - short.premium;
            (
                Breakeven::Single(long.strike - debit),
                finite(long.strike - short.strike - debit),
                finite(debit),
            )
        }
        Strategy::IronCondor {
            long_put,
            short_put,
            short_call,
            long_call,
        } => {
            let credit =
                (short_put.premium + short_call.premium) - (long_put.premium + long_call.premium);
            let width =
                (short_put.strike - long_put.strike).max(long_call.strike - short_call.strike);
            (
                Breakeven::Range {
                    lower: short_put.strike - credit,
                    upper: short_call.strike + credit,
                },
                finite(credit),
                finite(width - credit),
            )
        }
        Strategy::LongStraddle {
            strike,
            call_premium,
            put_premium,
        } => {
            let cost = call_premium + put_premium;
            (
                Breakeven::Range {
                    lower: strike - cost,
                    upper: strike + cost,
                },
                Bound::Unbounded,
                finite(cost),
            )
        }
        Strategy::LongStrangle { put, call } => {
            let cost = put.premium + call.premium;
            (
                Breakeven::Range {
                    lower: put.strike - cost,
                    upper: call.strike + cost,
                },
                Bound::Unbounded,
                finite(cost),
            )
        }
        Strategy::LongButterfly {
            lower,
            middle,
            upper,
        } => {
            let net_premium = lower.premium - 2.0 * middle.premium + upper.premium;
            let width = middle.strike - lower.strike;
            (
                Breakeven::Range {
                    lower: lower.strike + net_premium,
                    upper: upper.strike - net_premium,
                },
                finite(width - net_premium),
                finite(net_premium),
            )
        }
    }
}

/// Strategy Greeks under `mode`.
///
/// `PrimaryLeg` prices the K1 leg as a single long contract. The strangle
/// instead sums its independently priced call and put legs. `Aggregate`
/// sums signed leg Greeks over one contract of every leg.
pub fn strategy_greeks(
    spec: &StrategySpec,
    market: &MarketParameters,
    mode: GreeksMode,
) -> Greeks<f64> {
    match mode {
        GreeksMode::PrimaryLeg => primary_leg_greeks(spec.strategy(), market),
        GreeksMode::Aggregate => spec
            .strategy()
            .legs(1)
            .iter()
            .map(|leg| leg.greeks(market))
            .sum(),
    }
}

fn primary_leg_greeks(strategy: &Strategy, market: &MarketParameters) -> Greeks<f64> {
    match *strategy {
        Strategy::LongStrangle { put, call } => {
            OptionLeg::new(Side::Long, OptionKind::Call, call.strike, call.premium, 1)
                .greeks(market)
                + OptionLeg::new(Side::Long, OptionKind::Put, put.strike, put.premium, 1)
                    .greeks(market)
        }
        _ => {
            let quote = strategy.primary();
            let kind = strategy.kind().primary_option_kind();
            OptionLeg::new(Side::Long, kind, quote.strike, quote.premium, 1).greeks(market)
        }
    }
}
