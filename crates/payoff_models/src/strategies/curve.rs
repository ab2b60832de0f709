//! Sampled payoff diagrams.

use tracing::trace;

use super::payoff::payoff_at;
use super::strategy::StrategySpec;

/// Shares per option contract.
pub const CONTRACT_MULTIPLIER: f64 = 100.0;

/// Default number of curve samples.
pub const DEFAULT_NUM_POINTS: usize = 100;

/// Default lower bound of the sampled range, as a multiple of spot.
pub const DEFAULT_LOWER_MULTIPLIER: f64 = 0.5;

/// Default upper bound of the sampled range, as a multiple of spot.
pub const DEFAULT_UPPER_MULTIPLIER: f64 = 1.5;

/// One sample of a payoff diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// Terminal stock price
    pub price: f64,
    /// Position profit/loss at that price (quantity × 100 shares)
    pub profit_loss: f64,
}

/// Profit/loss at expiry sampled over ascending terminal prices.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PayoffCurve {
    points: Vec<CurvePoint>,
}

impl PayoffCurve {
    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when the curve holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Samples in ascending price order.
    #[inline]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Sampled terminal prices.
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// Sampled profit/loss values.
    pub fn profit_losses(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.profit_loss).collect()
    }

    /// Lowest sampled profit/loss, `None` for an empty curve.
    pub fn min_profit_loss(&self) -> Option<f64> {
        self.points.iter().map(|p| p.profit_loss).reduce(f64::min)
    }

    /// Highest sampled profit/loss, `None` for an empty curve.
    pub fn max_profit_loss(&self) -> Option<f64> {
        self.points.iter().map(|p| p.profit_loss).reduce(f64::max)
    }

    /// Iterates over samples.
    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a PayoffCurve {
    type Item = &'a CurvePoint;
    type IntoIter = std::slice::Iter<'a, CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Samples the payoff over `[0.5·spot, 1.5·spot]` at `num_points` prices.
///
/// Each per-share payoff is scaled by `quantity × 100`.
///
/// # Examples
/// ```
/// use payoff_models::instruments::LegQuote;
/// use payoff_models::strategies::{build_payoff_curve, Strategy, StrategySpec};
///
/// let spec = StrategySpec::new(Strategy::LongPut(LegQuote::new(100.0, 4.0)), 2).unwrap();
/// let curve = build_payoff_curve(&spec, 100.0, 11);
///
/// assert_eq!(curve.prices().first(), Some(&50.0));
/// assert_eq!(curve.prices().last(), Some(&150.0));
/// // (100 - 50 - 4) × 2 × 100
/// assert_eq!(curve.points()[0].profit_loss, 9200.0);
/// ```
pub fn build_payoff_curve(spec: &StrategySpec, spot: f64, num_points: usize) -> PayoffCurve {
    build_payoff_curve_in_range(
        spec,
        spot,
        num_points,
        DEFAULT_LOWER_MULTIPLIER,
        DEFAULT_UPPER_MULTIPLIER,
    )
}

/// Samples the payoff over `[lower·spot, upper·spot]` at `num_points` prices.
///
/// # Edge cases
/// - `num_points == 0`: empty curve
/// - `num_points == 1`: the lower bound only
/// - `spot <= 0` or non-finite: a single sample at price 0
///
/// The last sample is pinned to the upper bound so the range is spanned
/// exactly.
pub fn build_payoff_curve_in_range(
    spec: &StrategySpec,
    spot: f64,
    num_points: usize,
    lower: f64,
    upper: f64,
) -> PayoffCurve {
    let scale = f64::from(spec.quantity()) * CONTRACT_MULTIPLIER;
    let sample = |price: f64| CurvePoint {
        price,
        profit_loss: payoff_at(spec.strategy(), price) * scale,
    };

    if num_points == 0 {
        return PayoffCurve::default();
    }
    if !spot.is_finite() || spot <= 0.0 {
        return PayoffCurve {
            points: vec![sample(0.0)],
        };
    }

    let min_price = (lower * spot).max(0.0);
    let max_price = upper * spot;
    if num_points == 1 {
        return PayoffCurve {
            points: vec![sample(min_price)],
        };
    }

    let step = (max_price - min_price) / (num_points - 1) as f64;
    let points: Vec<CurvePoint> = (0..num_points)
        .map(|i| {
            let price = if i == num_points - 1 {
                max_price
            } else {
                min_price + step * i as f64
            };
            sample(price)
        })
        .collect();

    trace!(
        strategy = spec.kind().name(),
        num_points,
        min_price,
        max_price,
        "payoff curve sampled"
    );

    PayoffCurve { points }
}
