//! Strategy engine entry point and configuration.

use tracing::debug;

use super::analytics::{analyze_with_mode, GreeksMode, StrategyAnalytics};
use super::curve::{
    build_payoff_curve_in_range, PayoffCurve, DEFAULT_LOWER_MULTIPLIER, DEFAULT_NUM_POINTS,
    DEFAULT_UPPER_MULTIPLIER,
};
use super::error::StrategyError;
use super::strategy::StrategySpec;
use crate::analytical::MarketParameters;

/// Minimum number of curve samples that still spans a range.
pub const MIN_NUM_POINTS: usize = 2;

/// Maximum number of curve samples.
pub const MAX_NUM_POINTS: usize = 100_000;

/// Strategy engine configuration.
///
/// Use [`EngineConfigBuilder`] to construct non-default instances.
///
/// # Examples
///
/// ```rust
/// use payoff_models::strategies::{EngineConfig, GreeksMode};
///
/// let config = EngineConfig::builder()
///     .num_points(250)
///     .range(0.8, 1.2)
///     .greeks_mode(GreeksMode::Aggregate)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.num_points(), 250);
/// assert_eq!(config.greeks_mode(), GreeksMode::Aggregate);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    num_points: usize,
    lower_multiplier: f64,
    upper_multiplier: f64,
    greeks_mode: GreeksMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_NUM_POINTS,
            lower_multiplier: DEFAULT_LOWER_MULTIPLIER,
            upper_multiplier: DEFAULT_UPPER_MULTIPLIER,
            greeks_mode: GreeksMode::default(),
        }
    }
}

impl EngineConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Number of payoff curve samples.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Lower end of the sampled range as a multiple of spot.
    #[inline]
    pub fn lower_multiplier(&self) -> f64 {
        self.lower_multiplier
    }

    /// Upper end of the sampled range as a multiple of spot.
    #[inline]
    pub fn upper_multiplier(&self) -> f64 {
        self.upper_multiplier
    }

    /// Greeks assembly mode.
    #[inline]
    pub fn greeks_mode(&self) -> GreeksMode {
        self.greeks_mode
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::InvalidConfig` if:
    /// - `num_points` is below 2 or above 100,000
    /// - the range multipliers are not finite with `0 <= lower < upper`
    pub fn validate(&self) -> Result<(), StrategyError> {
        if !(MIN_NUM_POINTS..=MAX_NUM_POINTS).contains(&self.num_points) {
            return Err(StrategyError::InvalidConfig {
                name: "num_points",
                reason: format!(
                    "{} is outside [{}, {}]",
                    self.num_points, MIN_NUM_POINTS, MAX_NUM_POINTS
                ),
            });
        }
        let (lower, upper) = (self.lower_multiplier, self.upper_multiplier);
        if !lower.is_finite() || !upper.is_finite() || lower < 0.0 || lower >= upper {
            return Err(StrategyError::InvalidConfig {
                name: "range",
                reason: format!("[{}, {}] must satisfy 0 <= lower < upper", lower, upper),
            });
        }
        Ok(())
    }
}

/// Builder for [`EngineConfig`], validated at build time.
#[derive(Clone, Debug, Default)]
pub struct EngineConfigBuilder {
    num_points: Option<usize>,
    range: Option<(f64, f64)>,
    greeks_mode: GreeksMode,
}

impl EngineConfigBuilder {
    /// Sets the number of curve samples.
    ///
    /// # Arguments
    ///
    /// * `num_points` - Number of samples in [2, 100_000]
    #[inline]
    pub fn num_points(mut self, num_points: usize) -> Self {
        self.num_points = Some(num_points);
        self
    }

    /// Sets the sampled price range as multiples of spot.
    #[inline]
    pub fn range(mut self, lower: f64, upper: f64) -> Self {
        self.range = Some((lower, upper));
        self
    }

    /// Sets the Greeks assembly mode.
    #[inline]
    pub fn greeks_mode(mut self, greeks_mode: GreeksMode) -> Self {
        self.greeks_mode = greeks_mode;
        self
    }

    /// Builds the configuration, filling unset fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::InvalidConfig` if validation fails.
    pub fn build(self) -> Result<EngineConfig, StrategyError> {
        let (lower_multiplier, upper_multiplier) = self
            .range
            .unwrap_or((DEFAULT_LOWER_MULTIPLIER, DEFAULT_UPPER_MULTIPLIER));

        let config = EngineConfig {
            num_points: self.num_points.unwrap_or(DEFAULT_NUM_POINTS),
            lower_multiplier,
            upper_multiplier,
            greeks_mode: self.greeks_mode,
        };

        config.validate()?;
        Ok(config)
    }
}

/// Analytics and payoff curve for one strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyResult {
    /// Breakeven, limits and Greeks
    pub analytics: StrategyAnalytics,
    /// Payoff at expiry over the sampled range
    pub curve: PayoffCurve,
}

/// Computes analytics and the payoff curve with the default configuration.
///
/// Inputs are already validated by their constructors, so this cannot fail.
pub fn compute_strategy(spec: &StrategySpec, market: &MarketParameters) -> StrategyResult {
    compute_strategy_with(spec, market, &EngineConfig::default())
}

/// Computes analytics and the payoff curve under `config`.
///
/// # Examples
/// ```
/// use payoff_models::analytical::MarketParameters;
/// use payoff_models::instruments::LegQuote;
/// use payoff_models::strategies::{compute_strategy_with, EngineConfig, Strategy, StrategySpec};
///
/// let spec = StrategySpec::new(Strategy::ShortPut(LegQuote::new(95.0, 2.0)), 1).unwrap();
/// let market = MarketParameters::new(100.0, 0.25, 0.03, 0.0, 0.1).unwrap();
/// let config = EngineConfig::builder().num_points(21).build().unwrap();
///
/// let result = compute_strategy_with(&spec, &market, &config);
/// assert_eq!(result.curve.len(), 21);
/// ```
pub fn compute_strategy_with(
    spec: &StrategySpec,
    market: &MarketParameters,
    config: &EngineConfig,
) -> StrategyResult {
    let analytics = analyze_with_mode(spec, market, config.greeks_mode());
    let curve = build_payoff_curve_in_range(
        spec,
        market.spot(),
        config.num_points(),
        config.lower_multiplier(),
        config.upper_multiplier(),
    );

    debug!(
        strategy = spec.kind().name(),
        spot = market.spot(),
        time_to_expiry = market.time_to_expiry(),
        points = curve.len(),
        price = analytics.greeks.price,
        delta = analytics.greeks.delta,
        "strategy computed"
    );

    StrategyResult { analytics, curve }
}
