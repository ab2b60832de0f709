//! Strategy engine for the fixed option-strategy catalogue.
//!
//! This module provides:
//! - [`Strategy`] / [`StrategyKind`]: the catalogue as a closed enum
//! - [`StrategySpec`]: validated strategy with contract quantity
//! - [`payoff_at`]: expiry profit/loss per share
//! - [`build_payoff_curve`]: sampled payoff diagram
//! - [`analyze`]: breakeven, max profit/loss and Greeks
//! - [`compute_strategy`]: analytics and curve in one call
//!
//! ## Primary-leg Greeks
//!
//! By default strategy Greeks are those of the K1 leg alone, priced as one
//! long contract whose kind is inferred from the strategy name. The long
//! strangle is the exception and sums its call and put legs.
//! [`GreeksMode::Aggregate`] sums every leg instead.

mod analytics;
mod curve;
mod engine;
mod error;
mod kind;
mod payoff;
mod strategy;

pub use analytics::{
    analyze, analyze_with_mode, strategy_greeks, Bound, Breakeven, GreeksMode, StrategyAnalytics,
};
pub use curve::{
    build_payoff_curve, build_payoff_curve_in_range, CurvePoint, PayoffCurve, CONTRACT_MULTIPLIER,
    DEFAULT_LOWER_MULTIPLIER, DEFAULT_NUM_POINTS, DEFAULT_UPPER_MULTIPLIER,
};
pub use engine::{
    compute_strategy, compute_strategy_with, EngineConfig, EngineConfigBuilder, StrategyResult,
    MAX_NUM_POINTS, MIN_NUM_POINTS,
};
pub use error::StrategyError;
pub use kind::StrategyKind;
pub use payoff::payoff_at;
pub use strategy::{Strategy, StrategySpec};
