//! # Payoff Models (L2: Business Logic)
//!
//! Closed-form option pricing and strategy payoff analytics.
//!
//! This crate provides:
//! - Black-Scholes price and Greeks for a single vanilla leg (`analytical`)
//! - Vanilla leg building blocks: option kind, side, quotes (`instruments`)
//! - The fixed strategy catalogue with payoff, breakeven, max profit/loss,
//!   and aggregated Greeks (`strategies`)
//!
//! ## Design Principles
//!
//! - **Enum-based strategies** closed over the catalogue, dispatched by match
//! - **Validated construction**: ordering and sanity checks happen once, in
//!   `StrategySpec::new` and `MarketParameters::new`
//! - **Pure computation**: no shared state, every call is reentrant
//!
//! ## Quick Start
//!
//! ```
//! use payoff_models::analytical::MarketParameters;
//! use payoff_models::instruments::LegQuote;
//! use payoff_models::strategies::{compute_strategy, Bound, Strategy, StrategySpec};
//!
//! let spec = StrategySpec::new(Strategy::LongCall(LegQuote::new(100.0, 5.0)), 1).unwrap();
//! let market = MarketParameters::new(100.0, 0.20, 0.05, 0.0, 30.0 / 365.0).unwrap();
//!
//! let result = compute_strategy(&spec, &market);
//! assert_eq!(result.analytics.max_profit, Bound::Unbounded);
//! assert_eq!(result.curve.len(), 100);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod strategies;
