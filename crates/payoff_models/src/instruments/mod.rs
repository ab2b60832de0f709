//! Vanilla option building blocks.
//!
//! This module provides:
//! - [`OptionKind`]: call or put, with intrinsic payoff
//! - [`Side`]: long or short, with position sign
//! - [`LegQuote`]: strike and premium as quoted for one leg
//! - [`OptionLeg`]: a fully specified leg used for decomposition and Greeks
//! - [`InstrumentError`]: leg construction failures

mod error;
mod leg;

pub use error::InstrumentError;
pub use leg::{LegQuote, OptionKind, OptionLeg, Side};
