//! Instrument error types.

use payoff_core::types::PricingError;
use thiserror::Error;

/// Errors raised while building option legs.
///
/// # Examples
/// ```
/// use payoff_models::instruments::{InstrumentError, OptionKind};
///
/// let err = "straddle".parse::<OptionKind>().unwrap_err();
/// assert_eq!(err, InstrumentError::UnknownOptionKind("straddle".into()));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstrumentError {
    /// Option kind other than call or put.
    #[error("unknown option kind '{0}', expected call or put")]
    UnknownOptionKind(String),
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
