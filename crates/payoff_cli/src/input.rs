//! Raw command-line inputs to validated engine inputs.
//!
//! Percentages become fractions, the expiry date becomes a day count and a
//! year fraction, and the generic strike/premium fields are mapped onto the
//! strategy variant.

use payoff_core::types::{days_to_expiry, percent_to_fraction, time_to_expiry, Date};
use payoff_models::analytical::MarketParameters;
use payoff_models::instruments::LegQuote;
use payoff_models::strategies::{Strategy, StrategyKind, StrategySpec};
use serde::Serialize;
use tracing::debug;

use crate::config::MarketDefaults;
use crate::{CliError, Result};

/// Calendar days to expiry when neither a date nor a day count is given.
pub const DEFAULT_DAYS_TO_EXPIRY: u32 = 30;

/// Strike and premium fields as entered.
///
/// Field `n` holds Kn/Pn; which legs they describe depends on the strategy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegInputs {
    /// Strikes K1 to K4
    pub strikes: [Option<f64>; 4],
    /// Premiums per share P1 to P4
    pub premiums: [Option<f64>; 4],
}

impl LegInputs {
    fn quote(&self, kind: StrategyKind, index: usize) -> Result<LegQuote> {
        let strike = self.strike(kind, index)?;
        let premium = self.premium(kind, index)?;
        Ok(LegQuote::new(strike, premium))
    }

    fn strike(&self, kind: StrategyKind, index: usize) -> Result<f64> {
        self.strikes[index].ok_or_else(|| missing(kind, "strike", index))
    }

    fn premium(&self, kind: StrategyKind, index: usize) -> Result<f64> {
        self.premiums[index].ok_or_else(|| missing(kind, "premium", index))
    }
}

fn missing(kind: StrategyKind, field: &str, index: usize) -> CliError {
    let flag = if index == 0 {
        format!("--{}", field)
    } else {
        format!("--{}{}", field, index + 1)
    };
    CliError::InvalidArgument(format!("{} requires {}", kind, flag))
}

/// Maps the entered fields onto `kind`.
///
/// Straddle: `strike`, `premium` (call), `premium2` (put).
/// Strangle: `strike`/`premium` (put), `strike2`/`premium2` (call).
pub fn build_strategy(kind: StrategyKind, legs: &LegInputs) -> Result<Strategy> {
    let strategy = match kind {
        StrategyKind::LongCall => Strategy::LongCall(legs.quote(kind, 0)?),
        StrategyKind::LongPut => Strategy::LongPut(legs.quote(kind, 0)?),
        StrategyKind::ShortCall => Strategy::ShortCall(legs.quote(kind, 0)?),
        StrategyKind::ShortPut => Strategy::ShortPut(legs.quote(kind, 0)?),
        StrategyKind::BullCallSpread => Strategy::BullCallSpread {
            long: legs.quote(kind, 0)?,
            short: legs.quote(kind, 1)?,
        },
        StrategyKind::BearPutSpread => Strategy::BearPutSpread {
            long: legs.quote(kind, 0)?,
            short: legs.quote(kind, 1)?,
        },
        StrategyKind::IronCondor => Strategy::IronCondor {
            long_put: legs.quote(kind, 0)?,
            short_put: legs.quote(kind, 1)?,
            short_call: legs.quote(kind, 2)?,
            long_call: legs.quote(kind, 3)?,
        },
        StrategyKind::LongStraddle => Strategy::LongStraddle {
            strike: legs.strike(kind, 0)?,
            call_premium: legs.premium(kind, 0)?,
            put_premium: legs.premium(kind, 1)?,
        },
        StrategyKind::LongStrangle => Strategy::LongStrangle {
            put: legs.quote(kind, 0)?,
            call: legs.quote(kind, 1)?,
        },
        StrategyKind::LongButterfly => Strategy::LongButterfly {
            lower: legs.quote(kind, 0)?,
            middle: legs.quote(kind, 1)?,
            upper: legs.quote(kind, 2)?,
        },
    };
    Ok(strategy)
}

/// Clamps an entered quantity to at least one contract.
#[inline]
pub fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity.max(1)).unwrap_or(u32::MAX)
}

/// Parses the strategy name and legs into a validated spec.
pub fn build_spec(name: &str, legs: &LegInputs, quantity: i64) -> Result<StrategySpec> {
    let kind: StrategyKind = name.parse()?;
    let strategy = build_strategy(kind, legs)?;
    Ok(StrategySpec::new(strategy, clamp_quantity(quantity))?)
}

/// Expiry resolved to a calendar date and a day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Expiry {
    /// Expiry date
    pub date: Date,
    /// Whole calendar days from today, floored at zero
    pub days: u32,
}

impl Expiry {
    /// Year fraction on the 365-day convention
    pub fn time_to_expiry(&self) -> f64 {
        time_to_expiry(self.days)
    }
}

/// Resolves the expiry from a day count, a date, or the 30-day default.
///
/// A day count takes precedence over a date.
pub fn resolve_expiry(today: Date, date: Option<&str>, days: Option<u32>) -> Result<Expiry> {
    match (days, date) {
        (Some(days), _) => Ok(Expiry {
            date: today.add_days(i64::from(days)),
            days,
        }),
        (None, Some(date)) => {
            let date = Date::parse(date)?;
            Ok(Expiry {
                date,
                days: days_to_expiry(today, date),
            })
        }
        (None, None) => Ok(Expiry {
            date: today.add_days(i64::from(DEFAULT_DAYS_TO_EXPIRY)),
            days: DEFAULT_DAYS_TO_EXPIRY,
        }),
    }
}

/// Market inputs in percent, each falling back to the configured default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketInputs {
    /// Current price of the underlying
    pub spot: f64,
    /// Annualised volatility in percent
    pub volatility_pct: Option<f64>,
    /// Annualised risk-free rate in percent
    pub risk_free_pct: Option<f64>,
    /// Annualised dividend yield in percent
    pub dividend_pct: Option<f64>,
}

/// Converts percentages and builds validated market parameters.
pub fn build_market(
    inputs: &MarketInputs,
    defaults: &MarketDefaults,
    expiry: &Expiry,
) -> Result<MarketParameters> {
    let volatility = percent_to_fraction(inputs.volatility_pct.unwrap_or(defaults.volatility_pct));
    let rate = percent_to_fraction(inputs.risk_free_pct.unwrap_or(defaults.risk_free_pct));
    let dividend = percent_to_fraction(inputs.dividend_pct.unwrap_or(defaults.dividend_pct));

    debug!(
        spot = inputs.spot,
        volatility,
        rate,
        dividend,
        days = expiry.days,
        "market inputs resolved"
    );

    Ok(MarketParameters::new(
        inputs.spot,
        volatility,
        rate,
        dividend,
        expiry.time_to_expiry(),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use payoff_core::types::PricingError;

    fn legs(strikes: &[f64], premiums: &[f64]) -> LegInputs {
        let mut inputs = LegInputs::default();
        for (i, k) in strikes.iter().enumerate() {
            inputs.strikes[i] = Some(*k);
        }
        for (i, p) in premiums.iter().enumerate() {
            inputs.premiums[i] = Some(*p);
        }
        inputs
    }

    #[test]
    fn test_straddle_field_mapping() {
        let s = build_strategy(StrategyKind::LongStraddle, &legs(&[100.0], &[5.0, 4.0])).unwrap();
        assert_eq!(
            s,
            Strategy::LongStraddle {
                strike: 100.0,
                call_premium: 5.0,
                put_premium: 4.0
            }
        );
    }

    #[test]
    fn test_strangle_field_mapping() {
        let s = build_strategy(
            StrategyKind::LongStrangle,
            &legs(&[95.0, 105.0], &[2.0, 1.5]),
        )
        .unwrap();
        assert_eq!(
            s,
            Strategy::LongStrangle {
                put: LegQuote::new(95.0, 2.0),
                call: LegQuote::new(105.0, 1.5)
            }
        );
    }

    #[test]
    fn test_missing_field_names_flag() {
        let err = build_strategy(
            StrategyKind::IronCondor,
            &legs(&[90.0, 95.0, 105.0], &[1.0, 3.0, 3.0, 1.0]),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: Iron Condor requires --strike4"
        );

        let err = build_strategy(StrategyKind::LongCall, &legs(&[100.0], &[])).unwrap_err();
        assert!(err.to_string().contains("--premium"));
    }

    #[test]
    fn test_quantity_clamped() {
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(-4), 1);
        assert_eq!(clamp_quantity(7), 7);
        assert_eq!(clamp_quantity(i64::MAX), u32::MAX);
    }

    #[test]
    fn test_build_spec_rejects_bad_ordering() {
        let err = build_spec(
            "iron condor",
            &legs(&[100.0, 90.0, 105.0, 110.0], &[1.0, 3.0, 3.0, 1.0]),
            1,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Pricing(PricingError::InvalidInput(_))));
        assert!(err.to_string().contains("K1 < K2 < K3 < K4"));
    }

    #[test]
    fn test_build_spec_unknown_strategy() {
        let err = build_spec("covered call", &legs(&[100.0], &[1.0]), 1).unwrap_err();
        assert!(matches!(
            err,
            CliError::Pricing(PricingError::UnsupportedStrategy(_))
        ));
    }

    #[test]
    fn test_resolve_expiry() {
        let today = Date::from_ymd(2024, 1, 1).unwrap();

        let e = resolve_expiry(today, None, None).unwrap();
        assert_eq!(e.days, 30);
        assert_eq!(e.date, Date::from_ymd(2024, 1, 31).unwrap());

        let e = resolve_expiry(today, Some("2024-03-01"), None).unwrap();
        assert_eq!(e.days, 60);

        let e = resolve_expiry(today, Some("2023-12-01"), None).unwrap();
        assert_eq!(e.days, 0);
        assert_eq!(e.time_to_expiry(), 0.0);

        let e = resolve_expiry(today, Some("2024-03-01"), Some(10)).unwrap();
        assert_eq!(e.days, 10);

        assert!(matches!(
            resolve_expiry(today, Some("March"), None),
            Err(CliError::Parse(_))
        ));
    }

    #[test]
    fn test_build_market_converts_percentages() {
        let today = Date::from_ymd(2024, 1, 1).unwrap();
        let expiry = resolve_expiry(today, None, Some(73)).unwrap();
        let inputs = MarketInputs {
            spot: 100.0,
            volatility_pct: Some(25.0),
            ..Default::default()
        };
        let m = build_market(&inputs, &MarketDefaults::default(), &expiry).unwrap();
        assert_relative_eq!(m.volatility(), 0.25);
        assert_relative_eq!(m.risk_free_rate(), 0.05);
        assert_eq!(m.dividend_yield(), 0.0);
        assert_relative_eq!(m.time_to_expiry(), 0.2);
    }

    #[test]
    fn test_build_market_rejects_bad_spot() {
        let today = Date::from_ymd(2024, 1, 1).unwrap();
        let expiry = resolve_expiry(today, None, None).unwrap();
        let inputs = MarketInputs {
            spot: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            build_market(&inputs, &MarketDefaults::default(), &expiry),
            Err(CliError::Pricing(PricingError::InvalidInput(_)))
        ));
    }
}
