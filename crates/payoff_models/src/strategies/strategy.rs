//! Strategy catalogue and validated strategy specification.
//!
//! [`Strategy`] is a closed sum type: each variant carries exactly the
//! strikes and premiums it needs. [`StrategySpec`] pairs a strategy with a
//! contract quantity and is the only way into the engine, so ordering and
//! sanity checks run once at construction.

use super::error::StrategyError;
use super::kind::StrategyKind;
use crate::instruments::{LegQuote, OptionKind, OptionLeg, Side};

const STRIKE_LABELS: [&str; 4] = ["K1", "K2", "K3", "K4"];
const PREMIUM_LABELS: [&str; 4] = ["P1", "P2", "P3", "P4"];

/// An option strategy from the fixed catalogue.
///
/// Strikes are numbered K1, K2, ... in the order the fields appear, with
/// premiums P1, P2, ... alongside.
///
/// # Examples
/// ```
/// use payoff_models::instruments::LegQuote;
/// use payoff_models::strategies::{Strategy, StrategyKind};
///
/// let spread = Strategy::BullCallSpread {
///     long: LegQuote::new(100.0, 5.0),
///     short: LegQuote::new(110.0, 2.0),
/// };
/// assert_eq!(spread.kind(), StrategyKind::BullCallSpread);
/// assert_eq!(spread.legs(1).len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "strategy", rename_all = "snake_case"))]
pub enum Strategy {
    /// Long call at K1
    LongCall(LegQuote),
    /// Long put at K1
    LongPut(LegQuote),
    /// Short call at K1
    ShortCall(LegQuote),
    /// Short put at K1
    ShortPut(LegQuote),
    /// Long call at K1, short call at K2
    BullCallSpread {
        /// Long call (K1, P1)
        long: LegQuote,
        /// Short call (K2, P2)
        short: LegQuote,
    },
    /// Long put at K1, short put at K2
    BearPutSpread {
        /// Long put (K1, P1)
        long: LegQuote,
        /// Short put (K2, P2)
        short: LegQuote,
    },
    /// Long put K1, short put K2, short call K3, long call K4
    IronCondor {
        /// Long put (K1, P1)
        long_put: LegQuote,
        /// Short put (K2, P2)
        short_put: LegQuote,
        /// Short call (K3, P3)
        short_call: LegQuote,
        /// Long call (K4, P4)
        long_call: LegQuote,
    },
    /// Long call and long put at one strike
    LongStraddle {
        /// Shared strike (K1)
        strike: f64,
        /// Call premium (P1)
        call_premium: f64,
        /// Put premium (P2)
        put_premium: f64,
    },
    /// Long put at K1 and long call at a higher strike
    LongStrangle {
        /// Long put (K1, P1)
        put: LegQuote,
        /// Long call (K2, P2)
        call: LegQuote,
    },
    /// Long call K1, two short calls K2, long call K3
    LongButterfly {
        /// Lower wing (K1, P1)
        lower: LegQuote,
        /// Body, sold twice (K2, P2)
        middle: LegQuote,
        /// Upper wing (K3, P3)
        upper: LegQuote,
    },
}

impl Strategy {
    /// Catalogue identifier of this strategy.
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::LongCall(_) => StrategyKind::LongCall,
            Strategy::LongPut(_) => StrategyKind::LongPut,
            Strategy::ShortCall(_) => StrategyKind::ShortCall,
            Strategy::ShortPut(_) => StrategyKind::ShortPut,
            Strategy::BullCallSpread { .. } => StrategyKind::BullCallSpread,
            Strategy::BearPutSpread { .. } => StrategyKind::BearPutSpread,
            Strategy::IronCondor { .. } => StrategyKind::IronCondor,
            Strategy::LongStraddle { .. } => StrategyKind::LongStraddle,
            Strategy::LongStrangle { .. } => StrategyKind::LongStrangle,
            Strategy::LongButterfly { .. } => StrategyKind::LongButterfly,
        }
    }

    /// Display name of this strategy.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// The K1/P1 quote, used for primary-leg Greeks.
    pub fn primary(&self) -> LegQuote {
        match *self {
            Strategy::LongCall(q)
            | Strategy::LongPut(q)
            | Strategy::ShortCall(q)
            | Strategy::ShortPut(q) => q,
            Strategy::BullCallSpread { long, .. } | Strategy::BearPutSpread { long, .. } => long,
            Strategy::IronCondor { long_put, .. } => long_put,
            Strategy::LongStraddle {
                strike,
                call_premium,
                ..
            } => LegQuote::new(strike, call_premium),
            Strategy::LongStrangle { put, .. } => put,
            Strategy::LongButterfly { lower, .. } => lower,
        }
    }

    /// Quotes in K1, K2, ... order. The straddle repeats its strike.
    pub fn quotes(&self) -> Vec<LegQuote> {
        match *self {
            Strategy::LongCall(q)
            | Strategy::LongPut(q)
            | Strategy::ShortCall(q)
            | Strategy::ShortPut(q) => vec![q],
            Strategy::BullCallSpread { long, short } | Strategy::BearPutSpread { long, short } => {
                vec![long, short]
            }
            Strategy::IronCondor {
                long_put,
                short_put,
                short_call,
                long_call,
            } => vec![long_put, short_put, short_call, long_call],
            Strategy::LongStraddle {
                strike,
                call_premium,
                put_premium,
            } => vec![
                LegQuote::new(strike, call_premium),
                LegQuote::new(strike, put_premium),
            ],
            Strategy::LongStrangle { put, call } => vec![put, call],
            Strategy::LongButterfly {
                lower,
                middle,
                upper,
            } => vec![lower, middle, upper],
        }
    }

    /// Decomposes the strategy into vanilla legs for `quantity` contracts.
    ///
    /// The butterfly body is a single short-call leg of `2 * quantity`.
    pub fn legs(&self, quantity: u32) -> Vec<OptionLeg> {
        use OptionKind::{Call, Put};
        use Side::{Long, Short};

        let leg = |side, kind, q: LegQuote, n| OptionLeg::new(side, kind, q.strike, q.premium, n);

        match *self {
            Strategy::LongCall(q) => vec![leg(Long, Call, q, quantity)],
            Strategy::LongPut(q) => vec![leg(Long, Put, q, quantity)],
            Strategy::ShortCall(q) => vec![leg(Short, Call, q, quantity)],
            Strategy::ShortPut(q) => vec![leg(Short, Put, q, quantity)],
            Strategy::BullCallSpread { long, short } => vec![
                leg(Long, Call, long, quantity),
                leg(Short, Call, short, quantity),
            ],
            Strategy::BearPutSpread { long, short } => vec![
                leg(Long, Put, long, quantity),
                leg(Short, Put, short, quantity),
            ],
            Strategy::IronCondor {
                long_put,
                short_put,
                short_call,
                long_call,
            } => vec![
                leg(Long, Put, long_put, quantity),
                leg(Short, Put, short_put, quantity),
                leg(Short, Call, short_call, quantity),
                leg(Long, Call, long_call, quantity),
            ],
            Strategy::LongStraddle {
                strike,
                call_premium,
                put_premium,
            } => vec![
                OptionLeg::new(Long, Call, strike, call_premium, quantity),
                OptionLeg::new(Long, Put, strike, put_premium, quantity),
            ],
            Strategy::LongStrangle { put, call } => vec![
                leg(Long, Put, put, quantity),
                leg(Long, Call, call, quantity),
            ],
            Strategy::LongButterfly {
                lower,
                middle,
                upper,
            } => vec![
                leg(Long, Call, lower, quantity),
                leg(Short, Call, middle, quantity.saturating_mul(2)),
                leg(Long, Call, upper, quantity),
            ],
        }
    }

    /// Distance between adjacent strikes for the winged strategies.
    ///
    /// Butterfly: K2 - K1. Iron condor: max(K2 - K1, K4 - K3).
    pub fn wing_width(&self) -> Option<f64> {
        match *self {
            Strategy::LongButterfly { lower, middle, .. } => Some(middle.strike - lower.strike),
            Strategy::IronCondor {
                long_put,
                short_put,
                short_call,
                long_call,
            } => Some(
                (short_put.strike - long_put.strike).max(long_call.strike - short_call.strike),
            ),
            _ => None,
        }
    }

    /// Net premium per share: positive when paid (debit), negative when
    /// received (credit).
    pub fn net_debit(&self) -> f64 {
        self.legs(1)
            .iter()
            .map(|leg| leg.signed_quantity() * leg.premium)
            .sum()
    }

    /// One-line description of the position.
    pub fn summary(&self) -> String {
        let debit_or_credit = |net: f64| {
            if net >= 0.0 {
                format!("a total debit of ${:.2}", net)
            } else {
                format!("a total credit of ${:.2}", -net)
            }
        };

        match *self {
            Strategy::LongCall(q) => format!(
                "buying a ${:.2} call for a premium of ${:.2} per share",
                q.strike, q.premium
            ),
            Strategy::LongPut(q) => format!(
                "buying a ${:.2} put for a premium of ${:.2} per share",
                q.strike, q.premium
            ),
            Strategy::ShortCall(q) => format!(
                "selling a ${:.2} call for a premium of ${:.2} per share",
                q.strike, q.premium
            ),
            Strategy::ShortPut(q) => format!(
                "selling a ${:.2} put for a premium of ${:.2} per share",
                q.strike, q.premium
            ),
            Strategy::BullCallSpread { long, short } => format!(
                "buying a ${:.2} call (premium ${:.2}) and selling a ${:.2} call (premium ${:.2}) for {} per contract",
                long.strike,
                long.premium,
                short.strike,
                short.premium,
                debit_or_credit(self.net_debit())
            ),
            Strategy::BearPutSpread { long, short } => format!(
                "buying a ${:.2} put (premium ${:.2}) and selling a ${:.2} put (premium ${:.2}) for {} per contract",
                long.strike,
                long.premium,
                short.strike,
                short.premium,
                debit_or_credit(self.net_debit())
            ),
            Strategy::IronCondor {
                long_put,
                short_put,
                short_call,
                long_call,
            } => format!(
                "selling the ${:.2}/${:.2} put spread and the ${:.2}/${:.2} call spread for {} per contract",
                short_put.strike,
                long_put.strike,
                short_call.strike,
                long_call.strike,
                debit_or_credit(self.net_debit())
            ),
            Strategy::LongStraddle {
                strike,
                call_premium,
                put_premium,
            } => format!(
                "buying a ${:.2} call (premium ${:.2}) + a ${:.2} put (premium ${:.2}) for {} per contract",
                strike,
                call_premium,
                strike,
                put_premium,
                debit_or_credit(self.net_debit())
            ),
            Strategy::LongStrangle { put, call } => format!(
                "buying a ${:.2} put (premium ${:.2}) + a ${:.2} call (premium ${:.2}) for {} per contract",
                put.strike,
                put.premium,
                call.strike,
                call.premium,
                debit_or_credit(self.net_debit())
            ),
            Strategy::LongButterfly {
                lower,
                middle,
                upper,
            } => format!(
                "buying the ${:.2} and ${:.2} calls and selling two ${:.2} calls for {} per contract",
                lower.strike,
                upper.strike,
                middle.strike,
                debit_or_credit(self.net_debit())
            ),
        }
    }

    fn check_ordering(&self) -> Result<(), StrategyError> {
        let ordering = |requirement| StrategyError::StrikeOrdering {
            strategy: self.kind(),
            requirement,
        };

        match *self {
            Strategy::IronCondor {
                long_put,
                short_put,
                short_call,
                long_call,
            } => {
                if !(long_put.strike < short_put.strike
                    && short_put.strike < short_call.strike
                    && short_call.strike < long_call.strike)
                {
                    return Err(ordering("K1 < K2 < K3 < K4"));
                }
            }
            Strategy::LongButterfly {
                lower,
                middle,
                upper,
            } => {
                if !(lower.strike < middle.strike && middle.strike < upper.strike) {
                    return Err(ordering("K1 < K2 < K3"));
                }
            }
            Strategy::LongStrangle { put, call } => {
                if put.strike >= call.strike {
                    return Err(ordering("put strike < call strike"));
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// A validated strategy together with its contract quantity.
///
/// # Examples
/// ```
/// use payoff_models::instruments::LegQuote;
/// use payoff_models::strategies::{Strategy, StrategyError, StrategySpec};
///
/// let condor = Strategy::IronCondor {
///     long_put: LegQuote::new(100.0, 1.0),
///     short_put: LegQuote::new(90.0, 3.0),
///     short_call: LegQuote::new(105.0, 3.0),
///     long_call: LegQuote::new(110.0, 1.0),
/// };
/// assert!(matches!(
///     StrategySpec::new(condor, 1),
///     Err(StrategyError::StrikeOrdering { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrategySpec {
    strategy: Strategy,
    quantity: u32,
}

impl StrategySpec {
    /// Validates and creates a strategy specification.
    ///
    /// # Errors
    /// - `InvalidQuantity` if `quantity == 0`
    /// - `InvalidStrike` if any strike is non-finite or `<= 0`
    /// - `InvalidPremium` if any premium is non-finite or `< 0`
    /// - `StrikeOrdering` for an iron condor, butterfly or strangle whose
    ///   strikes are out of order
    pub fn new(strategy: Strategy, quantity: u32) -> Result<Self, StrategyError> {
        if quantity == 0 {
            return Err(StrategyError::InvalidQuantity { quantity });
        }

        for (i, quote) in strategy.quotes().iter().enumerate() {
            if !quote.strike.is_finite() || quote.strike <= 0.0 {
                return Err(StrategyError::InvalidStrike {
                    leg: STRIKE_LABELS[i],
                    strike: quote.strike,
                });
            }
            if !quote.premium.is_finite() || quote.premium < 0.0 {
                return Err(StrategyError::InvalidPremium {
                    leg: PREMIUM_LABELS[i],
                    premium: quote.premium,
                });
            }
        }

        strategy.check_ordering()?;

        Ok(Self { strategy, quantity })
    }

    /// The strategy.
    #[inline]
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Number of contracts.
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Catalogue identifier.
    #[inline]
    pub fn kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// Vanilla legs at this spec's quantity.
    pub fn legs(&self) -> Vec<OptionLeg> {
        self.strategy.legs(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn condor(k: [f64; 4]) -> Strategy {
        Strategy::IronCondor {
            long_put: LegQuote::new(k[0], 1.0),
            short_put: LegQuote::new(k[1], 3.0),
            short_call: LegQuote::new(k[2], 3.0),
            long_call: LegQuote::new(k[3], 1.0),
        }
    }

    fn butterfly(k: [f64; 3]) -> Strategy {
        Strategy::LongButterfly {
            lower: LegQuote::new(k[0], 8.0),
            middle: LegQuote::new(k[1], 4.0),
            upper: LegQuote::new(k[2], 1.0),
        }
    }

    #[test]
    fn test_valid_condor_accepted() {
        let spec = StrategySpec::new(condor([90.0, 95.0, 105.0, 110.0]), 3).unwrap();
        assert_eq!(spec.quantity(), 3);
        assert_eq!(spec.kind(), StrategyKind::IronCondor);
    }

    #[test]
    fn test_condor_ordering_rejected() {
        for strikes in [
            [100.0, 90.0, 105.0, 110.0],
            [90.0, 90.0, 105.0, 110.0],
            [90.0, 95.0, 95.0, 110.0],
            [90.0, 95.0, 110.0, 110.0],
            [90.0, 95.0, 115.0, 110.0],
        ] {
            assert_eq!(
                StrategySpec::new(condor(strikes), 1),
                Err(StrategyError::StrikeOrdering {
                    strategy: StrategyKind::IronCondor,
                    requirement: "K1 < K2 < K3 < K4",
                })
            );
        }
    }

    #[test]
    fn test_butterfly_ordering_rejected() {
        let err = StrategySpec::new(butterfly([90.0, 110.0, 100.0]), 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Long Butterfly Spread strikes must satisfy K1 < K2 < K3"
        );
    }

    #[test]
    fn test_butterfly_equal_strikes_rejected() {
        for strikes in [[100.0, 100.0, 110.0], [90.0, 100.0, 100.0]] {
            assert_eq!(
                StrategySpec::new(butterfly(strikes), 1),
                Err(StrategyError::StrikeOrdering {
                    strategy: StrategyKind::LongButterfly,
                    requirement: "K1 < K2 < K3",
                })
            );
        }
    }

    #[test]
    fn test_strangle_ordering_rejected() {
        for (put_strike, call_strike) in [(105.0, 95.0), (100.0, 100.0)] {
            let strangle = Strategy::LongStrangle {
                put: LegQuote::new(put_strike, 2.0),
                call: LegQuote::new(call_strike, 1.5),
            };
            assert_eq!(
                StrategySpec::new(strangle, 1),
                Err(StrategyError::StrikeOrdering {
                    strategy: StrategyKind::LongStrangle,
                    requirement: "put strike < call strike",
                })
            );
        }
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let s = Strategy::LongCall(LegQuote::new(100.0, 5.0));
        assert_eq!(
            StrategySpec::new(s, 0),
            Err(StrategyError::InvalidQuantity { quantity: 0 })
        );
    }

    #[test]
    fn test_bad_strike_and_premium_rejected() {
        let s = Strategy::BullCallSpread {
            long: LegQuote::new(100.0, 5.0),
            short: LegQuote::new(0.0, 2.0),
        };
        assert!(matches!(
            StrategySpec::new(s, 1),
            Err(StrategyError::InvalidStrike { leg: "K2", .. })
        ));

        let s = Strategy::ShortPut(LegQuote::new(100.0, f64::NAN));
        assert!(matches!(
            StrategySpec::new(s, 1),
            Err(StrategyError::InvalidPremium { leg: "P1", .. })
        ));

        let s = Strategy::LongStraddle {
            strike: 100.0,
            call_premium: 5.0,
            put_premium: -1.0,
        };
        assert!(matches!(
            StrategySpec::new(s, 1),
            Err(StrategyError::InvalidPremium { leg: "P2", .. })
        ));
    }

    #[test]
    fn test_spreads_not_ordering_checked() {
        // Inverted verticals are unusual but well defined
        let s = Strategy::BullCallSpread {
            long: LegQuote::new(110.0, 2.0),
            short: LegQuote::new(100.0, 5.0),
        };
        assert!(StrategySpec::new(s, 1).is_ok());
    }

    #[test]
    fn test_legs_butterfly_body_doubled() {
        let legs = butterfly([90.0, 100.0, 110.0]).legs(3);
        assert_eq!(legs.len(), 3);
        assert_eq!(legs[1].side, Side::Short);
        assert_eq!(legs[1].quantity, 6);
        assert!(legs.iter().all(|l| l.kind == OptionKind::Call));
    }

    #[test]
    fn test_legs_condor_sides() {
        let legs = condor([90.0, 95.0, 105.0, 110.0]).legs(1);
        let sides: Vec<_> = legs.iter().map(|l| (l.side, l.kind)).collect();
        assert_eq!(
            sides,
            vec![
                (Side::Long, OptionKind::Put),
                (Side::Short, OptionKind::Put),
                (Side::Short, OptionKind::Call),
                (Side::Long, OptionKind::Call),
            ]
        );
    }

    #[test]
    fn test_primary_quote() {
        let straddle = Strategy::LongStraddle {
            strike: 100.0,
            call_premium: 5.0,
            put_premium: 4.0,
        };
        assert_eq!(straddle.primary(), LegQuote::new(100.0, 5.0));
        assert_eq!(
            condor([90.0, 95.0, 105.0, 110.0]).primary(),
            LegQuote::new(90.0, 1.0)
        );
    }

    #[test]
    fn test_wing_width() {
        assert_eq!(butterfly([90.0, 100.0, 110.0]).wing_width(), Some(10.0));
        assert_eq!(
            condor([85.0, 95.0, 105.0, 110.0]).wing_width(),
            Some(10.0)
        );
        assert_eq!(
            Strategy::LongCall(LegQuote::new(100.0, 5.0)).wing_width(),
            None
        );
    }

    #[test]
    fn test_net_debit() {
        assert_relative_eq!(butterfly([90.0, 100.0, 110.0]).net_debit(), 1.0);
        assert_relative_eq!(condor([90.0, 95.0, 105.0, 110.0]).net_debit(), -4.0);
    }

    #[test]
    fn test_strangle_summary() {
        let strangle = Strategy::LongStrangle {
            put: LegQuote::new(95.0, 2.0),
            call: LegQuote::new(105.0, 1.5),
        };
        assert_eq!(
            strangle.summary(),
            "buying a $95.00 put (premium $2.00) + a $105.00 call (premium $1.50) for a total debit of $3.50 per contract"
        );
    }

    #[test]
    fn test_condor_summary_is_credit() {
        let summary = condor([90.0, 95.0, 105.0, 110.0]).summary();
        assert!(summary.contains("total credit of $4.00"));
    }
}
