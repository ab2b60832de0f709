//! Strategy catalogue identifiers.

use std::fmt;
use std::str::FromStr;

use super::error::StrategyError;
use crate::instruments::OptionKind;

/// Identifier for each entry of the fixed strategy catalogue.
///
/// Field-less counterpart of [`Strategy`](super::Strategy), used for
/// parsing user input, display and listing.
///
/// # Examples
/// ```
/// use payoff_models::strategies::StrategyKind;
///
/// let kind: StrategyKind = "iron-condor".parse().unwrap();
/// assert_eq!(kind, StrategyKind::IronCondor);
/// assert_eq!(kind.name(), "Iron Condor");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StrategyKind {
    /// Long call
    LongCall,
    /// Long put
    LongPut,
    /// Short call
    ShortCall,
    /// Short put
    ShortPut,
    /// Long K1 call, short K2 call
    BullCallSpread,
    /// Long K1 put, short K2 put
    BearPutSpread,
    /// Long K1 put, short K2 put, short K3 call, long K4 call
    IronCondor,
    /// Long call and long put at the same strike
    LongStraddle,
    /// Long put at K1, long call at a higher strike
    LongStrangle,
    /// Long K1 call, two short K2 calls, long K3 call
    LongButterfly,
}

impl StrategyKind {
    /// Every catalogue entry, in display order.
    pub const ALL: [StrategyKind; 10] = [
        StrategyKind::LongCall,
        StrategyKind::LongPut,
        StrategyKind::ShortCall,
        StrategyKind::ShortPut,
        StrategyKind::BullCallSpread,
        StrategyKind::BearPutSpread,
        StrategyKind::IronCondor,
        StrategyKind::LongStraddle,
        StrategyKind::LongStrangle,
        StrategyKind::LongButterfly,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::LongCall => "Long Call",
            StrategyKind::LongPut => "Long Put",
            StrategyKind::ShortCall => "Short Call",
            StrategyKind::ShortPut => "Short Put",
            StrategyKind::BullCallSpread => "Bull Call Spread",
            StrategyKind::BearPutSpread => "Bear Put Spread",
            StrategyKind::IronCondor => "Iron Condor",
            StrategyKind::LongStraddle => "Long Straddle",
            StrategyKind::LongStrangle => "Long Strangle",
            StrategyKind::LongButterfly => "Long Butterfly Spread",
        }
    }

    /// Option kind of the primary (K1) leg: Put iff the name contains "Put".
    pub fn primary_option_kind(&self) -> OptionKind {
        if self.name().contains("Put") {
            OptionKind::Put
        } else {
            OptionKind::Call
        }
    }

    /// Inputs each variant needs, as listed by the CLI.
    pub fn required_inputs(&self) -> &'static str {
        match self {
            StrategyKind::LongCall
            | StrategyKind::LongPut
            | StrategyKind::ShortCall
            | StrategyKind::ShortPut => "strike, premium",
            StrategyKind::BullCallSpread => {
                "strike (long call), premium, strike2 (short call), premium2"
            }
            StrategyKind::BearPutSpread => {
                "strike (long put), premium, strike2 (short put), premium2"
            }
            StrategyKind::IronCondor => {
                "strike..strike4 (long put, short put, short call, long call), premium..premium4"
            }
            StrategyKind::LongStraddle => "strike, premium (call), premium2 (put)",
            StrategyKind::LongStrangle => "strike (put), premium, strike2 (call), premium2",
            StrategyKind::LongButterfly => "strike..strike3 (lower, body, upper), premium..premium3",
        }
    }

    /// Number of distinct strikes the variant carries.
    pub fn strike_count(&self) -> usize {
        match self {
            StrategyKind::LongCall
            | StrategyKind::LongPut
            | StrategyKind::ShortCall
            | StrategyKind::ShortPut
            | StrategyKind::LongStraddle => 1,
            StrategyKind::BullCallSpread
            | StrategyKind::BearPutSpread
            | StrategyKind::LongStrangle => 2,
            StrategyKind::LongButterfly => 3,
            StrategyKind::IronCondor => 4,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = StrategyError;

    /// Parses display names case-insensitively, plus kebab/snake aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect();
        let normalised = normalised.split_whitespace().collect::<Vec<_>>().join(" ");

        let kind = match normalised.as_str() {
            "long call" | "call" => StrategyKind::LongCall,
            "long put" | "put" => StrategyKind::LongPut,
            "short call" => StrategyKind::ShortCall,
            "short put" => StrategyKind::ShortPut,
            "bull call spread" | "bull call" => StrategyKind::BullCallSpread,
            "bear put spread" | "bear put" => StrategyKind::BearPutSpread,
            "iron condor" | "condor" => StrategyKind::IronCondor,
            "long straddle" | "straddle" => StrategyKind::LongStraddle,
            "long strangle" | "strangle" => StrategyKind::LongStrangle,
            "long butterfly spread" | "long butterfly" | "butterfly" => {
                StrategyKind::LongButterfly
            }
            _ => return Err(StrategyError::UnknownStrategy(s.trim().to_string())),
        };
        Ok(kind)
    }
}
