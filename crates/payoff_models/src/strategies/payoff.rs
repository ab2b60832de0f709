//! Expiry profit/loss per share for each catalogue strategy.

use super::strategy::Strategy;

#[inline]
fn call(s: f64, k: f64) -> f64 {
    (s - k).max(0.0)
}

#[inline]
fn put(s: f64, k: f64) -> f64 {
    (k - s).max(0.0)
}

/// Net profit/loss per share at terminal price `price`, before quantity
/// and contract-multiplier scaling.
///
/// # Examples
/// ```
/// use payoff_models::instruments::LegQuote;
/// use payoff_models::strategies::{payoff_at, Strategy};
///
/// let long_call = Strategy::LongCall(LegQuote::new(100.0, 5.0));
/// assert_eq!(payoff_at(&long_call, 90.0), -5.0);
/// assert_eq!(payoff_at(&long_call, 112.0), 7.0);
/// ```
pub fn payoff_at(strategy: &Strategy, price: f64) -> f64 {
    let s = price;
    match *strategy {
        Strategy::LongCall(q) => call(s, q.strike) - q.premium,
        Strategy::LongPut(q) => put(s, q.strike) - q.premium,
        Strategy::ShortCall(q) => q.premium - call(s, q.strike),
        Strategy::ShortPut(q) => q.premium - put(s, q.strike),
        Strategy::BullCallSpread { long, short } => {
            call(s, long.strike) - call(s, short.strike) - (long.premium - short.premium)
        }
        Strategy::BearPutSpread { long, short } => {
            put(s, long.strike) - put(s, short.strike) - (long.premium - short.premium)
        }
        Strategy::IronCondor {
            long_put,
            short_put,
            short_call,
            long_call,
        } => {
            let credit =
                (short_put.premium + short_call.premium) - (long_put.premium + long_call.premium);
            put(s, long_put.strike) - put(s, short_put.strike) - call(s, short_call.strike)
                + call(s, long_call.strike)
                + credit
        }
        Strategy::LongStraddle {
            strike,
            call_premium,
            put_premium,
        } => call(s, strike) + put(s, strike) - (call_premium + put_premium),
        Strategy::LongStrangle { put: p, call: c } => {
            call(s, c.strike) + put(s, p.strike) - (p.premium + c.premium)
        }
        Strategy::LongButterfly {
            lower,
            middle,
            upper,
        } => {
            call(s, lower.strike) - 2.0 * call(s, middle.strike) + call(s, upper.strike)
                - (lower.premium - 2.0 * middle.premium + upper.premium)
        }
    }
}
