//! Integration tests for the strategy engine.
//!
//! Exercises the public API end to end: reference scenarios for each
//! catalogue entry, leg decomposition against the closed-form payoff, and
//! curve shape.

use approx::assert_relative_eq;
use payoff_models::analytical::{price, MarketParameters};
use payoff_models::instruments::{LegQuote, OptionKind};
use payoff_models::strategies::{
    compute_strategy, payoff_at, Bound, Breakeven, Strategy, StrategyError, StrategyKind,
    StrategySpec,
};
use proptest::prelude::*;

fn market() -> MarketParameters {
    MarketParameters::new(100.0, 0.20, 0.05, 0.0, 30.0 / 365.0).unwrap()
}

fn catalogue() -> Vec<Strategy> {
    let q = LegQuote::new;
    vec![
        Strategy::LongCall(q(100.0, 5.0)),
        Strategy::LongPut(q(100.0, 4.0)),
        Strategy::ShortCall(q(105.0, 2.5)),
        Strategy::ShortPut(q(95.0, 2.0)),
        Strategy::BullCallSpread {
            long: q(100.0, 5.0),
            short: q(110.0, 2.0),
        },
        Strategy::BearPutSpread {
            long: q(110.0, 6.0),
            short: q(100.0, 2.0),
        },
        Strategy::IronCondor {
            long_put: q(90.0, 1.0),
            short_put: q(95.0, 3.0),
            short_call: q(105.0, 3.0),
            long_call: q(110.0, 1.0),
        },
        Strategy::LongStraddle {
            strike: 100.0,
            call_premium: 5.0,
            put_premium: 4.0,
        },
        Strategy::LongStrangle {
            put: q(95.0, 2.0),
            call: q(105.0, 1.5),
        },
        Strategy::LongButterfly {
            lower: q(90.0, 8.0),
            middle: q(100.0, 4.0),
            upper: q(110.0, 1.0),
        },
    ]
}

#[test]
fn test_catalogue_covers_every_kind() {
    let kinds: Vec<StrategyKind> = catalogue().iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, StrategyKind::ALL.to_vec());
}

#[test]
fn test_long_call_scenario() {
    let spec = StrategySpec::new(Strategy::LongCall(LegQuote::new(100.0, 5.0)), 1).unwrap();
    let result = compute_strategy(&spec, &market());

    assert_eq!(result.analytics.breakeven, Breakeven::Single(105.0));
    assert_eq!(result.analytics.max_loss, Bound::Finite(500.0));
    assert_eq!(result.analytics.max_profit, Bound::Unbounded);
    // Black-Scholes value of a 30-day ATM call at 20% vol, 5% rate
    assert_relative_eq!(result.analytics.greeks.price, 2.4934, epsilon = 1e-3);
    assert_relative_eq!(result.analytics.greeks.delta, 0.5400, epsilon = 1e-3);
}

#[test]
fn test_iron_condor_scenario() {
    let spec = StrategySpec::new(catalogue()[6], 1).unwrap();
    let result = compute_strategy(&spec, &market());
    let a = result.analytics;

    assert_eq!(a.max_profit, Bound::Finite(400.0));
    assert_eq!(a.max_loss, Bound::Finite(100.0));
    assert_eq!(
        a.breakeven,
        Breakeven::Range {
            lower: 91.0,
            upper: 109.0
        }
    );
    // Plateau and wings of the sampled curve agree with the limits
    assert_relative_eq!(result.curve.max_profit_loss().unwrap(), 400.0, epsilon = 1e-9);
    assert_relative_eq!(result.curve.min_profit_loss().unwrap(), -100.0, epsilon = 1e-9);
}

#[test]
fn test_butterfly_scenario() {
    let spec = StrategySpec::new(catalogue()[9], 1).unwrap();
    let a = compute_strategy(&spec, &market()).analytics;
    assert_eq!(a.max_profit, Bound::Finite(900.0));
    assert_eq!(a.max_loss, Bound::Finite(100.0));
    assert_eq!(a.breakeven.levels(), vec![91.0, 109.0]);
}

#[test]
fn test_straddle_scenario() {
    let spec = StrategySpec::new(catalogue()[7], 1).unwrap();
    let a = compute_strategy(&spec, &market()).analytics;
    assert_eq!(a.breakeven.levels(), vec![91.0, 109.0]);
    assert_eq!(a.max_loss, Bound::Finite(900.0));
    assert_eq!(a.max_profit, Bound::Unbounded);
}

#[test]
fn test_invalid_iron_condor_rejected_before_curve() {
    let condor = Strategy::IronCondor {
        long_put: LegQuote::new(100.0, 1.0),
        short_put: LegQuote::new(90.0, 3.0),
        short_call: LegQuote::new(105.0, 3.0),
        long_call: LegQuote::new(110.0, 1.0),
    };
    let err = StrategySpec::new(condor, 1).unwrap_err();
    assert_eq!(
        err,
        StrategyError::StrikeOrdering {
            strategy: StrategyKind::IronCondor,
            requirement: "K1 < K2 < K3 < K4",
        }
    );
}

#[test]
fn test_curve_spans_range_for_every_strategy() {
    let m = market();
    for strategy in catalogue() {
        let spec = StrategySpec::new(strategy, 2).unwrap();
        let curve = compute_strategy(&spec, &m).curve;
        let prices = curve.prices();

        assert_eq!(prices.len(), 100, "{}", strategy.name());
        assert_eq!(prices[0], 50.0);
        assert_eq!(prices[99], 150.0);
        assert!(prices.windows(2).all(|w| w[1] > w[0]));
    }
}

#[test]
fn test_finite_limits_bound_the_curve() {
    let m = market();
    for strategy in catalogue() {
        let spec = StrategySpec::new(strategy, 1).unwrap();
        let result = compute_strategy(&spec, &m);
        if let Bound::Finite(max_profit) = result.analytics.max_profit {
            assert!(result.curve.max_profit_loss().unwrap() <= max_profit + 1e-9);
        }
        if let Bound::Finite(max_loss) = result.analytics.max_loss {
            assert!(result.curve.min_profit_loss().unwrap() >= -max_loss - 1e-9);
        }
    }
}

#[test]
fn test_expired_market_gives_intrinsic_greeks() {
    let expired = MarketParameters::new(110.0, 0.2, 0.05, 0.0, 0.0).unwrap();
    let spec = StrategySpec::new(Strategy::LongCall(LegQuote::new(100.0, 5.0)), 1).unwrap();
    let g = compute_strategy(&spec, &expired).analytics.greeks;

    assert_eq!(g.price, 10.0);
    assert_eq!(g.delta, 1.0);
    assert_eq!(g.gamma, 0.0);
    assert_eq!(g.theta, 0.0);
    assert_eq!(g.vega, 0.0);
    assert_eq!(g.rho, 0.0);
}

#[test]
fn test_put_call_parity_through_public_api() {
    let (s, k, t, r, v, q) = (100.0, 95.0, 0.75, 0.03, 0.3, 0.02);
    let call = price(s, k, t, r, v, q, OptionKind::Call).price;
    let put = price(s, k, t, r, v, q, OptionKind::Put).price;
    let forward_gap = s * (-q * t).exp() - k * (-r * t).exp();
    assert!((call - put - forward_gap).abs() < 1e-6);
}

#[cfg(feature = "serde")]
#[test]
fn test_result_serialises_unbounded_as_string() {
    let spec = StrategySpec::new(catalogue()[7], 1).unwrap();
    let result = compute_strategy(&spec, &market());
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["analytics"]["max_profit"], "unbounded");
    assert_eq!(json["analytics"]["max_loss"], 900.0);
    assert_eq!(json["curve"].as_array().unwrap().len(), 100);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_legs_reproduce_payoff(
        index in 0_usize..10,
        quantity in 1_u32..20,
        price in 0.0_f64..300.0,
    ) {
        let strategy = catalogue()[index];
        let from_legs: f64 = strategy
            .legs(quantity)
            .iter()
            .map(|leg| leg.payoff_at(price))
            .sum::<f64>()
            / f64::from(quantity);
        let closed_form = payoff_at(&strategy, price);
        prop_assert!(
            (from_legs - closed_form).abs() < 1e-9,
            "{}: legs {} vs closed form {}",
            strategy.name(),
            from_legs,
            closed_form
        );
    }

    #[test]
    fn test_long_short_call_curves_negate(
        strike in 10.0_f64..200.0,
        premium in 0.0_f64..20.0,
        spot in 10.0_f64..200.0,
    ) {
        let m = MarketParameters::new(spot, 0.2, 0.05, 0.0, 0.1).unwrap();
        let q = LegQuote::new(strike, premium);
        let long = compute_strategy(&StrategySpec::new(Strategy::LongCall(q), 3).unwrap(), &m);
        let short = compute_strategy(&StrategySpec::new(Strategy::ShortCall(q), 3).unwrap(), &m);
        for (l, s) in long.curve.iter().zip(short.curve.iter()) {
            prop_assert_eq!(l.price, s.price);
            prop_assert_eq!(l.profit_loss, -s.profit_loss);
        }
    }
}
