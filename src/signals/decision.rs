//! Ordered signal decision list
//!
//! Signals come from an explicit first-match-wins rule list. The rules are
//! not formally disjoint, so their order is part of the contract: an input
//! can satisfy several predicates and the earliest one decides.

use crate::models::signal::{MacdLabel, Signal};
use crate::signals::noise::NoiseSource;

/// Inputs to the decision rules, all derived for one asset.
#[derive(Debug, Clone, Copy)]
pub struct RuleInputs {
    pub change: f64,
    pub rsi: f64,
    pub trend: f64,
    pub volume_score: f64,
    pub macd: MacdLabel,
}

/// One decision rule: a predicate plus the confidence range it awards.
pub struct SignalRule {
    pub matches: fn(&RuleInputs) -> bool,
    pub signal: Signal,
    pub confidence_base: f64,
    pub confidence_spread: f64,
    pub confidence_cap: f64,
}

/// The decision list, evaluated top to bottom. The final HOLD rule always
/// matches.
pub fn rules() -> [SignalRule; 7] {
    [
        SignalRule {
            matches: |i| {
                i.rsi < 35.0 && i.change < -3.0 && i.trend > 60.0 && i.macd == MacdLabel::Bullish
            },
            signal: Signal::Buy,
            confidence_base: 95.0,
            confidence_spread: 5.0,
            confidence_cap: 100.0,
        },
        SignalRule {
            matches: |i| i.rsi > 65.0 && i.change > 5.0 && i.trend < 40.0,
            signal: Signal::Sell,
            confidence_base: 90.0,
            confidence_spread: 10.0,
            confidence_cap: 100.0,
        },
        SignalRule {
            matches: |i| i.rsi < 30.0 && i.change < -5.0,
            signal: Signal::Buy,
            confidence_base: 92.0,
            confidence_spread: 8.0,
            confidence_cap: 100.0,
        },
        SignalRule {
            matches: |i| i.rsi > 70.0 && i.change > 8.0,
            signal: Signal::Sell,
            confidence_base: 88.0,
            confidence_spread: 12.0,
            confidence_cap: 100.0,
        },
        SignalRule {
            matches: |i| i.change < -2.0 && i.rsi < 45.0 && i.volume_score > 50.0,
            signal: Signal::Buy,
            confidence_base: 85.0,
            confidence_spread: 10.0,
            confidence_cap: 100.0,
        },
        SignalRule {
            matches: |i| i.change > 3.0 && i.rsi > 60.0 && i.trend < 50.0,
            signal: Signal::Sell,
            confidence_base: 82.0,
            confidence_spread: 13.0,
            confidence_cap: 100.0,
        },
        SignalRule {
            matches: |_| true,
            signal: Signal::Hold,
            confidence_base: 75.0,
            confidence_spread: 15.0,
            confidence_cap: 95.0,
        },
    ]
}

/// Run the decision list and return the signal with its confidence,
/// rounded to one decimal place.
pub fn decide(inputs: &RuleInputs, noise: &dyn NoiseSource) -> (Signal, f64) {
    for rule in rules() {
        if (rule.matches)(inputs) {
            let confidence = (rule.confidence_base
                + noise.uniform(0.0, rule.confidence_spread))
            .min(rule.confidence_cap);
            return (rule.signal, (confidence * 10.0).round() / 10.0);
        }
    }
    unreachable!("decision list ends with a catch-all rule")
}
