//! Closed-form scoring heuristics
//!
//! Every score is derived from two inputs (24h change and volume/market-cap
//! ratio) plus jitter. The caller draws the noise term so these functions
//! stay pure given their arguments.

use crate::models::signal::MacdLabel;

/// Synthetic RSI in `[0, 100]`.
///
/// Negative price moves push the score up (oversold territory), positive
/// moves push it down; the volume/cap ratio adds a log-scaled boost and
/// `noise` is expected to come from a uniform `[-5, 5]` draw.
pub fn synthetic_rsi(change: f64, volume: f64, market_cap: f64, noise: f64) -> f64 {
    let base = 50.0;
    let change_impact = -change * 2.0;
    let volume_boost = (volume / market_cap * 100_000.0).log10() * 5.0;
    (base + change_impact + volume_boost + noise).clamp(0.0, 100.0)
}

/// Coarse MACD state from change and RSI. Pure and deterministic.
pub fn macd_label(change: f64, rsi: f64) -> MacdLabel {
    if change < -2.0 && rsi < 45.0 {
        MacdLabel::Bullish
    } else if change > 3.0 && rsi > 60.0 {
        MacdLabel::Bearish
    } else {
        MacdLabel::Neutral
    }
}

/// Volume-activity score, capped at 100 with a natural floor at 30.
pub fn volume_score(volume: f64, market_cap: f64) -> f64 {
    let ratio = (volume / market_cap) * 100.0;
    (ratio * 20.0 + 30.0).min(100.0)
}

/// Trend-strength score in `[0, 100]`.
///
/// Deterministic given its inputs, but `rsi` carries jitter upstream so the
/// trend score inherits that non-determinism transitively.
pub fn trend_strength(change: f64, rsi: f64, volume_score: f64) -> f64 {
    let score = (100.0 - rsi) * 0.4 + (-change + 5.0) * 4.0 + volume_score * 0.3;
    score.clamp(0.0, 100.0)
}
