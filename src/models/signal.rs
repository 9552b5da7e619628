//! Derived signal records

use serde::{Deserialize, Serialize};

/// Categorical trade signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

/// Coarse MACD state label (not a real MACD value)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MacdLabel {
    Bullish,
    Bearish,
    Neutral,
}

/// Trend band derived from the trend-strength score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendLabel {
    #[serde(rename = "Strong Bullish")]
    StrongBullish,
    Bullish,
    Bearish,
    #[serde(rename = "Strong Bearish")]
    StrongBearish,
}

impl TrendLabel {
    /// Map a trend-strength score to its band.
    ///
    /// The comparison chain is deliberate: exactly 60 is not > 60 so it
    /// falls to "Bullish", and exactly 30 or 40 land in "Bearish".
    pub fn from_strength(trend: f64) -> Self {
        if trend > 60.0 {
            TrendLabel::StrongBullish
        } else if trend > 40.0 {
            TrendLabel::Bullish
        } else if trend < 30.0 {
            TrendLabel::StrongBearish
        } else {
            TrendLabel::Bearish
        }
    }
}

/// One display-ready signal row, derived from a market snapshot.
///
/// `support` and `resistance` are fixed +/-5% offsets from the current
/// price, never stored independently. `rsi` holds the display-rounded
/// value; the decision logic consumes the unrounded score upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalRecord {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_24h: f64,
    pub signal: Signal,
    pub confidence: f64,
    pub rsi: f64,
    pub macd: MacdLabel,
    pub volume: String,
    pub support: f64,
    pub resistance: f64,
    pub trend: TrendLabel,
}
