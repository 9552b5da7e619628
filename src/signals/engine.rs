//! Signal engine: maps market snapshots to display-ready records.

use std::sync::Arc;

use crate::models::market::MarketSnapshot;
use crate::models::signal::{SignalRecord, TrendLabel};
use crate::signals::decision::{decide, RuleInputs};
use crate::signals::format::format_volume;
use crate::signals::noise::{NoiseSource, ThreadRngNoise};
use crate::signals::scoring;

pub const SUPPORT_OFFSET: f64 = 0.95;
pub const RESISTANCE_OFFSET: f64 = 1.05;

pub struct SignalEngine {
    noise: Arc<dyn NoiseSource>,
}

impl SignalEngine {
    pub fn new() -> Self {
        Self::with_noise(Arc::new(ThreadRngNoise))
    }

    /// Build an engine with a custom noise source (tests pin it).
    pub fn with_noise(noise: Arc<dyn NoiseSource>) -> Self {
        Self { noise }
    }

    /// Derive one signal record from a snapshot.
    ///
    /// The decision logic consumes the unrounded RSI; only the stored
    /// display value is rounded to an integer.
    pub fn evaluate(&self, snapshot: &MarketSnapshot) -> SignalRecord {
        let change = snapshot.price_change_percentage_24h;
        let price = snapshot.current_price;

        let rsi = scoring::synthetic_rsi(
            change,
            snapshot.total_volume,
            snapshot.market_cap,
            self.noise.uniform(-5.0, 5.0),
        );
        let macd = scoring::macd_label(change, rsi);
        let volume_score = scoring::volume_score(snapshot.total_volume, snapshot.market_cap);
        let trend = scoring::trend_strength(change, rsi, volume_score);

        let inputs = RuleInputs {
            change,
            rsi,
            trend,
            volume_score,
            macd,
        };
        let (signal, confidence) = decide(&inputs, self.noise.as_ref());

        SignalRecord {
            symbol: snapshot.symbol.to_uppercase(),
            name: snapshot.name.clone(),
            price,
            change_24h: change,
            signal,
            confidence,
            rsi: rsi.round(),
            macd,
            volume: format_volume(snapshot.total_volume),
            support: price * SUPPORT_OFFSET,
            resistance: price * RESISTANCE_OFFSET,
            trend: TrendLabel::from_strength(trend),
        }
    }

    /// Score a full listing in order. The result replaces the previous
    /// record list wholesale; there is no per-record merging.
    pub fn evaluate_all(&self, snapshots: &[MarketSnapshot]) -> Vec<SignalRecord> {
        snapshots.iter().map(|s| self.evaluate(s)).collect()
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new()
    }
}
