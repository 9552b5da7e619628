//! Market listing wire model

use serde::{Deserialize, Deserializer, Serialize};

/// One asset row from the markets listing endpoint.
///
/// Fetched fresh on every poll and discarded after scoring; nothing here is
/// persisted. The 24h change field is nullable upstream and defaults to 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    #[serde(default, deserialize_with = "null_to_zero")]
    pub price_change_percentage_24h: f64,
    pub total_volume: f64,
    pub market_cap: f64,
}

fn null_to_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}
