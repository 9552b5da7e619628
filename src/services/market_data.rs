//! Market data provider interface and the CoinGecko implementation

use crate::config::Config;
use crate::models::market::MarketSnapshot;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the current market listing, one snapshot per asset.
    async fn fetch_markets(
        &self,
    ) -> Result<Vec<MarketSnapshot>, Box<dyn std::error::Error + Send + Sync>>;
}

/// CoinGecko `/coins/markets` client.
///
/// The base URL is injectable so tests can point it at a mock server.
pub struct CoinGeckoProvider {
    base_url: String,
    client: reqwest::Client,
    vs_currency: String,
    per_page: u32,
}

impl CoinGeckoProvider {
    pub fn new(config: &Config) -> Self {
        Self::with_client(
            config.coingecko_base_url.clone(),
            reqwest::Client::new(),
            config.vs_currency.clone(),
            config.per_page,
        )
    }

    pub fn with_client(
        base_url: String,
        client: reqwest::Client,
        vs_currency: String,
        per_page: u32,
    ) -> Self {
        Self {
            base_url,
            client,
            vs_currency,
            per_page,
        }
    }
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    async fn fetch_markets(
        &self,
    ) -> Result<Vec<MarketSnapshot>, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/api/v3/coins/markets", self.base_url);
        let per_page = self.per_page.to_string();

        let snapshots = self
            .client
            .get(&url)
            .query(&[
                ("vs_currency", self.vs_currency.as_str()),
                ("order", "market_cap_desc"),
                ("per_page", per_page.as_str()),
                ("page", "1"),
                ("sparkline", "false"),
                ("price_change_percentage", "24h"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<MarketSnapshot>>()
            .await?;

        debug!(
            count = snapshots.len(),
            "fetched {} market snapshots",
            snapshots.len()
        );

        Ok(snapshots)
    }
}
