//! Environment-based configuration

use std::env;
use std::time::Duration;

/// Get the current environment name ("production", "sandbox", ...)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub port: u16,
    /// Poll period for the market-data endpoint
    pub poll_interval: Duration,
    /// Base URL of the CoinGecko API (overridable for tests)
    pub coingecko_base_url: String,
    /// Quote currency for market listings
    pub vs_currency: String,
    /// Number of assets to fetch per poll (market-cap descending, page 1)
    pub per_page: u32,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let poll_interval_seconds: u64 = env::var("POLL_INTERVAL_SECONDS")
            .ok()
            .and_then(|i| i.parse().ok())
            .unwrap_or(30);

        let coingecko_base_url = env::var("COINGECKO_BASE_URL")
            .unwrap_or_else(|_| "https://api.coingecko.com".to_string());

        let vs_currency = env::var("VS_CURRENCY").unwrap_or_else(|_| "usd".to_string());

        let per_page = env::var("PER_PAGE")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8);

        Self {
            port,
            poll_interval: Duration::from_secs(poll_interval_seconds),
            coingecko_base_url,
            vs_currency,
            per_page,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            poll_interval: Duration::from_secs(30),
            coingecko_base_url: "https://api.coingecko.com".to_string(),
            vs_currency: "usd".to_string(),
            per_page: 8,
        }
    }
}
