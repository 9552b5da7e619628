//! Coinpulse Server
//!
//! Polls the market-data endpoint on a fixed interval and serves the
//! derived signal board over HTTP.

use coinpulse::config::Config;
use coinpulse::core::http::start_server;
use coinpulse::core::poller::SignalPoller;
use coinpulse::logging;
use coinpulse::services::market_data::CoinGeckoProvider;
use coinpulse::signals::engine::SignalEngine;
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Initialize logging based on environment
    logging::init_logging();

    let config = Config::from_env();
    let env = coinpulse::config::get_environment();
    info!("Starting Coinpulse Server");
    info!(environment = %env, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);
    info!(
        interval_seconds = config.poll_interval.as_secs(),
        "Signal refresh: every {} seconds",
        config.poll_interval.as_secs()
    );

    let provider = Arc::new(CoinGeckoProvider::new(&config));
    let engine = Arc::new(SignalEngine::new());
    let poller = SignalPoller::new(provider, engine, config.poll_interval);

    poller.start().await;

    let board = poller.board();
    let port = config.port;
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, board).await {
            error!(error = %e, "HTTP server error");
        }
    });

    // Graceful shutdown: tear the poller down so no further fetches fire
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down...");
            poller.stop().await;
            info!("Server stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
            poller.stop().await;
        }
    }

    Ok(())
}
