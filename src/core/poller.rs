//! Periodic poll loop owning the shared signal board

use crate::services::market_data::MarketDataProvider;
use crate::signals::engine::SignalEngine;
use crate::models::signal::SignalRecord;
use chrono::Local;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{error, info};

/// Shared display state, replaced in one write per successful poll.
#[derive(Debug, Clone, Serialize)]
pub struct SignalBoard {
    pub signals: Vec<SignalRecord>,
    pub last_update: Option<String>,
    pub loading: bool,
}

impl Default for SignalBoard {
    fn default() -> Self {
        Self {
            signals: Vec::new(),
            last_update: None,
            // Shown until the first poll completes, success or not
            loading: true,
        }
    }
}

/// Recurring poll task: fetch the listing, score it, replace the board.
///
/// There is no overlap guard. A fetch outlasting the interval races the
/// next tick and the later-completing cycle wins the single board write;
/// completion order is the only ordering guarantee.
pub struct SignalPoller {
    provider: Arc<dyn MarketDataProvider>,
    engine: Arc<SignalEngine>,
    board: Arc<RwLock<SignalBoard>>,
    interval: Duration,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl SignalPoller {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        engine: Arc<SignalEngine>,
        interval: Duration,
    ) -> Self {
        Self {
            provider,
            engine,
            board: Arc::new(RwLock::new(SignalBoard::default())),
            interval,
            handle: Arc::new(RwLock::new(None)),
        }
    }

    /// Handle to the shared board, for the HTTP layer.
    pub fn board(&self) -> Arc<RwLock<SignalBoard>> {
        self.board.clone()
    }

    /// Run exactly one poll cycle.
    pub async fn run_once(&self) {
        run_cycle(&self.provider, &self.engine, &self.board).await;
    }

    /// Start the recurring task. The first cycle runs immediately, then one
    /// per interval.
    pub async fn start(&self) {
        let provider = self.provider.clone();
        let engine = self.engine.clone();
        let board = self.board.clone();
        let interval = self.interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                run_cycle(&provider, &engine, &board).await;
            }
        });

        {
            let mut h = self.handle.write().await;
            *h = Some(handle);
        }

        info!(
            interval_seconds = self.interval.as_secs(),
            "SignalPoller: started with {}s interval",
            self.interval.as_secs()
        );
    }

    /// Stop the recurring task. Future ticks stop firing; an in-flight
    /// fetch is not awaited.
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("SignalPoller: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}

/// One poll cycle. On failure the previous records stay in place and only
/// the loading flag is cleared; the next tick is the only retry.
async fn run_cycle(
    provider: &Arc<dyn MarketDataProvider>,
    engine: &Arc<SignalEngine>,
    board: &Arc<RwLock<SignalBoard>>,
) {
    match provider.fetch_markets().await {
        Ok(snapshots) => {
            let signals = engine.evaluate_all(&snapshots);
            let timestamp = Local::now().format("%H:%M:%S").to_string();

            let mut board = board.write().await;
            board.signals = signals;
            board.last_update = Some(timestamp);
            board.loading = false;

            info!(
                count = board.signals.len(),
                "poll cycle complete: {} signals refreshed",
                board.signals.len()
            );
        }
        Err(e) => {
            error!(error = %e, "poll cycle failed, keeping previous signals");
            let mut board = board.write().await;
            board.loading = false;
        }
    }
}
