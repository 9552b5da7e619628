//! Shared data models spanning the engine layers.

pub mod market;
pub mod signal;

pub use market::MarketSnapshot;
pub use signal::{MacdLabel, Signal, SignalRecord, TrendLabel};
