//! Coinpulse signal engine
//!
//! Polls a public market-data endpoint on a fixed interval, derives a set of
//! pseudo-technical signals per asset, and serves the current record list
//! over HTTP. The record list is replaced in full on every successful poll.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
