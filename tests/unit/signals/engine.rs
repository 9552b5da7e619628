//! Unit tests for the signal engine

use std::sync::Arc;

use coinpulse::models::market::MarketSnapshot;
use coinpulse::models::signal::{MacdLabel, Signal, TrendLabel};
use coinpulse::signals::engine::SignalEngine;
use coinpulse::signals::noise::FixedNoise;

fn snapshot(
    symbol: &str,
    price: f64,
    change: f64,
    volume: f64,
    market_cap: f64,
) -> MarketSnapshot {
    MarketSnapshot {
        symbol: symbol.to_string(),
        name: symbol.to_uppercase(),
        current_price: price,
        price_change_percentage_24h: change,
        total_volume: volume,
        market_cap,
    }
}

fn engine_with_fraction(fraction: f64) -> SignalEngine {
    SignalEngine::with_noise(Arc::new(FixedNoise::new(fraction)))
}

#[test]
fn support_and_resistance_are_fixed_offsets() {
    let engine = engine_with_fraction(0.5);
    let record = engine.evaluate(&snapshot("btc", 100.0, -6.0, 1e7, 1e8));
    assert!((record.support - 95.0).abs() < 1e-9);
    assert!((record.resistance - 105.0).abs() < 1e-9);

    // Offsets do not depend on the signal outcome or the noise draw
    let engine = engine_with_fraction(0.0);
    let record = engine.evaluate(&snapshot("eth", 2000.0, 12.0, 1e9, 1e10));
    assert!((record.support - 1900.0).abs() < 1e-9);
    assert!((record.resistance - 2100.0).abs() < 1e-9);
}

#[test]
fn full_record_with_midpoint_noise() {
    // With the jitter pinned to the midpoint (0 for the rsi term):
    // rsi = 50 + 12 + 20 = 82, macd NEUTRAL (rsi not < 45),
    // volume score caps at 100, trend = 7.2 + 44 + 30 = 81.2,
    // no decision rule matches -> HOLD at 75 + 7.5
    let engine = engine_with_fraction(0.5);
    let record = engine.evaluate(&snapshot("btc", 100.0, -6.0, 1e7, 1e8));

    assert_eq!(record.symbol, "BTC");
    assert_eq!(record.rsi, 82.0);
    assert_eq!(record.macd, MacdLabel::Neutral);
    assert_eq!(record.trend, TrendLabel::StrongBullish);
    assert_eq!(record.signal, Signal::Hold);
    assert_eq!(record.confidence, 82.5);
    assert_eq!(record.volume, "$10.00M");
    assert_eq!(record.change_24h, -6.0);
    assert_eq!(record.price, 100.0);
}

#[test]
fn oversold_snapshot_produces_high_confidence_buy() {
    // A thin-volume asset in a dip: with the noise pinned low the rsi term
    // lands at 34.5, macd reads BULLISH and the trend score clears 60, so
    // the first rule fires with its 95 confidence base.
    let engine = engine_with_fraction(0.0);
    let record = engine.evaluate(&snapshot("dip", 10.0, -4.0, 0.2, 1e8));

    assert_eq!(record.signal, Signal::Buy);
    assert_eq!(record.confidence, 95.0);
    assert_eq!(record.macd, MacdLabel::Bullish);
    assert_eq!(record.trend, TrendLabel::StrongBullish);
    assert!((record.support - 9.5).abs() < 1e-9);
    assert!((record.resistance - 10.5).abs() < 1e-9);
}

#[test]
fn rsi_is_rounded_for_display() {
    // Raw rsi here is 82.0 minus the pinned -5 draw -> 77.0; a fraction of
    // 0.25 gives -2.5 -> 79.5 which rounds to 80
    let engine = engine_with_fraction(0.25);
    let record = engine.evaluate(&snapshot("btc", 100.0, -6.0, 1e7, 1e8));
    assert_eq!(record.rsi, 80.0);
}

#[test]
fn evaluate_all_preserves_listing_order() {
    let engine = engine_with_fraction(0.5);
    let listing = vec![
        snapshot("btc", 43000.0, 1.2, 2.8e10, 8.4e11),
        snapshot("eth", 2300.0, -0.8, 1.2e10, 2.8e11),
        snapshot("sol", 98.0, 4.5, 3.1e9, 4.2e10),
    ];

    let records = engine.evaluate_all(&listing);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].symbol, "BTC");
    assert_eq!(records[1].symbol, "ETH");
    assert_eq!(records[2].symbol, "SOL");
}
