//! Unit tests for signal model types

use coinpulse::models::signal::{MacdLabel, Signal, TrendLabel};

#[test]
fn trend_label_bands() {
    assert_eq!(TrendLabel::from_strength(75.0), TrendLabel::StrongBullish);
    assert_eq!(TrendLabel::from_strength(50.0), TrendLabel::Bullish);
    assert_eq!(TrendLabel::from_strength(35.0), TrendLabel::Bearish);
    assert_eq!(TrendLabel::from_strength(10.0), TrendLabel::StrongBearish);
}

#[test]
fn trend_label_boundaries_follow_the_comparison_chain() {
    // 60 is not > 60, so it lands in the Bullish band
    assert_eq!(TrendLabel::from_strength(60.0), TrendLabel::Bullish);
    // 40 is not > 40 and not < 30, so it lands in Bearish
    assert_eq!(TrendLabel::from_strength(40.0), TrendLabel::Bearish);
    // 30 is not < 30, so it also lands in Bearish
    assert_eq!(TrendLabel::from_strength(30.0), TrendLabel::Bearish);

    assert_eq!(TrendLabel::from_strength(60.001), TrendLabel::StrongBullish);
    assert_eq!(TrendLabel::from_strength(29.999), TrendLabel::StrongBearish);
}

#[test]
fn labels_serialize_to_display_strings() {
    assert_eq!(serde_json::to_value(Signal::Buy).unwrap(), "BUY");
    assert_eq!(serde_json::to_value(Signal::Sell).unwrap(), "SELL");
    assert_eq!(serde_json::to_value(Signal::Hold).unwrap(), "HOLD");
    assert_eq!(serde_json::to_value(MacdLabel::Bullish).unwrap(), "BULLISH");
    assert_eq!(
        serde_json::to_value(TrendLabel::StrongBullish).unwrap(),
        "Strong Bullish"
    );
    assert_eq!(
        serde_json::to_value(TrendLabel::StrongBearish).unwrap(),
        "Strong Bearish"
    );
}
