//! Unit tests for price alerts

use signaldesk::models::market::MarketSnapshot;
use signaldesk::signals::{triggered_alerts, AlertCondition, Comparison, PriceAlert};

fn alert(id: &str, symbol: &str, condition: &str) -> PriceAlert {
    PriceAlert {
        id: id.to_string(),
        symbol: symbol.to_string(),
        condition: condition.parse().unwrap(),
        message: format!("{} hit", condition),
    }
}

#[test]
fn test_parses_each_comparison() {
    let cases = [
        ("close >= 105", Comparison::AtOrAbove),
        ("close <= 95.5", Comparison::AtOrBelow),
        ("price > 100", Comparison::Above),
        ("< 90", Comparison::Below),
    ];
    for (text, expected) in cases {
        let condition: AlertCondition = text.parse().unwrap();
        assert_eq!(condition.comparison, expected, "{}", text);
    }
    let condition: AlertCondition = "close <= 95.5".parse().unwrap();
    assert_eq!(condition.threshold, 95.5);
}

#[test]
fn test_threshold_boundaries() {
    let at_or_above: AlertCondition = "close >= 100".parse().unwrap();
    let above: AlertCondition = "close > 100".parse().unwrap();
    let at_or_below: AlertCondition = "close <= 100".parse().unwrap();
    let below: AlertCondition = "close < 100".parse().unwrap();

    assert!(at_or_above.is_met(100.0));
    assert!(!above.is_met(100.0));
    assert!(above.is_met(100.01));
    assert!(at_or_below.is_met(100.0));
    assert!(!below.is_met(100.0));
    assert!(below.is_met(99.99));
}

#[test]
fn test_triggers_only_matching_symbol_and_condition() {
    let alerts = vec![
        alert("a1", "BTC/USD", "close >= 100"),
        alert("a2", "BTC/USD", "close < 50"),
        alert("a3", "ETH/USD", "close >= 1"),
        alert("a4", "BTC/USD", "close > 101"),
    ];
    let snapshot = MarketSnapshot::new("BTC/USD", 101.5, 10.0);

    let triggered = triggered_alerts(&alerts, &snapshot);
    let ids: Vec<&str> = triggered.iter().map(|t| t.alert_id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a4"]);
    assert_eq!(triggered[0].price, 101.5);
    assert_eq!(triggered[0].message, "close >= 100 hit");
}

#[test]
fn test_alert_deserializes_condition_text() {
    let json = r#"{"id":"a1","symbol":"BTC/USD","condition":"close <= 42000"}"#;
    let alert: PriceAlert = serde_json::from_str(json).unwrap();
    assert_eq!(alert.condition, AlertCondition::new(Comparison::AtOrBelow, 42_000.0));
    assert!(alert.message.is_empty());

    let bad = r#"{"id":"a1","symbol":"BTC/USD","condition":"close ~ 42000"}"#;
    assert!(serde_json::from_str::<PriceAlert>(bad).is_err());
}
