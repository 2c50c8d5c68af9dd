//! Unit tests for the in-memory market data provider

use signaldesk::models::market::MarketSnapshot;
use signaldesk::services::{InMemoryMarketData, MarketDataProvider};
use signaldesk::EvaluationError;

#[tokio::test]
async fn test_publish_then_snapshot() {
    let provider = InMemoryMarketData::new();
    provider
        .publish(MarketSnapshot::new("SOL/USD", 150.0, 900.0).with_indicator("vwap", 148.0))
        .await
        .unwrap();

    let snapshot = provider.snapshot("SOL/USD").await.unwrap();
    assert_eq!(snapshot.price, 150.0);
    assert_eq!(snapshot.indicators["vwap"], 148.0);
}

#[tokio::test]
async fn test_publish_replaces_previous_snapshot() {
    let provider = InMemoryMarketData::new();
    provider.publish(MarketSnapshot::new("BTC/USD", 100.0, 1.0)).await.unwrap();
    provider.publish(MarketSnapshot::new("BTC/USD", 101.0, 2.0)).await.unwrap();
    provider.publish(MarketSnapshot::new("ADA/USD", 0.5, 2.0)).await.unwrap();

    assert_eq!(provider.snapshot("BTC/USD").await.unwrap().price, 101.0);
    assert_eq!(provider.symbols().await, vec!["ADA/USD", "BTC/USD"]);
}

#[tokio::test]
async fn test_unknown_symbol() {
    let provider = InMemoryMarketData::new();
    let result = provider.snapshot("DOGE/USD").await;
    assert!(matches!(result, Err(EvaluationError::MarketDataUnavailable(_))));
}

#[tokio::test]
async fn test_non_positive_price_rejected() {
    let provider = InMemoryMarketData::new();
    let result = provider.publish(MarketSnapshot::new("BTC/USD", 0.0, 1.0)).await;
    assert!(matches!(result, Err(EvaluationError::InvalidInput(_))));
}
