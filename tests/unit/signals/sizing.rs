//! Unit tests for fixed-fractional position sizing

use signaldesk::models::strategy::TradingStrategy;
use signaldesk::signals::PositionSizer;
use signaldesk::strategies::StrategyRegistry;
use signaldesk::EvaluationError;

fn strategy(id: &str) -> TradingStrategy {
    StrategyRegistry::new().get_strategy_by_id(id).unwrap().clone()
}

#[test]
fn test_vwap_scalping_sizing() {
    // risk 0.5% of 10_000 = 50; stop 0.5% below 100 = 99.5; 50 / 0.5 = 100 units
    let sizing = PositionSizer::size(&strategy("vwap_scalping"), 100.0, 10_000.0).unwrap();
    assert!((sizing.quantity - 100.0).abs() < 1e-6);
    assert_eq!(sizing.stop_loss, 99.5);
    assert_eq!(sizing.take_profit, 101.5);
}

#[test]
fn test_trend_surfing_sizing() {
    // risk 1% of 5_000 = 50; stop 1% below 42_000 = 41_580; 50 / 420
    let sizing = PositionSizer::size(&strategy("trend_surfing"), 42_000.0, 5_000.0).unwrap();
    assert!((sizing.quantity - 0.11904762).abs() < 1e-8);
    assert_eq!(sizing.stop_loss, 41_580.0);
    assert_eq!(sizing.take_profit, 43_260.0);
}

#[test]
fn test_loss_at_stop_equals_risk_budget() {
    let strategy = strategy("breakout_momentum");
    let (price, balance) = (2_345.67, 12_500.0);
    let sizing = PositionSizer::size(&strategy, price, balance).unwrap();

    let stop_price = price * (1.0 - strategy.stop_loss / 100.0);
    let loss = sizing.quantity * (price - stop_price);
    let budget = balance * strategy.risk_percentage / 100.0;
    assert!((loss - budget).abs() < 1e-4, "loss {} vs budget {}", loss, budget);
}

#[test]
fn test_prices_rounded_to_cents() {
    let sizing = PositionSizer::size(&strategy("mean_reversion"), 1.23456, 1_000.0).unwrap();
    assert_eq!(sizing.stop_loss, 1.23);
    assert_eq!(sizing.take_profit, 1.25);
    let scaled = sizing.quantity * 1e8;
    assert!((scaled - scaled.round()).abs() < 1e-3);
}

#[test]
fn test_prices_round_from_stored_value() {
    // 1.0 * 0.995 is stored as 0.99499..., which must not round up to the entry price
    let sizing = PositionSizer::size(&strategy("vwap_scalping"), 1.0, 1_000.0).unwrap();
    assert_eq!(sizing.stop_loss, 0.99);
    assert_eq!(sizing.take_profit, 1.01);
    assert!(sizing.stop_loss < 1.0);

    let sizing = PositionSizer::size(&strategy("trend_surfing"), 1.5, 1_000.0).unwrap();
    assert_eq!(sizing.stop_loss, 1.48);
}

#[test]
fn test_zero_balance_sizes_nothing() {
    let sizing = PositionSizer::size(&strategy("vwap_scalping"), 100.0, 0.0).unwrap();
    assert_eq!(sizing.quantity, 0.0);
}

#[test]
fn test_invalid_price_rejected() {
    let strategy = strategy("vwap_scalping");
    for price in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        let result = PositionSizer::size(&strategy, price, 1_000.0);
        assert!(matches!(result, Err(EvaluationError::InvalidInput(_))), "price {}", price);
    }
}

#[test]
fn test_negative_balance_rejected() {
    let result = PositionSizer::size(&strategy("vwap_scalping"), 100.0, -1.0);
    assert!(matches!(result, Err(EvaluationError::InvalidInput(_))));
}

#[test]
fn test_zero_stop_loss_rejected() {
    let mut strategy = strategy("vwap_scalping");
    strategy.stop_loss = 0.0;
    let result = PositionSizer::size(&strategy, 100.0, 1_000.0);
    assert!(matches!(result, Err(EvaluationError::InvalidInput(_))));
}
