//! Unit tests for signal aggregation

use signaldesk::models::signal::{ConditionSignal, MarketCondition, SignalDecision};
use signaldesk::models::strategy::TradingStrategy;
use signaldesk::signals::SignalAggregator;
use signaldesk::strategies::StrategyRegistry;
use signaldesk::EvaluationError;

fn vwap_strategy() -> TradingStrategy {
    StrategyRegistry::new()
        .get_strategy_by_id("vwap_scalping")
        .unwrap()
        .clone()
}

fn condition(indicator: &str, signal: ConditionSignal, confidence: f64) -> MarketCondition {
    MarketCondition::new(indicator, 0.0, signal, confidence)
}

#[test]
fn test_unanimous_full_confidence_buy() {
    let conditions = vec![
        condition("VWAP", ConditionSignal::Buy, 100.0),
        condition("Volume", ConditionSignal::Buy, 100.0),
    ];
    let signal = SignalAggregator::aggregate(&vwap_strategy(), &conditions).unwrap();
    assert_eq!(signal.signal, SignalDecision::Buy);
    assert_eq!(signal.confidence, 100.0);
}

#[test]
fn test_sell_majority_above_threshold() {
    let conditions = vec![
        condition("VWAP", ConditionSignal::Sell, 90.0),
        condition("BB Position", ConditionSignal::Sell, 80.0),
        condition("Volume", ConditionSignal::Buy, 60.0),
    ];
    let signal = SignalAggregator::aggregate(&vwap_strategy(), &conditions).unwrap();
    assert_eq!(signal.signal, SignalDecision::Sell);
    assert!((signal.confidence - 230.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_tie_always_holds() {
    let conditions = vec![
        condition("VWAP", ConditionSignal::Sell, 100.0),
        condition("Volume", ConditionSignal::Buy, 100.0),
    ];
    let signal = SignalAggregator::aggregate(&vwap_strategy(), &conditions).unwrap();
    assert_eq!(signal.signal, SignalDecision::Hold);
    assert_eq!(signal.confidence, 100.0);
}

#[test]
fn test_threshold_is_strict() {
    let strategy = vwap_strategy();

    let above = [condition("VWAP", ConditionSignal::Buy, 71.0)];
    let above = SignalAggregator::aggregate(&strategy, &above).unwrap();
    assert_eq!(above.signal, SignalDecision::Buy);

    let at = [condition("VWAP", ConditionSignal::Buy, 70.0)];
    let at = SignalAggregator::aggregate(&strategy, &at).unwrap();
    assert_eq!(at.signal, SignalDecision::Hold);
    assert_eq!(at.confidence, 70.0);
}

#[test]
fn test_neutral_conditions_dilute_confidence() {
    let conditions = vec![
        condition("VWAP", ConditionSignal::Buy, 90.0),
        condition("Volume", ConditionSignal::Neutral, 40.0),
    ];
    let signal = SignalAggregator::aggregate(&vwap_strategy(), &conditions).unwrap();
    assert_eq!(signal.signal, SignalDecision::Hold);
    assert_eq!(signal.confidence, 65.0);
}

#[test]
fn test_all_neutral_holds() {
    let conditions = vec![condition("BB Position", ConditionSignal::Neutral, 95.0)];
    let signal = SignalAggregator::aggregate(&vwap_strategy(), &conditions).unwrap();
    assert_eq!(signal.signal, SignalDecision::Hold);
}

#[test]
fn test_reasoning_format_and_order() {
    let conditions = vec![
        MarketCondition::new("VWAP", 2.0, ConditionSignal::Sell, 20.0),
        MarketCondition::new("Volume", 2.0, ConditionSignal::Buy, 40.0),
        MarketCondition::new("BB Position", 0.5, ConditionSignal::Neutral, 33.333),
    ];
    let signal = SignalAggregator::aggregate(&vwap_strategy(), &conditions).unwrap();
    assert_eq!(
        signal.reasoning,
        vec![
            "VWAP: SELL (20.0% confidence)",
            "Volume: BUY (40.0% confidence)",
            "BB Position: NEUTRAL (33.3% confidence)",
        ]
    );
}

#[test]
fn test_empty_conditions_rejected() {
    let result = SignalAggregator::aggregate(&vwap_strategy(), &[]);
    assert!(matches!(result, Err(EvaluationError::InvalidInput(_))));
}
