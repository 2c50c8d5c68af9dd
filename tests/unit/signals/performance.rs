//! Unit tests for trade performance statistics

use signaldesk::signals::{equity_curve, PerformanceReport, DEFAULT_RISK_FREE_RATE};
use signaldesk::EvaluationError;

#[test]
fn test_mixed_trades_report() {
    let profits = [100.0, -50.0, 200.0, -100.0];
    let report = PerformanceReport::compute(1_000.0, &profits).unwrap();

    assert_eq!(report.total_trades, 4);
    assert_eq!(report.winning_trades, 2);
    assert_eq!(report.losing_trades, 2);
    assert_eq!(report.win_rate, 0.5);
    assert_eq!(report.average_win, 150.0);
    assert_eq!(report.average_loss, -75.0);
    assert_eq!(report.profit_factor, Some(2.0));
    assert_eq!(report.total_profit, 150.0);
    // equity 1000, 1100, 1050, 1250, 1150
    assert_eq!(report.max_drawdown, 100.0);
}

#[test]
fn test_sharpe_uses_sample_deviation_of_excess_returns() {
    let profits = [100.0, -50.0, 200.0, -100.0];
    let report = PerformanceReport::compute(1_000.0, &profits).unwrap();

    let excess_mean = 37.5 - DEFAULT_RISK_FREE_RATE / 252.0;
    // sum of squared deviations from 37.5 is 56_875
    let sample_std = (56_875.0_f64 / 3.0).sqrt();
    let expected = 252.0_f64.sqrt() * excess_mean / sample_std;
    assert!((report.sharpe_ratio - expected).abs() < 1e-9);
}

#[test]
fn test_no_losses_has_no_profit_factor() {
    let report = PerformanceReport::compute(500.0, &[10.0, 20.0]).unwrap();
    assert_eq!(report.profit_factor, None);
    assert_eq!(report.average_loss, 0.0);
    assert_eq!(report.max_drawdown, 0.0);
    assert_eq!(report.win_rate, 1.0);
}

#[test]
fn test_breakeven_trades_count_as_neither() {
    let report = PerformanceReport::compute(500.0, &[0.0, -25.0]).unwrap();
    assert_eq!(report.winning_trades, 0);
    assert_eq!(report.losing_trades, 1);
    assert_eq!(report.profit_factor, Some(0.0));
}

#[test]
fn test_drawdown_follows_equity_curve() {
    let profits = [-200.0, 50.0, -100.0];
    assert_eq!(equity_curve(1_000.0, &profits), vec![1_000.0, 800.0, 850.0, 750.0]);

    let report = PerformanceReport::compute(1_000.0, &profits).unwrap();
    assert_eq!(report.max_drawdown, 250.0);
}

#[test]
fn test_empty_trade_list_rejected() {
    let result = PerformanceReport::compute(1_000.0, &[]);
    assert!(matches!(result, Err(EvaluationError::InvalidInput(_))));
}

#[test]
fn test_non_finite_profit_rejected() {
    let result = PerformanceReport::compute(1_000.0, &[10.0, f64::NAN]);
    assert!(matches!(result, Err(EvaluationError::InvalidInput(_))));
}
