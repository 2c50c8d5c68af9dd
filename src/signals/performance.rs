//! Trade performance statistics
//!
//! Pure functions over a list of closed-trade profits and the equity curve
//! they produce from a starting balance.

use serde::{Deserialize, Serialize};

use crate::error::{EvaluationError, Result};
use crate::signals::scoring::mean;

/// Annual risk-free rate used by [`sharpe_ratio`] in [`PerformanceReport::compute`]
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.02;
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    /// Fraction of trades with a positive profit, in `[0, 1]`
    pub win_rate: f64,
    pub average_win: f64,
    /// Mean of the losing trades; negative or zero
    pub average_loss: f64,
    /// Gross profit over gross loss; `None` when nothing lost
    pub profit_factor: Option<f64>,
    pub total_profit: f64,
    /// Largest peak-to-trough fall of the equity curve, in account currency
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
}

impl PerformanceReport {
    pub fn compute(initial_capital: f64, profits: &[f64]) -> Result<Self> {
        if profits.is_empty() {
            return Err(EvaluationError::invalid_input(
                "performance needs at least one closed trade",
            ));
        }
        if !initial_capital.is_finite() || profits.iter().any(|p| !p.is_finite()) {
            return Err(EvaluationError::invalid_input(
                "capital and trade profits must be finite",
            ));
        }

        let wins: Vec<f64> = profits.iter().copied().filter(|p| *p > 0.0).collect();
        let losses: Vec<f64> = profits.iter().copied().filter(|p| *p < 0.0).collect();
        let gross_profit: f64 = wins.iter().sum();
        let gross_loss: f64 = losses.iter().sum();

        let profit_factor = if losses.is_empty() {
            None
        } else {
            Some((gross_profit / gross_loss).abs())
        };

        Ok(Self {
            total_trades: profits.len(),
            winning_trades: wins.len(),
            losing_trades: losses.len(),
            win_rate: wins.len() as f64 / profits.len() as f64,
            average_win: mean(wins.iter().copied()).unwrap_or(0.0),
            average_loss: mean(losses.iter().copied()).unwrap_or(0.0),
            profit_factor,
            total_profit: profits.iter().sum(),
            max_drawdown: max_drawdown(&equity_curve(initial_capital, profits)),
            sharpe_ratio: sharpe_ratio(profits, DEFAULT_RISK_FREE_RATE),
        })
    }
}

/// Running balance: the starting capital followed by the balance after each trade
pub fn equity_curve(initial_capital: f64, profits: &[f64]) -> Vec<f64> {
    let mut equity = initial_capital;
    let mut curve = Vec::with_capacity(profits.len() + 1);
    curve.push(equity);
    for profit in profits {
        equity += profit;
        curve.push(equity);
    }
    curve
}

/// Largest drop from a running peak, as a non-negative amount
pub fn max_drawdown(equity_curve: &[f64]) -> f64 {
    let Some(&first) = equity_curve.first() else {
        return 0.0;
    };
    let mut peak = first;
    let mut max_dd = 0.0_f64;
    for &equity in equity_curve {
        peak = peak.max(equity);
        max_dd = max_dd.max(peak - equity);
    }
    max_dd
}

/// Annualized Sharpe ratio of per-trade profits over a daily risk-free rate.
///
/// Zero with fewer than two trades or no variation.
pub fn sharpe_ratio(profits: &[f64], risk_free_rate: f64) -> f64 {
    if profits.len() < 2 {
        return 0.0;
    }
    let daily_rate = risk_free_rate / TRADING_DAYS_PER_YEAR;
    let excess: Vec<f64> = profits.iter().map(|p| p - daily_rate).collect();
    let Some(average) = mean(excess.iter().copied()) else {
        return 0.0;
    };
    let variance =
        excess.iter().map(|r| (r - average).powi(2)).sum::<f64>() / (excess.len() - 1) as f64;
    let std_dev = variance.sqrt();
    if std_dev == 0.0 {
        return 0.0;
    }
    TRADING_DAYS_PER_YEAR.sqrt() * average / std_dev
}
