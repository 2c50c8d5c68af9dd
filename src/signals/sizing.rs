//! Fixed-fractional position sizing
//!
//! A stopped-out trade loses at most `balance * risk_percentage / 100`,
//! whatever the strategy's stop-loss width.

use crate::error::{EvaluationError, Result};
use crate::models::signal::PositionSizing;
use crate::models::strategy::TradingStrategy;
use crate::signals::scoring::round_to;

pub const QUANTITY_DECIMALS: u32 = 8;
pub const PRICE_DECIMALS: u32 = 2;

pub struct PositionSizer;

impl PositionSizer {
    pub fn size(strategy: &TradingStrategy, price: f64, balance: f64) -> Result<PositionSizing> {
        if !price.is_finite() || price <= 0.0 {
            return Err(EvaluationError::invalid_input(format!(
                "entry price must be positive, got {}",
                price
            )));
        }
        if !balance.is_finite() || balance < 0.0 {
            return Err(EvaluationError::invalid_input(format!(
                "balance must be non-negative, got {}",
                balance
            )));
        }

        let risk_amount = balance * (strategy.risk_percentage / 100.0);
        let stop_loss_price = price * (1.0 - strategy.stop_loss / 100.0);
        let take_profit_price = price * (1.0 + strategy.take_profit / 100.0);

        let risk_per_unit = price - stop_loss_price;
        if risk_per_unit <= 0.0 {
            return Err(EvaluationError::invalid_input(format!(
                "strategy {} has no stop-loss distance (stop_loss = {}%)",
                strategy.id, strategy.stop_loss
            )));
        }
        let quantity = risk_amount / risk_per_unit;

        Ok(PositionSizing {
            quantity: round_to(quantity, QUANTITY_DECIMALS),
            stop_loss: round_to(stop_loss_price, PRICE_DECIMALS),
            take_profit: round_to(take_profit_price, PRICE_DECIMALS),
        })
    }
}
