//! Built-in strategy catalog seeded at startup

use std::collections::BTreeMap;

use crate::models::strategy::{ParameterValue, StrategyType, TradingStrategy};

pub const VWAP_SCALPING: &str = "vwap_scalping";
pub const BREAKOUT_MOMENTUM: &str = "breakout_momentum";
pub const MEAN_REVERSION: &str = "mean_reversion";
pub const ORDERBOOK_SCALPING: &str = "orderbook_scalping";
pub const TREND_SURFING: &str = "trend_surfing";

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn params(items: &[(&str, ParameterValue)]) -> BTreeMap<String, ParameterValue> {
    items
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

pub fn default_strategies() -> Vec<TradingStrategy> {
    vec![
        TradingStrategy {
            id: VWAP_SCALPING.to_string(),
            name: "VWAP Scalping".to_string(),
            description: "Scalp trades using VWAP as a dynamic support/resistance level with volume confirmation".to_string(),
            strategy_type: StrategyType::Scalping,
            timeframe: "5m".to_string(),
            indicators: lines(&["VWAP", "Volume", "RSI"]),
            entry_conditions: lines(&[
                "Price crosses above/below VWAP",
                "Volume spike confirms direction",
                "RSI not in extreme territory",
            ]),
            exit_conditions: lines(&[
                "Price moves X% in profit",
                "Price returns to VWAP",
                "Volume momentum decreases",
            ]),
            risk_percentage: 0.5,
            take_profit: 1.5,
            stop_loss: 0.5,
            parameters: params(&[
                ("vwap_period", "1d".into()),
                ("volume_threshold", ParameterValue::Number(1.5)),
                ("rsi_period", ParameterValue::Number(14.0)),
                ("rsi_overbought", ParameterValue::Number(70.0)),
                ("rsi_oversold", ParameterValue::Number(30.0)),
            ]),
        },
        TradingStrategy {
            id: BREAKOUT_MOMENTUM.to_string(),
            name: "Breakout Momentum Scalping".to_string(),
            description: "Capture explosive moves during high-momentum breakouts with volume confirmation".to_string(),
            strategy_type: StrategyType::Scalping,
            timeframe: "1m".to_string(),
            indicators: lines(&["Bollinger Bands", "Volume", "Momentum"]),
            entry_conditions: lines(&[
                "Price breaks out of Bollinger Bands",
                "Strong volume surge",
                "Momentum indicator confirms direction",
            ]),
            exit_conditions: lines(&[
                "Price reaches next resistance/support",
                "Volume decreases significantly",
                "Momentum weakens",
            ]),
            risk_percentage: 0.75,
            take_profit: 2.0,
            stop_loss: 0.75,
            parameters: params(&[
                ("bb_period", ParameterValue::Number(20.0)),
                ("bb_std", ParameterValue::Number(2.0)),
                ("volume_surge_threshold", ParameterValue::Number(2.0)),
                ("momentum_period", ParameterValue::Number(10.0)),
            ]),
        },
        TradingStrategy {
            id: MEAN_REVERSION.to_string(),
            name: "Mean Reversion Scalping".to_string(),
            description: "Profit from price returning to moving average after extreme deviations".to_string(),
            strategy_type: StrategyType::Scalping,
            timeframe: "3m".to_string(),
            indicators: lines(&["EMA", "Stochastic", "ATR"]),
            entry_conditions: lines(&[
                "Price deviates significantly from EMA",
                "Stochastic shows oversold/overbought",
                "ATR indicates normal volatility",
            ]),
            exit_conditions: lines(&[
                "Price returns to EMA",
                "Stochastic crosses middle line",
                "Profit target reached",
            ]),
            risk_percentage: 0.5,
            take_profit: 1.2,
            stop_loss: 0.4,
            parameters: params(&[
                ("ema_period", ParameterValue::Number(20.0)),
                ("stoch_period", ParameterValue::Number(14.0)),
                ("stoch_overbought", ParameterValue::Number(80.0)),
                ("stoch_oversold", ParameterValue::Number(20.0)),
                ("atr_period", ParameterValue::Number(14.0)),
            ]),
        },
        TradingStrategy {
            id: ORDERBOOK_SCALPING.to_string(),
            name: "Order Book Imbalance Scalping".to_string(),
            description: "Exploit order book imbalances for quick profits".to_string(),
            strategy_type: StrategyType::Scalping,
            timeframe: "1m".to_string(),
            indicators: lines(&["Order Book Depth", "Trade Flow", "Price Action"]),
            entry_conditions: lines(&[
                "Significant order book imbalance",
                "Trade flow supports direction",
                "Price shows momentum",
            ]),
            exit_conditions: lines(&[
                "Order book balance restores",
                "Trade flow momentum decreases",
                "Quick profit target reached",
            ]),
            risk_percentage: 0.3,
            take_profit: 0.8,
            stop_loss: 0.3,
            parameters: params(&[
                ("imbalance_ratio", ParameterValue::Number(3.0)),
                ("depth_levels", ParameterValue::Number(10.0)),
                ("min_order_size", ParameterValue::Number(10000.0)),
            ]),
        },
        TradingStrategy {
            id: TREND_SURFING.to_string(),
            name: "Trend Surfing".to_string(),
            description: "Ride strong intraday trends using multiple timeframe analysis".to_string(),
            strategy_type: StrategyType::DayTrading,
            timeframe: "15m".to_string(),
            indicators: lines(&["Supertrend", "ADX", "Moving Averages"]),
            entry_conditions: lines(&[
                "Higher timeframe trend alignment",
                "ADX shows strong trend",
                "Price pulls back to moving average",
            ]),
            exit_conditions: lines(&[
                "Trend weakness on higher timeframe",
                "ADX drops below threshold",
                "Moving average crossover",
            ]),
            risk_percentage: 1.0,
            take_profit: 3.0,
            stop_loss: 1.0,
            parameters: params(&[
                ("supertrend_period", ParameterValue::Number(10.0)),
                ("supertrend_multiplier", ParameterValue::Number(3.0)),
                ("adx_period", ParameterValue::Number(14.0)),
                ("adx_threshold", ParameterValue::Number(25.0)),
                ("ma_fast", ParameterValue::Number(8.0)),
                ("ma_slow", ParameterValue::Number(21.0)),
            ]),
        },
    ]
}
