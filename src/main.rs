use signaldesk::models::market::{MarketSnapshot, AVERAGE_VOLUME, LOWER_BB, UPPER_BB, VWAP};
use signaldesk::models::signal::Evaluation;
use signaldesk::signals::SignalEngine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = SignalEngine::default();
    let balance = 10_000.0;

    let above_vwap = MarketSnapshot::new("BTC/USD", 102.0, 2000.0)
        .with_indicator(VWAP, 100.0)
        .with_indicator(AVERAGE_VOLUME, 1000.0);
    println!("Evaluation 1:");
    print_evaluation(&engine.evaluate("vwap_scalping", &above_vwap, Some(balance))?);
    println!();

    let below_vwap = MarketSnapshot::new("BTC/USD", 91.0, 4000.0)
        .with_indicator(VWAP, 100.0)
        .with_indicator(AVERAGE_VOLUME, 1000.0);
    println!("Evaluation 2:");
    print_evaluation(&engine.evaluate("vwap_scalping", &below_vwap, Some(balance))?);
    println!();

    let upper_band = MarketSnapshot::new("ETH/USD", 2495.0, 1500.0)
        .with_indicator(UPPER_BB, 2500.0)
        .with_indicator(LOWER_BB, 2300.0);
    println!("Evaluation 3:");
    print_evaluation(&engine.evaluate("breakout_momentum", &upper_band, Some(balance))?);

    Ok(())
}

fn print_evaluation(evaluation: &Evaluation) {
    println!("  Strategy: {}", evaluation.strategy_id);
    println!("  Symbol: {}", evaluation.symbol);
    println!("  Signal: {}", evaluation.signal.signal);
    println!("  Confidence: {:.1}%", evaluation.signal.confidence);
    println!("  Reasoning:");
    for (i, reason) in evaluation.signal.reasoning.iter().enumerate() {
        println!("    {}. {}", i + 1, reason);
    }
    if let Some(position) = &evaluation.position {
        println!("  Quantity: {:.8}", position.quantity);
        println!("  Stop loss: ${:.2}", position.stop_loss);
        println!("  Take profit: ${:.2}", position.take_profit);
    }
}
