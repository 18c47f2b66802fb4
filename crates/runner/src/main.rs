//! Demo bootstrap for the ladder feed
//!
//! Runs the closed demo loop (simulator -> stub exchange -> book view) and
//! logs the top of book as it evolves. Presentation proper is just another
//! render callback; this binary is only the wiring.

use ladder_runner::{ContextConfig, FeedContext};
use log::info;
use std::time::Duration;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut context = FeedContext::new(ContextConfig::default());

    context.add_render_callback(|model| {
        let best_bid = model
            .best_bid()
            .map(|row| row.price.to_string())
            .unwrap_or_else(|| "-".to_string());
        let best_ask = model
            .best_ask()
            .map(|row| row.price.to_string())
            .unwrap_or_else(|| "-".to_string());
        let spread = model
            .spread
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());

        info!(
            "book {} x {} (spread {}, {} bid / {} ask levels)",
            best_bid,
            best_ask,
            spread,
            model.bids.len(),
            model.asks.len()
        );
    });

    context.add_trade_callback(|trade| {
        info!("trade {} x {}", trade.price_cents, trade.quantity);
    });

    let running = context.start_demo();
    tokio::time::sleep(Duration::from_secs(5)).await;

    info!("Demo complete, last price {}", running.last_price());
    running.shutdown();
}
