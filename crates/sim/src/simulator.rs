//! Market data simulator
//!
//! Generates synthetic order submissions on a fixed-period timer. Prices
//! follow a Gaussian random walk centered on the last observed trade price;
//! the trade tracker updates that anchor, closing the demo loop.

use crate::config::FlowConfig;
use crate::gaussian::gaussian_clamped;
use ladder_core::Price;
use ladder_depth::LastPrice;
use ladder_gateway::{ClientMessage, OrderRequest, Publisher};
use log::{debug, info};
use rand::prelude::*;

/// Generation phase
///
/// Seeding runs exactly once, on start: the transition to steady state is
/// immediate and unconditional, not event-driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Emitting the deterministic opening ladder
    Seeding,
    /// Random per-tick order generation, runs until the channel closes
    Steady,
}

/// Timer-driven synthetic order-flow generator
pub struct MarketSimulator {
    config: FlowConfig,
    last_price: LastPrice,
    rng: StdRng,
    phase: Phase,
}

impl MarketSimulator {
    /// Create a simulator reading its price anchor from `last_price`
    pub fn new(config: FlowConfig, last_price: LastPrice) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            last_price,
            rng,
            phase: Phase::Seeding,
        }
    }

    /// Current generation phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The deterministic opening ladder: contiguous buys below the gap,
    /// then contiguous sells above it. No randomness in this phase.
    pub fn seed_orders(&self) -> Vec<OrderRequest> {
        let ladder = &self.config.seed_ladder;
        let security = self.config.security.as_str();

        let buys = (ladder.bid_from.cents()..ladder.bid_until.cents())
            .map(|cents| OrderRequest::buy(security, ladder.size, Price::from_cents(cents)));
        let sells = (ladder.ask_from.cents()..ladder.ask_until.cents())
            .map(|cents| OrderRequest::sell(security, ladder.size, Price::from_cents(cents)));

        buys.chain(sells).collect()
    }

    /// Draw one random order anchored to the last trade price
    pub fn next_order(&mut self) -> OrderRequest {
        let size = gaussian_clamped(&mut self.rng, self.config.size_mean, self.config.size_stdev);

        let anchor = f64::from(self.last_price.get().cents());
        let price = Price::from_cents(gaussian_clamped(
            &mut self.rng,
            anchor,
            self.config.price_stdev_cents,
        ));

        if self.rng.gen_bool(self.config.buy_probability) {
            OrderRequest::buy(self.config.security.as_str(), size, price)
        } else {
            OrderRequest::sell(self.config.security.as_str(), size, price)
        }
    }

    /// Advance the state machine by one timer tick
    pub fn tick(&mut self) -> Vec<OrderRequest> {
        match self.phase {
            Phase::Seeding => {
                self.phase = Phase::Steady;
                self.seed_orders()
            }
            Phase::Steady => vec![self.next_order()],
        }
    }

    /// Drive the timer loop, publishing orders until the channel closes
    ///
    /// Sends are fire-and-forget: the timer fires regardless of channel
    /// saturation, and a closed channel simply ends the loop.
    pub async fn run<P>(mut self, publisher: P)
    where
        P: Publisher<ClientMessage>,
    {
        info!(
            "Order flow simulator started for {} (tick {:?})",
            self.config.security, self.config.tick_interval
        );

        let mut timer = tokio::time::interval(self.config.tick_interval);
        loop {
            timer.tick().await;
            for order in self.tick() {
                let msg = ClientMessage::Order(order);
                if publisher.publish(&msg).await.is_err() {
                    debug!("Order channel closed, stopping simulator");
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladder_gateway::{ChannelPublisher, Subscriber};

    fn simulator(seed: u64) -> MarketSimulator {
        let config = FlowConfig::deterministic(seed);
        let anchor = config.seed_ladder.midpoint();
        MarketSimulator::new(config, LastPrice::new(anchor))
    }

    #[test]
    fn test_seed_ladder_is_deterministic() {
        let sim = simulator(1);
        let orders = sim.seed_orders();

        assert_eq!(orders.len(), 49);

        // First 25 are buys at 100..125, fixed size
        for (i, order) in orders[..25].iter().enumerate() {
            assert!(order.buy);
            assert_eq!(order.price_cents, Price::from_cents(100 + i as u32));
            assert_eq!(order.size, 30);
            assert_eq!(order.security, "AAPL");
        }

        // Next 24 are sells at 126..150, fixed size
        for (i, order) in orders[25..].iter().enumerate() {
            assert!(!order.buy);
            assert_eq!(order.price_cents, Price::from_cents(126 + i as u32));
            assert_eq!(order.size, 30);
        }
    }

    #[test]
    fn test_tick_transitions_seeding_to_steady() {
        let mut sim = simulator(1);
        assert_eq!(sim.phase(), Phase::Seeding);

        let first = sim.tick();
        assert_eq!(first.len(), 49);
        assert_eq!(sim.phase(), Phase::Steady);

        let second = sim.tick();
        assert_eq!(second.len(), 1);
        assert_eq!(sim.phase(), Phase::Steady);
    }

    #[test]
    fn test_same_seed_same_flow() {
        let mut a = simulator(42);
        let mut b = simulator(42);

        for _ in 0..50 {
            assert_eq!(a.next_order(), b.next_order());
        }
    }

    #[test]
    fn test_steady_orders_follow_anchor() {
        let config = FlowConfig::deterministic(42);
        let anchor = LastPrice::new(Price::from_cents(5000));
        let mut sim = MarketSimulator::new(config, anchor.clone());

        let order = sim.next_order();
        // Within a few stdevs of the anchor
        assert!(order.price_cents.diff_cents(Price::from_cents(5000)).abs() < 50);

        // Move the anchor, orders follow
        anchor.set(Price::from_cents(9000));
        let order = sim.next_order();
        assert!(order.price_cents.diff_cents(Price::from_cents(9000)).abs() < 50);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_publishes_ladder_first() {
        let (orders_tx, mut orders_rx) = ChannelPublisher::<ClientMessage>::pair(256);
        let sim = simulator(7);
        let expected = sim.seed_orders();

        tokio::spawn(sim.run(orders_tx));

        for expected_order in expected {
            let ClientMessage::Order(order) = orders_rx.next().await.unwrap();
            assert_eq!(order, expected_order);
        }

        // Steady state keeps producing
        let ClientMessage::Order(_) = orders_rx.next().await.unwrap();
    }
}
