//! Order-flow simulator configuration

use ladder_core::Price;
use std::time::Duration;

/// Bounds of the deterministic opening ladder
///
/// Buys cover `bid_from..bid_until`, sells cover `ask_from..ask_until`;
/// the gap between the two ranges creates the initial spread.
#[derive(Debug, Clone)]
pub struct SeedLadder {
    /// First bid price (inclusive)
    pub bid_from: Price,
    /// One past the highest bid price
    pub bid_until: Price,
    /// First ask price (inclusive)
    pub ask_from: Price,
    /// One past the highest ask price
    pub ask_until: Price,
    /// Fixed size of every seed order
    pub size: u32,
}

impl SeedLadder {
    /// Opening midpoint, used to anchor the random walk before the first
    /// trade arrives
    pub fn midpoint(&self) -> Price {
        Price::from_cents((self.bid_until.cents() + self.ask_from.cents()) / 2)
    }
}

impl Default for SeedLadder {
    fn default() -> Self {
        Self {
            bid_from: Price::from_cents(100),
            bid_until: Price::from_cents(125),
            ask_from: Price::from_cents(126),
            ask_until: Price::from_cents(150),
            size: 30,
        }
    }
}

/// Configuration for the order-flow simulator
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Instrument the flow is generated for
    pub security: String,
    /// Timer period between steady-state orders
    pub tick_interval: Duration,
    /// Stdev of the price walk around the last trade, in cents
    pub price_stdev_cents: f64,
    /// Mean order size
    pub size_mean: f64,
    /// Stdev of order size
    pub size_stdev: f64,
    /// Probability a steady-state order is a buy (0-1)
    pub buy_probability: f64,
    /// Opening ladder emitted in the seeding phase
    pub seed_ladder: SeedLadder,
    /// Random seed (for reproducibility)
    pub seed: Option<u64>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            security: "AAPL".to_string(),
            tick_interval: Duration::from_millis(100),
            price_stdev_cents: 5.0,
            size_mean: 10.0,
            size_stdev: 5.0,
            buy_probability: 0.8,
            seed_ladder: SeedLadder::default(),
            seed: None,
        }
    }
}

impl FlowConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fully reproducible configuration for tests
    pub fn deterministic(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ladder_shape() {
        let ladder = SeedLadder::default();
        assert_eq!(ladder.bid_until.cents() - ladder.bid_from.cents(), 25);
        assert_eq!(ladder.ask_until.cents() - ladder.ask_from.cents(), 24);
        assert_eq!(ladder.midpoint(), Price::from_cents(125));
    }

    #[test]
    fn test_with_seed() {
        let config = FlowConfig::default().with_seed(42);
        assert_eq!(config.seed, Some(42));
    }
}
