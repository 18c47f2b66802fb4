//! Demo exchange stub
//!
//! Stand-in for the external exchange so the demo configuration forms a
//! closed loop: it accepts outbound orders, accumulates resting volume per
//! price per side, fills an order that crosses the opposite best level, and
//! republishes the full depth snapshot after every accepted order.
//!
//! This is a test fixture, not a matching engine: one fill against the best
//! opposite level only, no price-time priority, no order identity, single
//! instrument.

use ladder_core::Price;
use ladder_gateway::{
    ClientMessage, DepthSnapshot, FeedEvent, OrderRequest, Publisher, Subscriber, Trade,
    TransportError,
};
use log::{debug, info};
use std::collections::BTreeMap;

/// Minimal order sink producing `Depths`/`Trade` events
pub struct StubExchange {
    security: String,
    asks: BTreeMap<Price, u32>,
    bids: BTreeMap<Price, u32>,
}

impl StubExchange {
    /// Create an empty book for one instrument
    pub fn new(security: impl Into<String>) -> Self {
        Self {
            security: security.into(),
            asks: BTreeMap::new(),
            bids: BTreeMap::new(),
        }
    }

    /// Apply one order, returning the events it produces (any trade first,
    /// then the full replacement snapshot)
    pub fn apply(&mut self, order: &OrderRequest) -> Vec<FeedEvent> {
        if order.security != self.security {
            debug!("Ignoring order for untraded security {}", order.security);
            return Vec::new();
        }

        let mut events = Vec::new();
        let mut remaining = order.size;

        // Fill against the opposite best level when the order crosses it
        let fill = if order.buy {
            self.asks
                .iter()
                .next()
                .map(|(&price, &volume)| (price, volume))
                .filter(|&(best, _)| order.price_cents >= best)
        } else {
            self.bids
                .iter()
                .next_back()
                .map(|(&price, &volume)| (price, volume))
                .filter(|&(best, _)| order.price_cents <= best)
        };

        if let Some((best, available)) = fill {
            let filled = remaining.min(available);
            if filled > 0 {
                let book = if order.buy { &mut self.asks } else { &mut self.bids };
                if available == filled {
                    book.remove(&best);
                } else {
                    book.insert(best, available - filled);
                }
                remaining -= filled;
                events.push(FeedEvent::Trade(Trade::new(best, filled)));
            }
        }

        // Any remainder rests on the order's own side
        if remaining > 0 {
            let book = if order.buy { &mut self.bids } else { &mut self.asks };
            *book.entry(order.price_cents).or_insert(0) += remaining;
        }

        events.push(FeedEvent::Depths(self.snapshot()));
        events
    }

    /// Full point-in-time copy of the book
    pub fn snapshot(&self) -> DepthSnapshot {
        DepthSnapshot {
            asks: self.asks.clone(),
            bids: self.bids.clone(),
        }
    }

    /// Consume orders and publish feed events until either channel closes
    pub async fn run<S, P>(mut self, mut orders: S, events: P)
    where
        S: Subscriber<ClientMessage>,
        P: Publisher<FeedEvent>,
    {
        info!("Stub exchange started for {}", self.security);

        loop {
            let msg = match orders.next().await {
                Ok(msg) => msg,
                Err(TransportError::ChannelClosed) => break,
                Err(_) => continue,
            };

            let ClientMessage::Order(order) = msg;
            for event in self.apply(&order) {
                if events.publish(&event).await.is_err() {
                    debug!("Feed channel closed, stopping stub exchange");
                    return;
                }
            }
        }
    }
}
