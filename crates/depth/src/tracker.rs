//! Trade tracking - last-price state and trade fan-out

use crate::subscribers::{Subscribers, SubscriptionId};
use ladder_core::Price;
use ladder_gateway::Trade;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Cloneable handle to the last observed trade price
///
/// Written only by the trade tracker, read by the order-flow simulator.
/// The atomic makes the handle safe to read from the simulator's timer task
/// while the dispatch task owns all other state.
#[derive(Debug, Clone)]
pub struct LastPrice(Arc<AtomicU32>);

impl LastPrice {
    /// Create a handle with an initial anchor price
    pub fn new(initial: Price) -> Self {
        Self(Arc::new(AtomicU32::new(initial.cents())))
    }

    /// Current last trade price
    pub fn get(&self) -> Price {
        Price::from_cents(self.0.load(Ordering::SeqCst))
    }

    /// Replace the last trade price
    pub fn set(&self, price: Price) {
        self.0.store(price.cents(), Ordering::SeqCst);
    }
}

/// Consumes trade events: fans them out to subscribers and keeps the
/// last-trade price current
pub struct TradeTracker {
    subscribers: Subscribers<Trade>,
    last_price: LastPrice,
}

impl TradeTracker {
    /// Create a tracker writing to the given last-price handle
    pub fn new(last_price: LastPrice) -> Self {
        Self {
            subscribers: Subscribers::new(),
            last_price,
        }
    }

    /// Register a trade callback; callbacks run in registration order
    pub fn add_trade_callback(
        &mut self,
        callback: impl Fn(&Trade) + Send + 'static,
    ) -> SubscriptionId {
        self.subscribers.add(callback)
    }

    /// Unregister a trade callback
    pub fn remove_trade_callback(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    /// Process one inbound trade
    ///
    /// Subscribers are notified first, then the last price is replaced:
    /// a callback reading [`LastPrice`] observes the pre-update value, and
    /// must read `trade.price_cents` for the price of the trade in hand.
    pub fn on_trade(&self, trade: &Trade) {
        self.subscribers.notify(trade);
        self.last_price.set(trade.price_cents);
    }

    /// Current last trade price
    pub fn last_price(&self) -> Price {
        self.last_price.get()
    }

    /// Clone the shared last-price handle
    pub fn last_price_handle(&self) -> LastPrice {
        self.last_price.clone()
    }
}
