//! Feed context - explicit wiring of the whole feed
//!
//! One context object owns the transport endpoints, the book view, the
//! trade tracker and the simulator configuration. It is constructed once at
//! process start and handed to consumers explicitly; there is no
//! module-level singleton anywhere in the system.

use crate::stub_exchange::StubExchange;
use ladder_core::Price;
use ladder_depth::{
    BookView, LastPrice, RenderModel, Subscribers, SubscriptionId, TradeTracker,
};
use ladder_gateway::{
    ChannelPublisher, ChannelSubscriber, ClientMessage, DepthSnapshot, FeedDispatcher, FeedEvent,
    Subscriber, Trade, TransportError,
};
use ladder_sim::{FlowConfig, MarketSimulator};
use log::debug;
use tokio::task::JoinHandle;

/// Configuration for the feed context
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Order-flow simulator configuration
    pub flow: FlowConfig,
    /// Capacity of every internal channel
    pub channel_capacity: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            flow: FlowConfig::default(),
            channel_capacity: 1024,
        }
    }
}

/// Owns every component of the feed prior to start
///
/// Consumers register callbacks (ordered, independent - registering a second
/// consumer never overwrites the first) and subscribe to typed streams
/// before [`FeedContext::start`] moves the state into its tasks.
pub struct FeedContext {
    config: ContextConfig,
    orders_tx: ChannelPublisher<ClientMessage>,
    orders_rx: ChannelSubscriber<ClientMessage>,
    events_tx: ChannelPublisher<FeedEvent>,
    events_rx: ChannelSubscriber<FeedEvent>,
    depth_tx: ChannelPublisher<DepthSnapshot>,
    depth_rx: ChannelSubscriber<DepthSnapshot>,
    trade_tx: ChannelPublisher<Trade>,
    trade_rx: ChannelSubscriber<Trade>,
    view: BookView,
    tracker: TradeTracker,
    render_subs: Subscribers<RenderModel>,
    last_price: LastPrice,
}

impl FeedContext {
    /// Build the context: channels, book view, trade tracker and the shared
    /// last-price anchor (initialised to the seed-ladder midpoint)
    pub fn new(config: ContextConfig) -> Self {
        let capacity = config.channel_capacity;
        let (orders_tx, orders_rx) = ChannelPublisher::pair(capacity);
        let (events_tx, events_rx) = ChannelPublisher::pair(capacity);
        let (depth_tx, depth_rx) = ChannelPublisher::pair(capacity);
        let (trade_tx, trade_rx) = ChannelPublisher::pair(capacity);

        let last_price = LastPrice::new(config.flow.seed_ladder.midpoint());
        let tracker = TradeTracker::new(last_price.clone());

        Self {
            config,
            orders_tx,
            orders_rx,
            events_tx,
            events_rx,
            depth_tx,
            depth_rx,
            trade_tx,
            trade_rx,
            view: BookView::new(),
            tracker,
            render_subs: Subscribers::new(),
            last_price,
        }
    }

    /// Register a render-model consumer; callbacks run in registration order
    pub fn add_render_callback(
        &mut self,
        callback: impl Fn(&RenderModel) + Send + 'static,
    ) -> SubscriptionId {
        self.render_subs.add(callback)
    }

    /// Unregister a render-model consumer
    pub fn remove_render_callback(&mut self, id: SubscriptionId) -> bool {
        self.render_subs.remove(id)
    }

    /// Register a trade consumer; callbacks run in registration order
    pub fn add_trade_callback(
        &mut self,
        callback: impl Fn(&Trade) + Send + 'static,
    ) -> SubscriptionId {
        self.tracker.add_trade_callback(callback)
    }

    /// Unregister a trade consumer
    pub fn remove_trade_callback(&mut self, id: SubscriptionId) -> bool {
        self.tracker.remove_trade_callback(id)
    }

    /// Clone the shared last-price handle
    pub fn last_price(&self) -> LastPrice {
        self.last_price.clone()
    }

    /// Publisher for inbound feed events - a real exchange adapter pushes
    /// `{"Depths"}` / `{"Trade"}` envelopes here
    pub fn event_publisher(&self) -> ChannelPublisher<FeedEvent> {
        self.events_tx.clone()
    }

    /// Publisher for outbound orders (besides the simulator's own)
    pub fn order_publisher(&self) -> ChannelPublisher<ClientMessage> {
        self.orders_tx.clone()
    }

    /// Subscribe to the outbound order flow - a real exchange adapter
    /// consumes this before `start`
    pub fn subscribe_orders(&self) -> ChannelSubscriber<ClientMessage> {
        self.orders_tx.subscribe()
    }

    /// Typed depth snapshot stream for additional consumers
    pub fn subscribe_depths(&self) -> ChannelSubscriber<DepthSnapshot> {
        self.depth_tx.subscribe()
    }

    /// Typed trade stream for additional consumers
    pub fn subscribe_trades(&self) -> ChannelSubscriber<Trade> {
        self.trade_tx.subscribe()
    }

    /// Spawn the feed tasks: envelope router, depth and trade consumers,
    /// and the simulator timer
    ///
    /// Each piece of mutable state moves into exactly one task; the only
    /// thing shared across tasks is the atomic last price.
    pub fn start(self) -> RunningFeed {
        let mut handles = Vec::new();

        // Router: inbound envelopes -> typed depth/trade channels
        let dispatcher = FeedDispatcher::new(
            Box::new(self.depth_tx.clone()),
            Box::new(self.trade_tx.clone()),
        );
        let mut events_rx = self.events_rx;
        handles.push(tokio::spawn(async move {
            loop {
                match events_rx.next().await {
                    Ok(event) => {
                        if dispatcher.dispatch(event).await.is_err() {
                            break;
                        }
                    }
                    Err(TransportError::ChannelClosed) => break,
                    Err(_) => continue,
                }
            }
            debug!("Feed router stopped");
        }));

        // Depth consumer: snapshots -> book view -> render fan-out
        let mut depth_rx = self.depth_rx;
        let mut view = self.view;
        let render_subs = self.render_subs;
        handles.push(tokio::spawn(async move {
            while let Ok(snapshot) = depth_rx.next().await {
                let model = view.apply(&snapshot);
                render_subs.notify(model);
            }
            debug!("Depth consumer stopped");
        }));

        // Trade consumer: trades -> tracker fan-out + last price
        let mut trade_rx = self.trade_rx;
        let tracker = self.tracker;
        handles.push(tokio::spawn(async move {
            while let Ok(trade) = trade_rx.next().await {
                tracker.on_trade(&trade);
            }
            debug!("Trade consumer stopped");
        }));

        // Simulator timer task
        let simulator = MarketSimulator::new(self.config.flow.clone(), self.last_price.clone());
        handles.push(tokio::spawn(simulator.run(self.orders_tx.clone())));

        RunningFeed {
            orders: self.orders_tx,
            events: self.events_tx,
            last_price: self.last_price,
            handles,
            _order_flow: self.orders_rx,
        }
    }

    /// `start` plus the demo stub exchange closing the loop
    pub fn start_demo(self) -> RunningFeed {
        let exchange = StubExchange::new(self.config.flow.security.as_str());
        let orders_rx = self.orders_tx.subscribe();
        let events_tx = self.events_tx.clone();
        let stub_handle = tokio::spawn(exchange.run(orders_rx, events_tx));

        let mut running = self.start();
        running.handles.push(stub_handle);
        running
    }
}

/// Handles to a started feed
pub struct RunningFeed {
    orders: ChannelPublisher<ClientMessage>,
    events: ChannelPublisher<FeedEvent>,
    last_price: LastPrice,
    handles: Vec<JoinHandle<()>>,
    // Keeps the outbound channel open for adapters that subscribe late
    _order_flow: ChannelSubscriber<ClientMessage>,
}

impl RunningFeed {
    /// Publisher for outbound orders
    pub fn order_publisher(&self) -> ChannelPublisher<ClientMessage> {
        self.orders.clone()
    }

    /// Publisher for inbound feed events
    pub fn event_publisher(&self) -> ChannelPublisher<FeedEvent> {
        self.events.clone()
    }

    /// Current last trade price
    pub fn last_price(&self) -> Price {
        self.last_price.get()
    }

    /// Clone the shared last-price handle
    pub fn last_price_handle(&self) -> LastPrice {
        self.last_price.clone()
    }

    /// Abort every spawned task
    pub fn shutdown(self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}
