//! Ladder Gateway
//!
//! Transport layer for the ladder order book feed. Provides:
//! - Transport abstraction (tokio channels, with traits for future transports)
//! - Wire message types for the feed envelope and outbound orders
//! - Typed dispatch of inbound events to depth and trade consumers
//!
//! ## Architecture
//!
//! ```text
//! External Exchange (or demo stub)
//!         │
//!         │ {"Depths": ..} / {"Trade": ..}
//!    ┌────▼───────┐
//!    │   Feed     │
//!    │ Dispatcher │
//!    └──┬──────┬──┘
//!       │      │
//!   depths   trades          orders ──► {"Order": ..} ──► exchange
//! ```
//!
//! ## Transport
//!
//! Uses tokio broadcast channels for single-process operation. The
//! `Publisher`/`Subscriber` traits allow plugging in a real socket
//! transport without touching the consumers.

pub mod dispatch;
pub mod error;
pub mod messages;
pub mod transport;

// Re-export commonly used types
pub use dispatch::FeedDispatcher;
pub use error::{GatewayError, TransportError};
pub use messages::{
    market_data::{DepthSnapshot, FeedEvent, Trade},
    order::{ClientMessage, OrderRequest},
};
pub use transport::{
    Publisher, Subscriber,
    channel::{ChannelPublisher, ChannelSubscriber},
};
