//! Ladder Runner - Feed Orchestration
//!
//! Wires the whole feed together behind one explicit context object:
//!
//! - **FeedContext**: owns the channel endpoints, book view, trade tracker
//!   and simulator; constructed once at process start and handed to the
//!   presentation layer (no module-level singletons)
//! - **StubExchange**: demo stand-in for the external exchange, closing the
//!   loop between outbound orders and inbound feed events
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────┐  orders   ┌──────────────┐
//!   │ Simulator  ├──────────►│ StubExchange │   (demo configuration;
//!   └────────────┘           └──────┬───────┘    a real deployment
//!         ▲                         │ events      connects a real
//!         │ last price              ▼             exchange instead)
//!   ┌─────┴──────┐          ┌──────────────┐
//!   │ TradeTrack │◄─────────┤  Dispatcher  │
//!   └────────────┘  trades  └──────┬───────┘
//!                                  │ depths
//!                           ┌──────▼───────┐  render model
//!                           │   BookView   ├───────────────► subscribers
//!                           └──────────────┘
//! ```

pub mod context;
pub mod stub_exchange;

// Re-export main types
pub use context::{ContextConfig, FeedContext, RunningFeed};
pub use stub_exchange::StubExchange;
