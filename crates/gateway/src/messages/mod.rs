//! Wire message types
//!
//! The feed envelope is a tagged union keyed on the top-level JSON field:
//! `{"Depths": ...}` and `{"Trade": ...}` inbound, `{"Order": ...}` outbound.
//! No other wire formats exist.

pub mod market_data;
pub mod order;

pub use market_data::{DepthSnapshot, FeedEvent, Trade};
pub use order::{ClientMessage, OrderRequest};
