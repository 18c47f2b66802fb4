//! Ladder Depth
//!
//! The depth-aggregation pipeline: turns raw price/volume maps into a
//! sorted, width-scaled, spread-annotated row model, and tracks the last
//! trade price for downstream consumers.
//!
//! - [`aggregate`]: pure snapshot -> [`RenderModel`] function
//! - [`BookView`]: stateful caller that retains display state (the spread)
//!   across snapshots with an empty side
//! - [`TradeTracker`]: ordered trade fan-out plus the shared [`LastPrice`]
//! - [`Subscribers`]: ordered callback registry used for both trade and
//!   render-model fan-out

pub mod aggregate;
pub mod model;
pub mod subscribers;
pub mod tracker;
pub mod view;

pub use aggregate::aggregate;
pub use model::{RenderModel, Row};
pub use subscribers::{Subscribers, SubscriptionId};
pub use tracker::{LastPrice, TradeTracker};
pub use view::BookView;
