//! Render model - what the presentation layer consumes

use ladder_core::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One renderable ladder row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Price as a scale-2 decimal (101 cents -> 1.01)
    pub price: Decimal,
    /// Resting volume at this price
    pub volume: u32,
    /// Which side of the book the row belongs to
    pub side: Side,
    /// Volume as a percentage of the largest volume on this side (0-100),
    /// used for bar-chart scaling
    pub width: u8,
}

/// Renderable book state: both ladders plus the spread
///
/// Rows are sorted strictly descending by price within each side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderModel {
    pub asks: Vec<Row>,
    pub bids: Vec<Row>,
    /// Best-ask minus best-bid in cents, rendered at scale 2.
    /// Unset when either side is empty.
    pub spread: Option<Decimal>,
}

impl RenderModel {
    /// Check if both ladders are empty
    pub fn is_empty(&self) -> bool {
        self.asks.is_empty() && self.bids.is_empty()
    }

    /// Best ask row (lowest ask price - the last ask row)
    pub fn best_ask(&self) -> Option<&Row> {
        self.asks.last()
    }

    /// Best bid row (highest bid price - the first bid row)
    pub fn best_bid(&self) -> Option<&Row> {
        self.bids.first()
    }
}
