//! Market data message types

use ladder_core::{Price, PriceLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full depth snapshot: resting volume per price, per side
///
/// Every snapshot is a total replacement of the book state. Consumers never
/// diff against a previous snapshot; no incremental merge state is kept
/// anywhere in the pipeline.
///
/// `BTreeMap` keeps each side sorted by price. Malformed wire input
/// (non-numeric price keys, negative volume) fails deserialization of the
/// whole envelope and is dropped by the dispatcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthSnapshot {
    pub asks: BTreeMap<Price, u32>,
    pub bids: BTreeMap<Price, u32>,
}

impl DepthSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if both sides are empty
    pub fn is_empty(&self) -> bool {
        self.asks.is_empty() && self.bids.is_empty()
    }

    /// Lowest ask price, if any asks are resting
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.keys().next().copied()
    }

    /// Highest bid price, if any bids are resting
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.keys().next_back().copied()
    }

    /// Ask levels, best (lowest price) first
    pub fn ask_levels(&self) -> Vec<PriceLevel> {
        self.asks
            .iter()
            .map(|(&price, &volume)| PriceLevel::new(price, volume))
            .collect()
    }

    /// Bid levels, best (highest price) first
    pub fn bid_levels(&self) -> Vec<PriceLevel> {
        self.bids
            .iter()
            .rev()
            .map(|(&price, &volume)| PriceLevel::new(price, volume))
            .collect()
    }
}

/// Trade execution event
///
/// Only `price_cents` is retained downstream (as the last trade price);
/// the event itself is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub price_cents: Price,
    /// Executed quantity; feeds that omit it decode as zero
    #[serde(default)]
    pub quantity: u32,
}

impl Trade {
    pub fn new(price_cents: Price, quantity: u32) -> Self {
        Self {
            price_cents,
            quantity,
        }
    }
}

/// Inbound feed envelope, tagged on the top-level key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeedEvent {
    /// Full depth snapshot: `{"Depths": {...}}`
    Depths(DepthSnapshot),
    /// Trade execution: `{"Trade": {...}}`
    Trade(Trade),
}
