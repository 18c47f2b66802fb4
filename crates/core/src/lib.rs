//! Ladder Core
//!
//! Shared domain types for the ladder order book feed:
//! - `Price`: integer-cent price with two-decimal rendering
//! - `Side`: ask/bid discriminator
//! - `PriceLevel`: one price level of resting volume

pub mod entities;
pub mod value_objects;

// Re-export value objects at crate root for convenience
pub use value_objects::{Price, Side};

// Re-export entities at crate root
pub use entities::PriceLevel;
