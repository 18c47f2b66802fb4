use crate::value_objects::Price;
use serde::{Deserialize, Serialize};

/// Represents a single price level of resting volume on one side of the book
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: Price,
    pub volume: u32,
}

impl PriceLevel {
    pub fn new(price: Price, volume: u32) -> Self {
        PriceLevel { price, volume }
    }

    pub fn is_empty(&self) -> bool {
        self.volume == 0
    }
}

impl From<(Price, u32)> for PriceLevel {
    fn from((price, volume): (Price, u32)) -> Self {
        PriceLevel { price, volume }
    }
}

impl PartialEq for PriceLevel {
    fn eq(&self, other: &Self) -> bool {
        self.price == other.price
    }
}

impl Eq for PriceLevel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(PriceLevel::new(Price::from_cents(100), 0).is_empty());
        assert!(!PriceLevel::new(Price::from_cents(100), 30).is_empty());
    }

    #[test]
    fn test_equality_is_by_price() {
        let a = PriceLevel::new(Price::from_cents(100), 10);
        let b = PriceLevel::new(Price::from_cents(100), 20);
        assert_eq!(a, b);
    }
}
