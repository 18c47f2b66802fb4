//! Integer-cent price representation
//!
//! Prices travel on the wire as whole cents (u32) and are rendered with
//! two decimal places. 1.01 is stored as 101.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Cents per currency unit
pub const PRICE_SCALE: u32 = 100;

/// Price in whole cents
///
/// Internally stored as u32 where the value represents:
/// actual_price = cents / 100
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Price(u32);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Create from whole cents
    #[inline(always)]
    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    /// Get the value in whole cents
    #[inline(always)]
    pub const fn cents(self) -> u32 {
        self.0
    }

    /// Check if zero
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Convert to a scale-2 decimal (101 -> 1.01)
    #[inline]
    pub fn as_decimal(self) -> Decimal {
        Decimal::new(self.0 as i64, 2)
    }

    /// Signed difference in cents (self - other)
    #[inline]
    pub fn diff_cents(self, other: Price) -> i64 {
        self.0 as i64 - other.0 as i64
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / PRICE_SCALE, self.0 % PRICE_SCALE)
    }
}

impl Add for Price {
    type Output = Price;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Price(self.0 + rhs.0)
    }
}

impl From<u32> for Price {
    fn from(cents: u32) -> Self {
        Price(cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents() {
        let p = Price::from_cents(101);
        assert_eq!(p.cents(), 101);
        assert!(!p.is_zero());
        assert!(Price::ZERO.is_zero());
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::from_cents(101).to_string(), "1.01");
        assert_eq!(Price::from_cents(99).to_string(), "0.99");
        assert_eq!(Price::from_cents(12500).to_string(), "125.00");
        assert_eq!(Price::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn test_as_decimal() {
        assert_eq!(Price::from_cents(101).as_decimal(), dec!(1.01));
        assert_eq!(Price::from_cents(101).as_decimal().to_string(), "1.01");
        assert_eq!(Price::from_cents(100).as_decimal().to_string(), "1.00");
    }

    #[test]
    fn test_diff_cents() {
        let ask = Price::from_cents(101);
        let bid = Price::from_cents(99);
        assert_eq!(ask.diff_cents(bid), 2);
        assert_eq!(bid.diff_cents(ask), -2);
    }

    #[test]
    fn test_ordering() {
        assert!(Price::from_cents(99) < Price::from_cents(101));
    }

    #[test]
    fn test_serde_transparent() {
        let p: Price = serde_json::from_str("101").unwrap();
        assert_eq!(p, Price::from_cents(101));
        assert_eq!(serde_json::to_string(&p).unwrap(), "101");
    }
}
