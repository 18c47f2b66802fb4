//! Order message types

use ladder_core::{Price, Side};
use serde::{Deserialize, Serialize};

/// Order submission sent back to the exchange
///
/// Fire-and-forget: nothing in this system reads an order back except via
/// the resulting depth and trade events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Instrument to trade
    pub security: String,
    /// Quantity to trade
    pub size: u32,
    /// Limit price in whole cents
    pub price_cents: Price,
    /// Buy or sell
    pub buy: bool,
}

impl OrderRequest {
    /// Create a buy order
    pub fn buy(security: impl Into<String>, size: u32, price_cents: Price) -> Self {
        Self {
            security: security.into(),
            size,
            price_cents,
            buy: true,
        }
    }

    /// Create a sell order
    pub fn sell(security: impl Into<String>, size: u32, price_cents: Price) -> Self {
        Self {
            security: security.into(),
            size,
            price_cents,
            buy: false,
        }
    }

    /// Book side this order would rest on
    pub fn resting_side(&self) -> Side {
        if self.buy { Side::Bid } else { Side::Ask }
    }
}

/// Outbound envelope, tagged on the top-level key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientMessage {
    /// Order submission: `{"Order": {...}}`
    Order(OrderRequest),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_sell_constructors() {
        let buy = OrderRequest::buy("AAPL", 30, Price::from_cents(110));
        assert!(buy.buy);
        assert_eq!(buy.resting_side(), Side::Bid);

        let sell = OrderRequest::sell("AAPL", 30, Price::from_cents(130));
        assert!(!sell.buy);
        assert_eq!(sell.resting_side(), Side::Ask);
    }

    #[test]
    fn test_order_wire_shape() {
        let msg = ClientMessage::Order(OrderRequest::buy("AAPL", 30, Price::from_cents(110)));
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["Order"]["security"], "AAPL");
        assert_eq!(json["Order"]["size"], 30);
        assert_eq!(json["Order"]["price_cents"], 110);
        assert_eq!(json["Order"]["buy"], true);
    }

    #[test]
    fn test_order_roundtrip() {
        let msg = ClientMessage::Order(OrderRequest::sell("AAPL", 12, Price::from_cents(131)));
        let json = serde_json::to_string(&msg).unwrap();
        let decoded: ClientMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, msg);
    }
}
