//! Feed dispatch - routes inbound envelopes to typed consumers
//!
//! Replaces single-slot callback wiring with explicit publishers: depth
//! snapshots and trades each fan out on their own channel, so multiple
//! independent consumers can subscribe without overwriting each other.

use crate::error::GatewayError;
use crate::messages::market_data::{DepthSnapshot, FeedEvent, Trade};
use crate::transport::Publisher;
use log::debug;

/// Routes decoded feed events to the depth and trade channels
///
/// A payload matching neither `Depths` nor `Trade` is silently dropped;
/// the feed never crashes on malformed input.
pub struct FeedDispatcher {
    /// Publisher for depth snapshots
    depth_tx: Box<dyn Publisher<DepthSnapshot> + Send + Sync>,
    /// Publisher for trades
    trade_tx: Box<dyn Publisher<Trade> + Send + Sync>,
}

impl FeedDispatcher {
    /// Create with custom publishers
    pub fn new(
        depth_tx: Box<dyn Publisher<DepthSnapshot> + Send + Sync>,
        trade_tx: Box<dyn Publisher<Trade> + Send + Sync>,
    ) -> Self {
        Self { depth_tx, trade_tx }
    }

    /// Decode a raw wire payload into a feed event
    pub fn decode(raw: &str) -> Result<FeedEvent, GatewayError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Route one decoded event
    pub async fn dispatch(&self, event: FeedEvent) -> Result<(), GatewayError> {
        match event {
            FeedEvent::Depths(snapshot) => {
                self.depth_tx
                    .publish(&snapshot)
                    .await
                    .map_err(GatewayError::Transport)?;
            }
            FeedEvent::Trade(trade) => {
                self.trade_tx
                    .publish(&trade)
                    .await
                    .map_err(GatewayError::Transport)?;
            }
        }
        Ok(())
    }

    /// Route one raw wire payload, ignoring anything that does not decode
    pub async fn dispatch_text(&self, raw: &str) -> Result<(), GatewayError> {
        match Self::decode(raw) {
            Ok(event) => self.dispatch(event).await,
            Err(err) => {
                debug!("Ignoring undecodable feed payload: {}", err);
                Ok(())
            }
        }
    }
}
