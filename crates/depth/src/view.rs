//! Stateful book view - render model with carried-over display state

use crate::aggregate::aggregate;
use crate::model::RenderModel;
use ladder_gateway::DepthSnapshot;

/// Owns the latest render model across snapshots
///
/// The aggregator itself is stateless; the one piece of display state that
/// survives between snapshots lives here: when a snapshot has an empty side
/// the spread is not recomputed, and the previously shown value persists.
#[derive(Debug, Default)]
pub struct BookView {
    current: RenderModel,
}

impl BookView {
    /// Create an empty view
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a full-replacement snapshot and return the refreshed model
    pub fn apply(&mut self, snapshot: &DepthSnapshot) -> &RenderModel {
        let mut model = aggregate(snapshot);
        if model.spread.is_none() {
            model.spread = self.current.spread;
        }
        self.current = model;
        &self.current
    }

    /// Latest render model
    pub fn model(&self) -> &RenderModel {
        &self.current
    }
}
