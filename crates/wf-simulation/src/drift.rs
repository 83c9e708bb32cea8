use std::collections::HashSet;

use crate::context::SimContext;
use crate::error::SimResult;
use crate::event::SimEventKind;
use crate::system::System;
use crate::weed::WeedId;

/// Advances every weed exactly once per tick.
///
/// Weeds move independently. A weed that crosses the far edge is reported
/// once through a [`SimEventKind::LeftField`] event and keeps moving.
#[derive(Debug, Default)]
pub struct DriftSystem {
    departed: HashSet<WeedId>,
}

impl DriftSystem {
    /// Create a drift system with no departures recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `true` if the weed has crossed the far edge of the field.
    pub fn has_left(&self, id: WeedId) -> bool {
        self.departed.contains(&id)
    }

    /// Number of weeds that have crossed the far edge.
    pub fn departed_count(&self) -> usize {
        self.departed.len()
    }
}

impl System for DriftSystem {
    fn name(&self) -> &str {
        "drift"
    }

    fn tick(&mut self, ctx: &mut SimContext<'_>) -> SimResult<()> {
        let config = ctx.config;
        let mut crossed = Vec::new();

        for weed in ctx.field.iter_mut() {
            weed.advance(config.drift, config.coordinates, &mut *ctx.rng);
            if weed.position().x >= config.field_width && self.departed.insert(weed.id()) {
                crossed.push(weed.id());
            }
        }

        for id in crossed {
            tracing::trace!(weed = %id, tick = ctx.tick(), "weed left the field");
            ctx.emit(
                SimEventKind::LeftField { weed: id },
                format!("weed {id} left the field"),
            );
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
