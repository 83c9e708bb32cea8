use rand::rngs::StdRng;

use crate::clock::SimClock;
use crate::config::SimConfig;
use crate::event::{EventLog, SimEvent, SimEventKind};
use crate::field::WeedField;

/// Mutable context passed to each system during a tick.
pub struct SimContext<'a> {
    /// Every weed spawned so far.
    pub field: &'a mut WeedField,
    /// Run parameters.
    pub config: &'a SimConfig,
    /// The simulation clock, already advanced for this tick.
    pub clock: &'a SimClock,
    /// Event sink.
    pub events: &'a mut EventLog,
    /// The run's only source of randomness.
    pub rng: &'a mut StdRng,
}

impl SimContext<'_> {
    /// Emit a simulation event at the current tick.
    pub fn emit(&mut self, kind: SimEventKind, description: impl Into<String>) {
        self.events
            .push(SimEvent::new(self.clock.tick(), kind, description));
    }

    /// The current tick number.
    pub fn tick(&self) -> u64 {
        self.clock.tick()
    }
}
