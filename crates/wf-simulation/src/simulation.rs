use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::clock::SimClock;
use crate::config::SimConfig;
use crate::context::SimContext;
use crate::drift::DriftSystem;
use crate::error::{SimError, SimResult};
use crate::event::{EventLog, SimEvent, SimEventKind};
use crate::field::WeedField;
use crate::report::ShutdownReport;
use crate::spawn::SpawnSystem;
use crate::system::System;

/// Lifecycle of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Ticks are accepted.
    Running,
    /// Terminal. No further spawns or updates happen.
    Stopped,
}

/// The top-level simulation orchestrator.
///
/// Owns the weed field, clock, RNG, event log, and registered systems.
/// A new simulation registers the spawn system followed by the drift system,
/// so a weed is advanced on the same tick it appears.
pub struct Simulation {
    config: SimConfig,
    field: WeedField,
    clock: SimClock,
    rng: StdRng,
    events: EventLog,
    systems: Vec<Box<dyn System>>,
    state: RunState,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("tick", &self.clock.tick())
            .field("weeds", &self.field.len())
            .field("systems", &self.systems.len())
            .field("state", &self.state)
            .finish()
    }
}

impl Simulation {
    /// Create a running simulation with the spawn and drift systems.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        let mut sim = Self::bare(config)?;
        sim.add_system(SpawnSystem::new());
        sim.add_system(DriftSystem::new());
        Ok(sim)
    }

    /// Create a running simulation with no systems registered.
    pub fn bare(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let clock = SimClock::new(config.tick_interval);
        let rng = StdRng::seed_from_u64(config.seed);
        let events = EventLog::new(config.max_events);
        Ok(Self {
            config,
            field: WeedField::new(),
            clock,
            rng,
            events,
            systems: Vec::new(),
            state: RunState::Running,
        })
    }

    /// Register a system. Systems are ticked in registration order.
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        self.systems.push(Box::new(system));
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) -> SimResult<()> {
        if self.state == RunState::Stopped {
            return Err(SimError::Stopped);
        }

        self.clock.advance();

        let mut ctx = SimContext {
            field: &mut self.field,
            config: &self.config,
            clock: &self.clock,
            events: &mut self.events,
            rng: &mut self.rng,
        };
        for system in &mut self.systems {
            system.tick(&mut ctx)?;
        }
        Ok(())
    }

    /// Advance the simulation by `n` ticks.
    pub fn run(&mut self, n: u64) -> SimResult<()> {
        for _ in 0..n {
            self.tick()?;
        }
        Ok(())
    }

    /// Transition to [`RunState::Stopped`] and produce the shutdown report.
    ///
    /// Succeeds exactly once per simulation.
    pub fn stop(&mut self) -> SimResult<ShutdownReport> {
        if self.state == RunState::Stopped {
            return Err(SimError::Stopped);
        }
        self.state = RunState::Stopped;

        let population = self.field.len();
        let tick = self.clock.tick();
        tracing::info!(tick, population, "simulation stopped");
        self.events.push(SimEvent::new(
            tick,
            SimEventKind::Stopped { population },
            format!("stopped after {tick} ticks with {population} weeds"),
        ));

        Ok(ShutdownReport::from_field(
            &self.field,
            self.config.coordinates,
            tick,
        ))
    }

    /// Read-only view of every weed, for rendering.
    pub fn field(&self) -> &WeedField {
        &self.field
    }

    /// The run configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The simulation clock.
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// The event log.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Return `true` until [`Simulation::stop`] has been called.
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Access a system by downcasting to a concrete type.
    pub fn get_system<T: System + 'static>(&self) -> Option<&T> {
        self.systems
            .iter()
            .find_map(|s| s.as_any().downcast_ref::<T>())
    }

    /// Access a system mutably by downcasting to a concrete type.
    pub fn get_system_mut<T: System + 'static>(&mut self) -> Option<&mut T> {
        self.systems
            .iter_mut()
            .find_map(|s| s.as_any_mut().downcast_mut::<T>())
    }

    /// The number of ticks run so far.
    pub fn current_tick(&self) -> u64 {
        self.clock.tick()
    }
}
