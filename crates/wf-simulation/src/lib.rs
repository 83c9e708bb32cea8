//! Tick-based weed drift simulation for Weedfield.
//!
//! Weeds enter a bounded 2D field at the `x = 0` edge, drift forward at a
//! constant speed and wander sideways in a random walk. The engine owns the
//! weeds and the id counter; renderers only read [`Simulation::field`]
//! between ticks.

/// Simulation clock for tracking ticks.
pub mod clock;
/// Configuration types for simulation runs.
pub mod config;
/// Mutable context passed to systems each tick.
pub mod context;
/// Drift system: advances every weed once per tick.
pub mod drift;
/// Error types for the simulation crate.
pub mod error;
/// Simulation event types and the event log.
pub mod event;
/// The append-only weed collection.
pub mod field;
/// The shutdown report.
pub mod report;
/// Top-level simulation orchestrator.
pub mod simulation;
/// Spawn system: decides when new weeds enter the field.
pub mod spawn;
/// The trait that all simulation systems implement.
pub mod system;
/// The weed entity and its motion rule.
pub mod weed;

/// Re-export of [`clock::SimClock`].
pub use clock::SimClock;
/// Re-exports of the configuration types.
pub use config::{ColorMode, CoordinateDomain, DriftRule, SimConfig, SpawnPolicy};
/// Re-export of [`context::SimContext`].
pub use context::SimContext;
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of [`event::EventLog`], [`event::SimEvent`], and [`event::SimEventKind`].
pub use event::{EventLog, SimEvent, SimEventKind};
/// Re-export of [`field::WeedField`].
pub use field::WeedField;
/// Re-exports of [`report::ShutdownReport`] and [`report::ReportLine`].
pub use report::{ReportLine, ShutdownReport};
/// Re-exports of [`simulation::Simulation`] and [`simulation::RunState`].
pub use simulation::{RunState, Simulation};
/// Re-export of [`system::System`].
pub use system::System;
/// Re-exports of the weed entity types.
pub use weed::{Position, Rgb, Weed, WeedId};
