use rand::Rng;

use crate::config::{ColorMode, CoordinateDomain, SpawnPolicy};
use crate::context::SimContext;
use crate::error::SimResult;
use crate::event::SimEventKind;
use crate::system::System;
use crate::weed::Rgb;

/// Decides once per tick whether a new weed enters the field, and places it
/// on the origin edge at a uniformly random lateral position.
#[derive(Debug, Default)]
pub struct SpawnSystem {
    spawned: u64,
    skipped: u64,
}

impl SpawnSystem {
    /// Create a spawn system with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of weeds this system has spawned.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Number of ticks on which the policy decided not to spawn.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    fn should_spawn<R: Rng + ?Sized>(policy: SpawnPolicy, rng: &mut R) -> bool {
        match policy {
            SpawnPolicy::Always => true,
            SpawnPolicy::Probability(p) => rng.random_bool(p),
        }
    }

    /// Draw the initial lateral coordinate from `[0, height)`.
    fn initial_y<R: Rng + ?Sized>(domain: CoordinateDomain, height: f64, rng: &mut R) -> f64 {
        match domain {
            CoordinateDomain::Real => rng.random_range(0.0..height),
            CoordinateDomain::Integer => {
                let rows = height.ceil() as u64;
                rng.random_range(0..rows) as f64
            }
        }
    }

    fn color<R: Rng + ?Sized>(mode: ColorMode, rng: &mut R) -> Option<Rgb> {
        match mode {
            ColorMode::Random => Some(Rgb::random(rng)),
            ColorMode::Fixed(rgb) => Some(rgb),
            ColorMode::Off => None,
        }
    }
}

impl System for SpawnSystem {
    fn name(&self) -> &str {
        "spawn"
    }

    fn tick(&mut self, ctx: &mut SimContext<'_>) -> SimResult<()> {
        let config = ctx.config;
        if !Self::should_spawn(config.spawn, &mut *ctx.rng) {
            self.skipped += 1;
            return Ok(());
        }

        let y0 = Self::initial_y(config.coordinates, config.field_height, &mut *ctx.rng);
        let color = Self::color(config.color, &mut *ctx.rng);
        let id = ctx.field.spawn(y0, config.speed, config.angle, color);
        self.spawned += 1;

        tracing::debug!(weed = %id, y0, tick = ctx.tick(), "weed spawned");
        ctx.emit(
            SimEventKind::Spawned { weed: id },
            format!("weed {id} spawned at (0.0, {y0:.1})"),
        );
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
