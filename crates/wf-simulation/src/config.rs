use std::time::Duration;

use serde::Serialize;

use crate::error::{SimError, SimResult};
use crate::weed::Rgb;

/// Whether positions are real-valued or kept whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateDomain {
    /// Continuous coordinates.
    #[default]
    Real,
    /// Whole-numbered coordinates; steps are rounded before they are applied.
    Integer,
}

/// How the lateral coordinate changes each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftRule {
    /// Step up or down with equal probability.
    #[default]
    Randomized,
    /// Always step in the positive direction.
    Deterministic,
}

/// When a new weed enters the field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnPolicy {
    /// Spawn exactly one weed on every tick.
    #[default]
    Always,
    /// Spawn one weed with the given probability, drawn fresh each tick.
    Probability(f64),
}

/// Which display color, if any, new weeds receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// A uniformly random color per weed.
    #[default]
    Random,
    /// The same color for every weed.
    Fixed(Rgb),
    /// No color tracking.
    Off,
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimConfig {
    /// RNG seed for deterministic simulation.
    pub seed: u64,
    /// Field extent along x.
    pub field_width: f64,
    /// Field extent along y. Spawn positions are drawn from `[0, field_height)`.
    pub field_height: f64,
    /// Forward advance per tick, shared by all weeds.
    pub speed: f64,
    /// Lateral drift parameter in degrees, shared by all weeds.
    pub angle: f64,
    /// Real or integer coordinates.
    pub coordinates: CoordinateDomain,
    /// Lateral update rule.
    pub drift: DriftRule,
    /// Spawn decision made at the start of every tick.
    pub spawn: SpawnPolicy,
    /// Color assignment for new weeds.
    pub color: ColorMode,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
    /// Wall-clock pause between ticks, honored by the front end.
    pub tick_interval: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            field_width: 5.0,
            field_height: 5.0,
            speed: 0.2,
            angle: 10.0,
            coordinates: CoordinateDomain::Real,
            drift: DriftRule::Randomized,
            spawn: SpawnPolicy::Always,
            color: ColorMode::Random,
            max_events: 0,
            tick_interval: Duration::from_millis(200),
        }
    }
}

impl SimConfig {
    /// Preset for the whole-numbered console field: 50x50 cells, one cell
    /// forward and one cell sideways per tick.
    pub fn integer() -> Self {
        Self {
            field_width: 50.0,
            field_height: 50.0,
            speed: 1.0,
            angle: 90.0,
            coordinates: CoordinateDomain::Integer,
            ..Self::default()
        }
    }

    /// Set the RNG seed for deterministic simulation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the field dimensions.
    pub fn with_field(mut self, width: f64, height: f64) -> Self {
        self.field_width = width;
        self.field_height = height;
        self
    }

    /// Set the per-tick forward advance.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the lateral drift parameter in degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Set the coordinate domain.
    pub fn with_coordinates(mut self, domain: CoordinateDomain) -> Self {
        self.coordinates = domain;
        self
    }

    /// Set the lateral drift rule.
    pub fn with_drift(mut self, rule: DriftRule) -> Self {
        self.drift = rule;
        self
    }

    /// Set the spawn policy.
    pub fn with_spawn(mut self, policy: SpawnPolicy) -> Self {
        self.spawn = policy;
        self
    }

    /// Set the color mode.
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Set the wall-clock pause between ticks.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Check that every parameter lies in the domain the engine supports.
    pub fn validate(&self) -> SimResult<()> {
        if !(self.field_width.is_finite() && self.field_width > 0.0) {
            return Err(invalid("field_width", "must be a positive finite number"));
        }
        if !(self.field_height.is_finite() && self.field_height > 0.0) {
            return Err(invalid("field_height", "must be a positive finite number"));
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(invalid("speed", "must be a non-negative finite number"));
        }
        if !self.angle.is_finite() {
            return Err(invalid("angle", "must be a finite number"));
        }
        if let SpawnPolicy::Probability(p) = self.spawn
            && !(0.0..=1.0).contains(&p)
        {
            return Err(invalid("spawn", "probability must lie in [0, 1]"));
        }
        if self.coordinates == CoordinateDomain::Integer {
            if self.speed.fract() != 0.0 {
                return Err(invalid("speed", "must be whole in the integer domain"));
            }
            let step = self.speed * self.angle / 90.0;
            if (step - step.round()).abs() > WHOLE_STEP_TOLERANCE {
                return Err(invalid(
                    "angle",
                    "speed * angle / 90 must be whole in the integer domain",
                ));
            }
            if self.field_height < 1.0 {
                return Err(invalid("field_height", "must be at least 1 in the integer domain"));
            }
        }
        Ok(())
    }
}

// Absorbs float noise in products such as 3 * 30 / 90.
const WHOLE_STEP_TOLERANCE: f64 = 1e-9;

fn invalid(field: &'static str, reason: &str) -> SimError {
    SimError::InvalidConfig {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = SimConfig::default();
        assert_eq!(config.seed, 42);
        assert!((config.field_width - 5.0).abs() < f64::EPSILON);
        assert!((config.field_height - 5.0).abs() < f64::EPSILON);
        assert!((config.speed - 0.2).abs() < f64::EPSILON);
        assert!((config.angle - 10.0).abs() < f64::EPSILON);
        assert_eq!(config.spawn, SpawnPolicy::Always);
        assert_eq!(config.drift, DriftRule::Randomized);
        assert_eq!(config.max_events, 0);
        assert_eq!(config.tick_interval, Duration::from_millis(200));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builder_chain() {
        let config = SimConfig::default()
            .with_seed(123)
            .with_field(8.0, 3.0)
            .with_speed(0.5)
            .with_angle(30.0)
            .with_drift(DriftRule::Deterministic)
            .with_spawn(SpawnPolicy::Probability(0.3))
            .with_color(ColorMode::Off)
            .with_max_events(500);
        assert_eq!(config.seed, 123);
        assert!((config.field_width - 8.0).abs() < f64::EPSILON);
        assert!((config.field_height - 3.0).abs() < f64::EPSILON);
        assert!((config.speed - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.drift, DriftRule::Deterministic);
        assert_eq!(config.spawn, SpawnPolicy::Probability(0.3));
        assert_eq!(config.color, ColorMode::Off);
        assert_eq!(config.max_events, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn integer_preset_is_valid() {
        let config = SimConfig::integer();
        assert_eq!(config.coordinates, CoordinateDomain::Integer);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_dimensions() {
        let err = SimConfig::default().with_field(0.0, 5.0).validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { field: "field_width", .. }));

        let err = SimConfig::default()
            .with_field(5.0, f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { field: "field_height", .. }));
    }

    #[test]
    fn rejects_negative_speed() {
        let err = SimConfig::default().with_speed(-0.1).validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { field: "speed", .. }));
    }

    #[test]
    fn rejects_probability_out_of_range() {
        for p in [-0.1, 1.5, f64::NAN] {
            let err = SimConfig::default()
                .with_spawn(SpawnPolicy::Probability(p))
                .validate()
                .unwrap_err();
            assert!(matches!(err, SimError::InvalidConfig { field: "spawn", .. }));
        }
    }

    #[test]
    fn integer_domain_requires_whole_speed() {
        let err = SimConfig::integer().with_speed(0.5).validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { field: "speed", .. }));
    }

    #[test]
    fn integer_domain_requires_whole_lateral_step() {
        // 1 * 10 / 90 would round to a zero step.
        let err = SimConfig::integer().with_angle(10.0).validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { field: "angle", .. }));

        let err = SimConfig::integer()
            .with_speed(2.0)
            .with_angle(30.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { field: "angle", .. }));

        for (speed, angle) in [(3.0, 30.0), (2.0, 45.0), (1.0, 0.0), (1.0, -90.0)] {
            let config = SimConfig::integer().with_speed(speed).with_angle(angle);
            assert!(config.validate().is_ok(), "speed {speed} angle {angle}");
        }
    }
}
