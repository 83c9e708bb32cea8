use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::config::{CoordinateDomain, DriftRule};

/// Unique identifier for a weed, assigned in spawn order starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WeedId(pub u64);

impl fmt::Display for WeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in field coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    /// Distance travelled from the origin edge.
    pub x: f64,
    /// Lateral coordinate.
    pub y: f64,
}

impl Position {
    /// Create a position from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Draw a uniformly random color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random(), rng.random(), rng.random())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// A single drifting weed.
///
/// Identity, speed and angle are fixed at spawn time. Only the position
/// changes, and only through [`Weed::advance`].
#[derive(Debug, Clone, PartialEq)]
pub struct Weed {
    id: WeedId,
    position: Position,
    speed: f64,
    angle: f64,
    color: Option<Rgb>,
}

impl Weed {
    /// Create a weed at `x = 0` on the given lateral coordinate.
    pub(crate) fn new(id: WeedId, y0: f64, speed: f64, angle: f64, color: Option<Rgb>) -> Self {
        Self {
            id,
            position: Position::new(0.0, y0),
            speed,
            angle,
            color,
        }
    }

    /// The weed's identifier.
    pub fn id(&self) -> WeedId {
        self.id
    }

    /// Current position in field coordinates.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Display color, if the run tracks one.
    pub fn color(&self) -> Option<Rgb> {
        self.color
    }

    /// Magnitude of the lateral step applied on every advance.
    pub fn lateral_step(&self) -> f64 {
        self.speed * self.angle / 90.0
    }

    /// Move one tick forward.
    ///
    /// `x` always grows by `speed`. `y` moves by `speed * angle / 90`, with a
    /// fresh random sign under [`DriftRule::Randomized`]. In the integer
    /// domain both steps are whole (see [`SimConfig::validate`]) and are
    /// rounded only to strip float noise.
    ///
    /// [`SimConfig::validate`]: crate::config::SimConfig::validate
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        rule: DriftRule,
        domain: CoordinateDomain,
        rng: &mut R,
    ) {
        let sign = match rule {
            DriftRule::Randomized => {
                if rng.random_bool(0.5) {
                    1.0
                } else {
                    -1.0
                }
            }
            DriftRule::Deterministic => 1.0,
        };

        let (dx, dy) = match domain {
            CoordinateDomain::Real => (self.speed, sign * self.lateral_step()),
            CoordinateDomain::Integer => (self.speed.round(), sign * self.lateral_step().round()),
        };

        self.position.x += dx;
        self.position.y += dy;
    }
}
