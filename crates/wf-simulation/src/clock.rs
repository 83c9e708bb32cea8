use std::time::Duration;

/// Tracks simulation time: a monotonic tick counter plus the wall-clock
/// interval the front end waits between ticks.
#[derive(Debug, Clone)]
pub struct SimClock {
    tick: u64,
    interval: Duration,
}

impl SimClock {
    /// Create a new clock starting at tick 0.
    pub fn new(interval: Duration) -> Self {
        Self { tick: 0, interval }
    }

    /// Advance the clock by one tick. Returns the new tick number.
    pub fn advance(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Return the current tick number.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Pause between two ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wall-clock time covered by the ticks so far, at the nominal interval.
    pub fn elapsed(&self) -> Duration {
        self.interval.saturating_mul(u32::try_from(self.tick).unwrap_or(u32::MAX))
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(200))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_initial_state() {
        let clock = SimClock::default();
        assert_eq!(clock.tick(), 0);
        assert_eq!(clock.elapsed(), Duration::ZERO);
        assert_eq!(clock.interval(), Duration::from_millis(200));
    }

    #[test]
    fn clock_advance_increments() {
        let mut clock = SimClock::new(Duration::from_millis(100));
        clock.advance();
        clock.advance();
        assert_eq!(clock.advance(), 3);
        assert_eq!(clock.tick(), 3);
        assert_eq!(clock.elapsed(), Duration::from_millis(300));
    }
}
