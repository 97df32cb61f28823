use std::f64::consts::TAU;
use std::time::{Duration, Instant};

use crate::config::MIN_TICK_INTERVAL;

/// Decouples wall time from simulation ticks.
///
/// At most one tick fires per poll; intervals skipped while the host was
/// slow are not replayed.
#[derive(Debug, Clone, Copy)]
pub struct SimulationClock {
    last_update: Instant,
}

impl SimulationClock {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self { last_update: now }
    }

    /// Time since the last tick, zero if `now` is earlier.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_update)
    }

    /// Returns true and restarts the interval when `interval` has elapsed.
    pub fn poll(&mut self, now: Instant, interval: Duration) -> bool {
        if self.elapsed(now) < interval.max(MIN_TICK_INTERVAL) {
            return false;
        }

        self.last_update = now;
        true
    }

    /// Fraction of the way to the next tick, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant, interval: Duration) -> f64 {
        let interval = interval.max(MIN_TICK_INTERVAL);
        (self.elapsed(now).as_secs_f64() / interval.as_secs_f64()).min(1.0)
    }
}

/// Eased head progress: `p - sin(2πp) / 10`. Cosmetic only.
#[must_use]
pub fn eased_head_progress(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    progress - (progress * TAU).sin() / 10.0
}

/// Eased tail progress: `p + sin(2πp) / 5`. Cosmetic only.
#[must_use]
pub fn eased_tail_progress(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    progress + (progress * TAU).sin() / 5.0
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{SimulationClock, eased_head_progress, eased_tail_progress};

    const INTERVAL: Duration = Duration::from_millis(200);

    #[test]
    fn no_tick_before_interval_elapses() {
        let start = Instant::now();
        let mut clock = SimulationClock::new(start);

        assert!(!clock.poll(start + Duration::from_millis(199), INTERVAL));
    }

    #[test]
    fn tick_fires_at_interval_and_resets() {
        let start = Instant::now();
        let mut clock = SimulationClock::new(start);
        let at = start + INTERVAL;

        assert!(clock.poll(at, INTERVAL));
        assert!(!clock.poll(at, INTERVAL));
        assert_eq!(clock.elapsed(at), Duration::ZERO);
    }

    #[test]
    fn long_stall_yields_a_single_tick() {
        let start = Instant::now();
        let mut clock = SimulationClock::new(start);
        let late = start + INTERVAL * 5;

        assert!(clock.poll(late, INTERVAL));
        assert!(!clock.poll(late + Duration::from_millis(10), INTERVAL));
    }

    #[test]
    fn progress_is_fractional_and_clamped() {
        let start = Instant::now();
        let clock = SimulationClock::new(start);

        let half = clock.progress(start + Duration::from_millis(100), INTERVAL);
        assert!((half - 0.5).abs() < 1e-9);
        assert!((clock.progress(start + INTERVAL * 3, INTERVAL) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_interval_is_floored() {
        let start = Instant::now();
        let mut clock = SimulationClock::new(start);

        assert!(clock.progress(start, Duration::ZERO).is_finite());
        assert!(!clock.poll(start, Duration::ZERO));
        assert!(clock.poll(start + Duration::from_millis(1), Duration::ZERO));
    }

    #[test]
    fn easing_keeps_endpoints() {
        assert!(eased_head_progress(0.0).abs() < 1e-9);
        assert!((eased_head_progress(1.0) - 1.0).abs() < 1e-9);
        assert!(eased_tail_progress(0.0).abs() < 1e-9);
        assert!((eased_tail_progress(1.0) - 1.0).abs() < 1e-9);
    }
}
