use crate::config::MAX_FRAME_DT_MS;

use std::time::Instant;

/// Turns wall-clock frame instants into clamped tick deltas.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    last: Instant,
    max_dt_ms: f64,
}

impl FrameClock {
    pub fn new(start: Instant) -> Self {
        Self::with_max_dt(start, MAX_FRAME_DT_MS)
    }

    pub fn with_max_dt(start: Instant, max_dt_ms: f64) -> Self {
        Self {
            last: start,
            max_dt_ms,
        }
    }

    /// Milliseconds since the previous frame, capped at the configured maximum.
    /// Instants earlier than the previous frame yield zero.
    pub fn frame_at(&mut self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        (elapsed.as_secs_f64() * 1000.0).min(self.max_dt_ms)
    }

    pub fn frame(&mut self) -> f64 {
        self.frame_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::FrameClock;
    use std::time::{Duration, Instant};

    #[test]
    fn first_frame_is_zero() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        assert_eq!(clock.frame_at(start), 0.0);
    }

    #[test]
    fn short_frames_pass_through() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        let dt = clock.frame_at(start + Duration::from_millis(10));
        assert!((dt - 10.0).abs() < 1e-9);
        let dt = clock.frame_at(start + Duration::from_millis(14));
        assert!((dt - 4.0).abs() < 1e-9);
    }

    #[test]
    fn stalls_are_clamped() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        assert_eq!(clock.frame_at(start + Duration::from_secs(3)), 16.0);

        let mut clock = FrameClock::with_max_dt(start, 5.0);
        assert_eq!(clock.frame_at(start + Duration::from_millis(8)), 5.0);
    }

    #[test]
    fn backwards_instants_yield_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::new(start);
        assert_eq!(clock.frame_at(start - Duration::from_millis(500)), 0.0);
    }
}
