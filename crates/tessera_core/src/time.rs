//! Frame timing utilities.
//!
//! The runner owns a [`TimeClock`] and calls [`TimeClock::tick`] once per
//! redraw; the resulting [`Time`] snapshot is what the layout rebuild and the
//! periodic frame-rate log read.

use std::time::{Duration, Instant};

/// Longest frame delta reported; stalls (window drags, debugger pauses)
/// are clamped to this.
const MAX_DELTA: f32 = 0.1;

/// A snapshot of timing information for the current frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    /// Seconds elapsed since the previous frame, clamped to `MAX_DELTA`.
    pub delta: f32,

    /// Total seconds elapsed since the clock started.
    pub elapsed: f64,

    /// Number of frames ticked before this one (0 for the first frame).
    pub frame_count: u64,

    /// Instantaneous frames-per-second derived from `delta`.
    pub fps: f32,
}

/// Stateful timer that produces [`Time`] snapshots.
pub struct TimeClock {
    start: Instant,
    last_tick: Instant,
    frame_count: u64,
}

impl TimeClock {
    /// Create a new clock, starting the epoch now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        Self {
            start: now,
            last_tick: now,
            frame_count: 0,
        }
    }

    /// Advance by one frame.  Returns the [`Time`] snapshot for this frame.
    pub fn tick(&mut self) -> Time {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> Time {
        let raw_dt = now.saturating_duration_since(self.last_tick).as_secs_f32();
        let delta = raw_dt.min(MAX_DELTA);
        let elapsed = now.saturating_duration_since(self.start).as_secs_f64();
        let fps = if delta > 0.0 { 1.0 / delta } else { 0.0 };
        let count = self.frame_count;

        self.last_tick = now;
        self.frame_count += 1;

        Time {
            delta,
            elapsed,
            frame_count: count,
            fps,
        }
    }

    /// Time since the clock started.
    pub fn uptime(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for TimeClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_counter_starts_at_zero() {
        let start = Instant::now();
        let mut clock = TimeClock::starting_at(start);
        let first = clock.tick_at(start + Duration::from_millis(16));
        let second = clock.tick_at(start + Duration::from_millis(32));
        assert_eq!(first.frame_count, 0);
        assert_eq!(second.frame_count, 1);
        assert!((second.delta - 0.016).abs() < 1e-4);
        assert!((second.elapsed - 0.032).abs() < 1e-6);
    }

    #[test]
    fn long_stalls_are_clamped() {
        let start = Instant::now();
        let mut clock = TimeClock::starting_at(start);
        let t = clock.tick_at(start + Duration::from_secs(3));
        assert_eq!(t.delta, MAX_DELTA);
        assert!((t.elapsed - 3.0).abs() < 1e-6);
        assert!((t.fps - 10.0).abs() < 1e-3);
    }
}
