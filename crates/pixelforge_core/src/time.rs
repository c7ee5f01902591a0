//! Frame timing utilities.
//!
//! `Time` is produced once per tick by the engine loop.  Unlike a wall-clock
//! timer, the [`FrameClock`] is driven with explicit timestamps: the host
//! passes the instant at which its frame callback fired, which keeps ticks
//! reproducible in tests.
//!
//! # Example
//! ```rust,ignore
//! let mut clock = FrameClock::starting_at(Instant::now());
//! // ... inside the host's per-frame callback
//! let time = clock.tick_at(Instant::now());
//! log::trace!("frame {} took {:.3}s", time.frame_count, time.delta);
//! ```

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;
#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;

/// A snapshot of timing information for the current tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Time {
    /// Seconds elapsed since the previous tick (or since `start` for the
    /// first one).  Never negative.
    pub delta: f32,

    /// Total seconds elapsed since the clock started.
    pub elapsed: f64,

    /// Number of ticks completed before this one (0 for the first tick).
    pub frame_count: u64,

    /// Instantaneous frames-per-second derived from `delta`.
    pub fps: f32,
}

// ─── Clock ─────────────────────────────────────────────────────────────────

/// Stateful timer that produces [`Time`] snapshots.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start:       Instant,
    last_tick:   Instant,
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock whose origin is `now`.
    pub fn starting_at(now: Instant) -> Self {
        Self {
            start:       now,
            last_tick:   now,
            frame_count: 0,
        }
    }

    /// Advance by one tick observed at `now`.
    ///
    /// Timestamps older than the previous tick yield a zero delta rather than
    /// a negative one.
    pub fn tick_at(&mut self, now: Instant) -> Time {
        let delta   = now.saturating_duration_since(self.last_tick).as_secs_f32();
        let elapsed = now.saturating_duration_since(self.start).as_secs_f64();
        let fps     = if delta > 0.0 { 1.0 / delta } else { 0.0 };
        let count   = self.frame_count;

        if now > self.last_tick {
            self.last_tick = now;
        }
        self.frame_count += 1;

        Time { delta, elapsed, frame_count: count, fps }
    }

    /// Number of ticks produced so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn delta_measures_time_between_ticks() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);

        let first = clock.tick_at(t0 + Duration::from_millis(16));
        assert!((first.delta - 0.016).abs() < 1e-4);
        assert_eq!(first.frame_count, 0);

        let second = clock.tick_at(t0 + Duration::from_millis(48));
        assert!((second.delta - 0.032).abs() < 1e-4);
        assert!((second.elapsed - 0.048).abs() < 1e-6);
        assert_eq!(second.frame_count, 1);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn stale_timestamp_gives_zero_delta() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0 + Duration::from_millis(10));
        let time = clock.tick_at(t0);
        assert_eq!(time.delta, 0.0);
        assert_eq!(time.fps, 0.0);
    }
}
