//! Fixed-rate tick scheduling, independent of the frame rate.

/// Elapsed ticks beyond this many intervals are dropped instead of replayed.
pub const MAX_CATCH_UP: u32 = 4;

/// Tracks when the last simulation tick was due.
///
/// Time is plain seconds, so the loop can feed it `get_time()` and tests can
/// feed it a simulated clock.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickClock {
    last_tick: f64,
}

impl TickClock {
    pub fn new(now: f64) -> Self {
        Self { last_tick: now }
    }

    /// Starts counting from `now`, e.g. when play starts or resumes.
    pub fn reset(&mut self, now: f64) {
        self.last_tick = now;
    }

    /// Number of ticks due at `now` for a tick every `interval` seconds.
    ///
    /// Ticks are scheduled on a fixed grid, so frame jitter does not drift
    /// the rate and a short interval yields several ticks per frame. After a
    /// stall longer than [`MAX_CATCH_UP`] intervals a single tick runs.
    pub fn due(&mut self, now: f64, interval: f64) -> u32 {
        if interval <= 0.0 {
            return 0;
        }
        if now - self.last_tick > interval * f64::from(MAX_CATCH_UP) {
            self.last_tick = now;
            return 1;
        }

        let mut ticks = 0;
        while now - self.last_tick >= interval {
            self.last_tick += interval;
            ticks += 1;
        }
        ticks
    }
}
