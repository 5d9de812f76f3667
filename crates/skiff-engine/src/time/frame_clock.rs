use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick (or the last reset), in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// One clock per window. Deltas are the raw elapsed time, never clamped:
/// a stall shows up as one long frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
}

impl FrameClock {
    /// Creates a clock whose baseline is now.
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
        }
    }

    /// Resets the clock baseline.
    ///
    /// The runtime calls this once initialization finishes so loading time
    /// does not leak into the first frame.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt: Duration = now.saturating_duration_since(self.last);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclamped_delta_is_elapsed_time() {
        let mut clock = FrameClock::new();
        let start = clock.last;

        let ft = clock.tick_at(start + Duration::from_millis(500));
        assert!((ft.dt - 0.5).abs() < 1e-6);
        assert_eq!(ft.frame_index, 0);

        let ft = clock.tick_at(start + Duration::from_millis(516));
        assert!((ft.dt - 0.016).abs() < 1e-6);
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn long_stalls_are_not_clamped() {
        let mut clock = FrameClock::new();
        let start = clock.last;

        assert!((clock.tick_at(start + Duration::from_secs(3)).dt - 3.0).abs() < 1e-6);
    }

    #[test]
    fn reset_moves_the_baseline() {
        let mut clock = FrameClock::new();
        clock.reset();
        let start = clock.last;

        let ft = clock.tick_at(start + Duration::from_millis(20));
        assert!((ft.dt - 0.02).abs() < 1e-6);
        assert_eq!(ft.frame_index, 0);
    }

    #[test]
    fn time_going_backwards_yields_zero() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        clock.tick_at(start + Duration::from_millis(10));

        assert_eq!(clock.tick_at(start).dt, 0.0);
    }
}
