/// Session clock sampled once per rendered frame.
///
/// Elapsed time only moves forward. Anything that must be frame-rate
/// independent derives from `elapsed()`; anything that intentionally
/// advances per frame reads `frame()`.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Seconds since the session started.
    elapsed: f64,
    /// Number of ticks seen so far.
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame of `frame_dt` seconds.
    /// Negative or non-finite deltas count as a frame but add no time.
    pub fn advance(&mut self, frame_dt: f32) {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.elapsed += frame_dt as f64;
        }
        self.frame += 1;
    }

    /// Jump to an absolute time. Times earlier than the current one are ignored.
    pub fn seek(&mut self, elapsed: f64) {
        if elapsed.is_finite() && elapsed > self.elapsed {
            self.elapsed = elapsed;
        }
    }

    /// Back to t = 0, frame 0.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.frame = 0;
    }

    /// Seconds since start.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Ticks since start.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let clock = FrameClock::new();
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.frame(), 0);
    }

    #[test]
    fn advance_sums_frame_time() {
        let mut clock = FrameClock::new();
        for _ in 0..60 {
            clock.advance(1.0 / 60.0);
        }
        assert!((clock.elapsed() - 1.0).abs() < 1e-5, "elapsed was {}", clock.elapsed());
        assert_eq!(clock.frame(), 60);
    }

    #[test]
    fn bad_deltas_never_rewind() {
        let mut clock = FrameClock::new();
        clock.advance(0.5);
        clock.advance(-1.0);
        clock.advance(f32::NAN);
        assert_eq!(clock.elapsed(), 0.5);
        assert_eq!(clock.frame(), 3);
    }

    #[test]
    fn seek_is_monotonic() {
        let mut clock = FrameClock::new();
        clock.seek(10.0);
        assert_eq!(clock.elapsed(), 10.0);
        clock.seek(4.0);
        assert_eq!(clock.elapsed(), 10.0);
    }

    #[test]
    fn reset_restarts_session() {
        let mut clock = FrameClock::new();
        clock.advance(2.0);
        clock.reset();
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.frame(), 0);
    }
}
