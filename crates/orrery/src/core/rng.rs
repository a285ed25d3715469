//! Seedable pseudo-random number generator (xorshift64).

/// Seedable pseudo-random number generator (xorshift64).
/// Deterministic, so the same seed always yields the same sky.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fill an f32 mantissa exactly.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform float in [-half, half).
    pub fn next_centered(&mut self, half: f32) -> f32 {
        (self.next_f32() - 0.5) * 2.0 * half
    }
}
