//! Injectable noise source for the jitter terms
//!
//! The scoring formulas include uniform random terms, which makes them
//! non-deterministic by design. Routing every draw through this trait lets
//! tests pin the noise and assert exact outputs.

use rand::Rng;

pub trait NoiseSource: Send + Sync {
    /// Draw a uniform value in `[lo, hi)`.
    fn uniform(&self, lo: f64, hi: f64) -> f64;
}

/// Production noise source backed by the thread-local RNG.
pub struct ThreadRngNoise;

impl NoiseSource for ThreadRngNoise {
    fn uniform(&self, lo: f64, hi: f64) -> f64 {
        rand::rng().random_range(lo..hi)
    }
}

/// Deterministic noise source for tests.
///
/// Holds a fraction in `[0, 1]`; every draw returns `lo + (hi - lo) * fraction`,
/// so 0.0 pins the low end of each range, 0.5 the midpoint, 1.0 the high end.
pub struct FixedNoise {
    fraction: f64,
}

impl FixedNoise {
    pub fn new(fraction: f64) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
        }
    }
}

impl NoiseSource for FixedNoise {
    fn uniform(&self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.fraction
    }
}
