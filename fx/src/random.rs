//! Injected random source for spawn geometry.
//!
//! The starfield never reaches for ambient randomness directly: callers pass
//! a [`RandomSource`] so the browser build can use `Math.random` while tests
//! drive the engine with a seeded, reproducible stream.

#[cfg(test)]
#[path = "random_test.rs"]
mod random_test;

/// A stream of uniform random numbers in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform value in `[min, min + spread)`.
    fn in_range(&mut self, min: f64, spread: f64) -> f64 {
        self.next_f64().mul_add(spread, min)
    }
}

/// Browser-backed source using `Math.random`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Deterministic xorshift64* source for tests and reproducible runs.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// Create a source from a non-zero seed; a zero seed is bumped to 1
    /// because xorshift has a fixed point at zero.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        let bits = x.wrapping_mul(0x2545_F491_4F6C_DD1D);
        // Top 53 bits give a uniform double in [0, 1).
        (bits >> 11) as f64 / (1u64 << 53) as f64
    }
}
