//! Deterministic random number generation.
//!
//! RULE: Nothing in the dashboard may call a platform or thread-local RNG.
//! Every random draw flows through a SeededRng built from an explicit seed
//! at the start of the call that needs it, and dropped when it returns.
//!
//! Independent consumers take their own stream, derived from
//! (seed XOR stream_index * golden-ratio constant), so adding a new
//! consumer never shifts the draws of an existing one.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single consumer.
pub struct SeededRng {
    pub stream: RngStream,
    inner: Pcg64Mcg,
}

impl SeededRng {
    pub fn new(seed: u64, stream: RngStream) -> Self {
        let derived_seed = seed ^ (stream as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            stream,
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Uniform float in [low, high).
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    /// Pick one element uniformly. Panics on an empty slice.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> T {
        let index = self.next_u64_below(items.len() as u64) as usize;
        items[index]
    }
}

/// Stable stream assignments.
/// NEVER reorder or remove entries; only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum RngStream {
    Incidents = 0,
}

impl RngStream {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Incidents => "incidents",
        }
    }
}
