//! Deterministic simulation RNG.
//!
//! The only randomness in the navigation stack is the optional random
//! starting offset of a patrol tour.  It is drawn from a `SmallRng` seeded
//! from `SimConfig::seed`, so the same seed always yields the same tour start
//! and therefore the same trajectory.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for simulation-level decisions.
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform index in `0..len`.  `len` must be non-zero.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}
