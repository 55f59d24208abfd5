//! Shared fixtures for integration tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reproducible stream of booleans for building large fixtures.
pub struct PseudorandomBooleanGenerator {
    rng: StdRng,
}

impl PseudorandomBooleanGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_bool(&mut self) -> bool {
        self.rng.random()
    }
}

impl Iterator for PseudorandomBooleanGenerator {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        Some(self.next_bool())
    }
}
