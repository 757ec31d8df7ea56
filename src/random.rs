//! Seeded random sources.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates the run-scoped generator from a seed.
///
/// Every random decision of a run (initial keys, mutants, parent picks,
/// gene inheritance) is drawn from the generator returned here, so two runs
/// with the same seed are identical.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws `n` independent uniform keys in `[0, 1)`.
pub fn random_keys<R: Rng>(n: usize, rng: &mut R) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(0.0..1.0)).collect()
}
