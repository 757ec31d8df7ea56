//! Random-key chromosome.

use crate::error::{OptimError, Result};
use crate::random::random_keys;
use rand::Rng;

/// A vector of keys in `[0, 1)`.
///
/// Chromosomes are never modified after construction; crossover and mutation
/// always produce new ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    keys: Vec<f64>,
}

impl Chromosome {
    /// Builds a chromosome from user-supplied keys.
    ///
    /// Fails if any key is not a finite value in `[0, 1)`.
    pub fn from_keys(keys: Vec<f64>) -> Result<Self> {
        if let Some((i, k)) = keys
            .iter()
            .enumerate()
            .find(|(_, k)| !(0.0..1.0).contains(*k))
        {
            return Err(OptimError::config(format!(
                "key {i} ({k}) is outside [0, 1)"
            )));
        }
        Ok(Self { keys })
    }

    /// Draws a chromosome of `len` uniform keys.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            keys: random_keys(len, rng),
        }
    }

    /// Wraps keys already known to lie in `[0, 1)`.
    pub(crate) fn new_unchecked(keys: Vec<f64>) -> Self {
        debug_assert!(keys.iter().all(|k| (0.0..1.0).contains(k)));
        Self { keys }
    }

    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn into_keys(self) -> Vec<f64> {
        self.keys
    }
}
