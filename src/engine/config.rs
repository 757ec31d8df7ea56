//! Engine configuration.

use crate::error::{OptimError, Result};
use crate::population::Chromosome;
use crate::problem::FeasibilityPolicy;

/// Configuration for [`Engine`](super::Engine).
///
/// Optimizer parameters live in the optimizer's own config; this one only
/// covers what the loop itself needs.
///
/// # Examples
///
/// ```
/// use rkopt::engine::EngineConfig;
/// use rkopt::problem::FeasibilityPolicy;
///
/// let config = EngineConfig::default()
///     .with_seed(42)
///     .with_restart_after(50)
///     .with_feasibility(FeasibilityPolicy::Penalty(1e3))
///     .with_initial_guess(vec![0.5; 10]);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Random seed for reproducibility. `None` draws one per run.
    pub seed: Option<u64>,

    /// Re-initialize the population after this many iterations without
    /// improvement, keeping the best chromosome. `None` disables restarts.
    pub restart_after: Option<u64>,

    /// Ranking policy for infeasible individuals.
    pub feasibility: FeasibilityPolicy,

    /// Chromosomes placed at the front of the initial population.
    pub initial_guesses: Vec<Vec<f64>>,
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_restart_after(mut self, iterations: u64) -> Self {
        self.restart_after = Some(iterations);
        self
    }

    pub fn with_feasibility(mut self, policy: FeasibilityPolicy) -> Self {
        self.feasibility = policy;
        self
    }

    pub fn with_initial_guess(mut self, keys: Vec<f64>) -> Self {
        self.initial_guesses.push(keys);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.restart_after == Some(0) {
            return Err(OptimError::config("restart_after must be at least 1"));
        }
        if let FeasibilityPolicy::Penalty(p) = self.feasibility {
            if !p.is_finite() || p < 0.0 {
                return Err(OptimError::config(format!(
                    "feasibility penalty must be finite and non-negative, got {p}"
                )));
            }
        }
        Ok(())
    }

    /// Initial guesses as chromosomes of the given length.
    pub(crate) fn guesses(&self, dimensions: usize) -> Result<Vec<Chromosome>> {
        self.initial_guesses
            .iter()
            .enumerate()
            .map(|(i, keys)| {
                if keys.len() != dimensions {
                    return Err(OptimError::config(format!(
                        "initial guess {i} has {} keys, expected {dimensions}",
                        keys.len()
                    )));
                }
                Chromosome::from_keys(keys.clone()).map_err(|e| match e {
                    OptimError::Configuration(msg) => {
                        OptimError::config(format!("initial guess {i}: {msg}"))
                    }
                    other => other,
                })
            })
            .collect()
    }
}
