//! BRKGA configuration.

use crate::error::{OptimError, Result};

/// Default share of the population kept as elite.
pub const DEFAULT_ELITE_FRACTION: f64 = 0.25;

/// Default share of the population replaced by random mutants.
pub const DEFAULT_MUTANT_FRACTION: f64 = 0.20;

/// Default probability of inheriting the elite parent's key.
pub const DEFAULT_BIAS: f64 = 0.70;

/// Configuration for the BRKGA optimizer.
///
/// # Parameters
///
/// Each generation consists of `elite_size` elites, `mutant_count()` mutants
/// and crossover offspring filling the rest, so
/// `elite_size + mutant_count() <= population_size` must hold and
/// `elite_size < population_size` leaves a non-elite parent pool.
///
/// # Examples
///
/// ```
/// use rkopt::brkga::BrkgaConfig;
///
/// let config = BrkgaConfig::new(10, 1000) // 10 random keys, 1000 individuals
///     .with_elite_size(150)
///     .with_mutant_fraction(0.15)
///     .with_bias(0.70);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.mutant_count(), 150);
/// assert_eq!(config.offspring_count(), 700);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrkgaConfig {
    /// Number of random keys per chromosome.
    pub dimensions: usize,

    /// Total population size.
    pub population_size: usize,

    /// Number of top individuals preserved verbatim.
    ///
    /// `None` uses [`DEFAULT_ELITE_FRACTION`] of the population, rounded.
    pub elite_size: Option<usize>,

    /// Fraction of the population replaced by random mutants each
    /// generation. The count is rounded to the nearest integer.
    pub mutant_fraction: f64,

    /// Probability that an offspring inherits the elite parent's key during
    /// biased uniform crossover. Must lie in `(0.5, 1.0]`.
    pub bias: f64,

    /// Whether to evaluate chromosomes in parallel using rayon.
    ///
    /// Requires the `parallel` feature; results do not depend on it.
    pub parallel: bool,
}

impl BrkgaConfig {
    /// Creates a configuration with the given chromosome length and
    /// population size and default fractions.
    pub fn new(dimensions: usize, population_size: usize) -> Self {
        Self {
            dimensions,
            population_size,
            elite_size: None,
            mutant_fraction: DEFAULT_MUTANT_FRACTION,
            bias: DEFAULT_BIAS,
            parallel: false,
        }
    }

    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = Some(n);
        self
    }

    pub fn with_mutant_fraction(mut self, f: f64) -> Self {
        self.mutant_fraction = f;
        self
    }

    pub fn with_bias(mut self, p: f64) -> Self {
        self.bias = p;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of elites per generation.
    pub fn elite_count(&self) -> usize {
        self.elite_size
            .unwrap_or_else(|| (self.population_size as f64 * DEFAULT_ELITE_FRACTION).round() as usize)
    }

    /// Number of mutants per generation.
    pub fn mutant_count(&self) -> usize {
        (self.population_size as f64 * self.mutant_fraction).round() as usize
    }

    /// Number of crossover offspring per generation.
    pub fn offspring_count(&self) -> usize {
        self.population_size
            .saturating_sub(self.elite_count() + self.mutant_count())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions == 0 {
            return Err(OptimError::config("dimensions must be at least 1"));
        }
        if self.population_size == 0 {
            return Err(OptimError::config("population_size must be at least 1"));
        }
        let elites = self.elite_count();
        if elites == 0 {
            return Err(OptimError::config("elite_size must be at least 1"));
        }
        if elites >= self.population_size {
            return Err(OptimError::config(format!(
                "elite_size ({elites}) must be less than population_size ({})",
                self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutant_fraction) {
            return Err(OptimError::config(format!(
                "mutant_fraction must be in [0, 1], got {}",
                self.mutant_fraction
            )));
        }
        let mutants = self.mutant_count();
        if elites + mutants > self.population_size {
            return Err(OptimError::config(format!(
                "elite_size ({elites}) + mutants ({mutants}) exceeds population_size ({})",
                self.population_size
            )));
        }
        if !(self.bias > 0.5 && self.bias <= 1.0) {
            return Err(OptimError::config(format!(
                "bias must be in (0.5, 1.0], got {}",
                self.bias
            )));
        }
        Ok(())
    }
}
