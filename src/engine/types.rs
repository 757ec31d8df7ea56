//! Optimizer seam and per-iteration report.

use crate::error::{OptimError, Result};
use crate::population::{Chromosome, EvaluatedIndividual, Evaluator, Origin, Population};
use crate::problem::{Goal, Problem, Ranking};
use rand::Rng;
use std::fmt;

/// A population-based search strategy driven by the [`Engine`](super::Engine).
///
/// Implementations own their parameters; the engine owns the random
/// generator, the problem and the goal, and hands them in on every call.
pub trait Optimizer {
    /// Length of the chromosomes this optimizer works with.
    fn dimensions(&self) -> usize;

    /// Number of individuals per generation.
    fn population_size(&self) -> usize;

    /// Checks parameters. Called by the engine before any evaluation.
    fn validate(&self) -> Result<()>;

    /// Whether batches should be evaluated on the rayon pool.
    fn parallel(&self) -> bool {
        false
    }

    /// Creates and evaluates the starting population.
    ///
    /// `seeds` are placed first (at most [`population_size`](Self::population_size)
    /// of them); remaining slots get uniform random keys.
    fn initial_population<P: Problem, R: Rng>(
        &self,
        seeds: Vec<Chromosome>,
        evaluator: &Evaluator<'_, P>,
        rng: &mut R,
    ) -> Result<Population<P::Candidate>> {
        let size = self.population_size();
        let dimensions = self.dimensions();
        if let Some(bad) = seeds.iter().find(|c| c.len() != dimensions) {
            return Err(OptimError::config(format!(
                "seed chromosome has {} keys, expected {dimensions}",
                bad.len()
            )));
        }

        let mut batch: Vec<(Chromosome, Origin)> = seeds
            .into_iter()
            .take(size)
            .map(|c| (c, Origin::Seeded))
            .collect();
        while batch.len() < size {
            batch.push((Chromosome::random(dimensions, rng), Origin::Initial));
        }

        Ok(Population::new(evaluator.evaluate(batch)?))
    }

    /// Produces the next generation from `population`.
    ///
    /// The returned population must have the same size as the input.
    fn evolve<P: Problem, R: Rng>(
        &self,
        population: &Population<P::Candidate>,
        evaluator: &Evaluator<'_, P>,
        ranking: &Ranking,
        rng: &mut R,
    ) -> Result<Population<P::Candidate>>;
}

/// Snapshot of the engine state after one iteration.
///
/// A fresh value is built every iteration and never modified once handed to
/// the termination predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationInfo<C> {
    iteration: u64,
    best: EvaluatedIndividual<C>,
    goal: Goal,
    evaluations: u64,
    last_improvement: u64,
    restarts: u64,
}

impl<C> IterationInfo<C> {
    pub(crate) fn new(
        iteration: u64,
        best: EvaluatedIndividual<C>,
        goal: Goal,
        evaluations: u64,
        last_improvement: u64,
        restarts: u64,
    ) -> Self {
        Self {
            iteration,
            best,
            goal,
            evaluations,
            last_improvement,
            restarts,
        }
    }

    /// Iteration index; 0 is the evaluated initial population.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Best individual observed across all iterations so far.
    pub fn best(&self) -> &EvaluatedIndividual<C> {
        &self.best
    }

    pub fn best_score(&self) -> f64 {
        self.best.score()
    }

    pub fn best_candidate(&self) -> &C {
        self.best.candidate()
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    /// Objective evaluations performed so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Iteration at which the current best was found.
    pub fn last_improvement(&self) -> u64 {
        self.last_improvement
    }

    /// Iterations elapsed without improving the best.
    pub fn stagnation(&self) -> u64 {
        self.iteration - self.last_improvement
    }

    /// Population restarts performed so far.
    pub fn restarts(&self) -> u64 {
        self.restarts
    }

    pub fn into_best(self) -> EvaluatedIndividual<C> {
        self.best
    }
}

impl<C> fmt::Display for IterationInfo<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "iteration {}: best score {} ({}, {:?}), {} evaluations",
            self.iteration,
            self.best.score(),
            if self.best.is_feasible() {
                "feasible"
            } else {
                "infeasible"
            },
            self.goal,
            self.evaluations
        )
    }
}
