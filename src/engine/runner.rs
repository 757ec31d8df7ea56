//! The optimization loop.

use super::config::EngineConfig;
use super::types::{IterationInfo, Optimizer};
use crate::error::{OptimError, Result};
use crate::population::Evaluator;
use crate::problem::{Goal, Problem, Ranking};
use crate::random::create_rng;
use crate::termination::Termination;

/// Drives an [`Optimizer`] over a [`Problem`] until a [`Termination`] fires.
///
/// The engine holds configuration only; every call to
/// [`optimize`](Engine::optimize) is an independent run.
///
/// # Usage
///
/// ```
/// use rkopt::brkga::Brkga;
/// use rkopt::engine::{Engine, EngineConfig, IterationInfo};
/// use rkopt::error::ProblemError;
/// use rkopt::problem::{Goal, Problem};
///
/// struct Sphere;
///
/// impl Problem for Sphere {
///     type Candidate = Vec<f64>;
///     fn decode(&self, keys: &[f64]) -> Result<Vec<f64>, ProblemError> {
///         Ok(keys.iter().map(|k| 2.0 * k - 1.0).collect())
///     }
///     fn objective(&self, x: &Vec<f64>) -> Result<f64, ProblemError> {
///         Ok(x.iter().map(|v| v * v).sum())
///     }
/// }
///
/// let engine = Engine::new(EngineConfig::default().with_seed(7));
/// let info = engine
///     .optimize(&Sphere, Goal::Minimize, &Brkga::new(5, 50), &|i: &IterationInfo<Vec<f64>>| {
///         i.iteration() >= 100
///     })
///     .unwrap();
/// assert!(info.best_score() < 0.25);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs until `termination` returns `true` and returns the final report.
    ///
    /// The predicate is checked on the evaluated initial population first, so
    /// a predicate that is immediately satisfied performs no evolution step.
    ///
    /// # Errors
    ///
    /// [`OptimError::Configuration`] before any evaluation if the optimizer
    /// or engine configuration is invalid; [`OptimError::Evaluation`] as soon
    /// as the problem fails on a chromosome.
    pub fn optimize<P, O, T>(
        &self,
        problem: &P,
        goal: Goal,
        optimizer: &O,
        termination: &T,
    ) -> Result<IterationInfo<P::Candidate>>
    where
        P: Problem,
        O: Optimizer,
        T: Termination<P::Candidate> + ?Sized,
    {
        self.optimize_with_observer(problem, goal, optimizer, termination, |_| {})
    }

    /// Like [`optimize`](Engine::optimize), calling `observer` with every
    /// report before the termination check.
    pub fn optimize_with_observer<P, O, T, F>(
        &self,
        problem: &P,
        goal: Goal,
        optimizer: &O,
        termination: &T,
        mut observer: F,
    ) -> Result<IterationInfo<P::Candidate>>
    where
        P: Problem,
        O: Optimizer,
        T: Termination<P::Candidate> + ?Sized,
        F: FnMut(&IterationInfo<P::Candidate>),
    {
        optimizer.validate()?;
        self.config.validate()?;
        let guesses = self.config.guesses(optimizer.dimensions())?;

        let ranking = Ranking::with_policy(goal, self.config.feasibility);
        let evaluator = Evaluator::new(problem)
            .with_goal(goal)
            .with_parallel(optimizer.parallel());
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);

        log::info!(
            "engine start: goal {:?}, dimensions {}, population {}, seed {}",
            goal,
            optimizer.dimensions(),
            optimizer.population_size(),
            seed
        );

        let mut population = optimizer.initial_population(guesses, &evaluator, &mut rng)?;
        let mut best = population
            .best(&ranking)
            .cloned()
            .ok_or_else(|| OptimError::config("optimizer produced an empty population"))?;

        let mut iteration: u64 = 0;
        let mut last_improvement: u64 = 0;
        let mut last_restart: u64 = 0;
        let mut restarts: u64 = 0;

        loop {
            let info = IterationInfo::new(
                iteration,
                best.clone(),
                goal,
                evaluator.evaluations(),
                last_improvement,
                restarts,
            );
            observer(&info);
            if termination.is_terminated(&info) {
                log::info!(
                    "engine terminated at iteration {} with best score {} after {} evaluations",
                    iteration,
                    best.score(),
                    evaluator.evaluations()
                );
                return Ok(info);
            }

            iteration += 1;

            if let Some(limit) = self.config.restart_after {
                let idle = iteration - 1 - last_improvement.max(last_restart);
                if idle >= limit {
                    log::debug!("restart at iteration {iteration} after {idle} idle iterations");
                    population = optimizer.initial_population(
                        vec![best.chromosome().clone()],
                        &evaluator,
                        &mut rng,
                    )?;
                    restarts += 1;
                    last_restart = iteration;
                }
            }

            population = optimizer.evolve(&population, &evaluator, &ranking, &mut rng)?;

            if let Some(candidate) = population.best(&ranking) {
                if ranking.is_better(candidate, &best) {
                    best = candidate.clone();
                    last_improvement = iteration;
                }
            }

            log::debug!("iteration {iteration} finished, best score {}", best.score());
        }
    }
}
