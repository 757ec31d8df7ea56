//! Turning chromosomes into evaluated individuals.

use super::chromosome::Chromosome;
use super::types::{EvaluatedIndividual, Origin};
use crate::error::{NanObjective, OptimError, ProblemError, Result};
use crate::problem::{Goal, Problem};
use std::cell::Cell;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluates chromosomes against a problem and counts evaluations.
///
/// This is the only place where a problem is called, so candidate, score and
/// feasibility of an [`EvaluatedIndividual`] always come from its chromosome.
///
/// A failing or NaN objective is an error only for feasible candidates. An
/// infeasible candidate whose objective fails gets [`Goal::worst`] as its
/// score (the goal is [`Goal::Minimize`] unless set with
/// [`with_goal`](Self::with_goal)).
pub struct Evaluator<'p, P: Problem> {
    problem: &'p P,
    goal: Goal,
    parallel: bool,
    evaluations: Cell<u64>,
}

impl<'p, P: Problem> Evaluator<'p, P> {
    pub fn new(problem: &'p P) -> Self {
        Self {
            problem,
            goal: Goal::Minimize,
            parallel: false,
            evaluations: Cell::new(0),
        }
    }

    /// Evaluates batches on the rayon pool.
    ///
    /// Only effective with the `parallel` feature; otherwise batches are
    /// evaluated sequentially. Results are identical either way.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = goal;
        self
    }

    /// Number of chromosomes evaluated so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations.get()
    }

    /// Evaluates a batch, preserving its order.
    ///
    /// The first failing chromosome (lowest index) aborts the batch with
    /// [`OptimError::Evaluation`].
    pub fn evaluate(
        &self,
        batch: Vec<(Chromosome, Origin)>,
    ) -> Result<Vec<EvaluatedIndividual<P::Candidate>>> {
        #[cfg(feature = "parallel")]
        {
            if self.parallel {
                return self.evaluate_parallel(batch);
            }
        }
        #[cfg(not(feature = "parallel"))]
        {
            if self.parallel {
                log::debug!("parallel evaluation requested without the `parallel` feature");
            }
        }
        self.evaluate_sequential(batch)
    }

    #[cfg(feature = "parallel")]
    fn evaluate_parallel(
        &self,
        batch: Vec<(Chromosome, Origin)>,
    ) -> Result<Vec<EvaluatedIndividual<P::Candidate>>> {
        let (problem, goal) = (self.problem, self.goal);
        let size = batch.len() as u64;
        let results: Vec<std::result::Result<_, ProblemError>> = batch
            .into_par_iter()
            .map(|(chr, origin)| evaluate_one(problem, goal, chr, origin))
            .collect();
        self.evaluations.set(self.evaluations.get() + size);
        results
            .into_iter()
            .enumerate()
            .map(|(index, r)| r.map_err(|source| OptimError::Evaluation { index, source }))
            .collect()
    }

    fn evaluate_sequential(
        &self,
        batch: Vec<(Chromosome, Origin)>,
    ) -> Result<Vec<EvaluatedIndividual<P::Candidate>>> {
        let mut evaluated = Vec::with_capacity(batch.len());
        for (index, (chr, origin)) in batch.into_iter().enumerate() {
            self.evaluations.set(self.evaluations.get() + 1);
            let ind = evaluate_one(self.problem, self.goal, chr, origin)
                .map_err(|source| OptimError::Evaluation { index, source })?;
            evaluated.push(ind);
        }
        Ok(evaluated)
    }
}

fn evaluate_one<P: Problem>(
    problem: &P,
    goal: Goal,
    chromosome: Chromosome,
    origin: Origin,
) -> std::result::Result<EvaluatedIndividual<P::Candidate>, ProblemError> {
    let candidate = problem.decode(chromosome.keys())?;
    let feasible = problem.is_feasible(&candidate)?;
    let score = match problem.objective(&candidate) {
        Ok(score) if !score.is_nan() => score,
        Ok(_) if feasible => return Err(Box::new(NanObjective)),
        Err(err) if feasible => return Err(err),
        // infeasible and unscorable
        _ => goal.worst(),
    };
    Ok(EvaluatedIndividual::new(
        chromosome, candidate, score, feasible, origin,
    ))
}
