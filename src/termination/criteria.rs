//! Built-in termination criteria.

use super::Termination;
use crate::engine::IterationInfo;
use std::time::{Duration, Instant};

/// Stops once the iteration index reaches the limit.
///
/// `MaxIterations(0)` stops on the initial population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxIterations(pub u64);

impl<C> Termination<C> for MaxIterations {
    fn is_terminated(&self, info: &IterationInfo<C>) -> bool {
        info.iteration() >= self.0
    }
}

/// Stops once at least this many objective evaluations were spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxEvaluations(pub u64);

impl<C> Termination<C> for MaxEvaluations {
    fn is_terminated(&self, info: &IterationInfo<C>) -> bool {
        info.evaluations() >= self.0
    }
}

/// Stops once a feasible best reaches the target score in the goal's
/// direction (at or below it when minimizing, at or above when maximizing).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetScore(pub f64);

impl<C> Termination<C> for TargetScore {
    fn is_terminated(&self, info: &IterationInfo<C>) -> bool {
        info.best().is_feasible() && !info.goal().is_better(self.0, info.best_score())
    }
}

/// Stops after this many consecutive iterations without improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagnation(pub u64);

impl<C> Termination<C> for Stagnation {
    fn is_terminated(&self, info: &IterationInfo<C>) -> bool {
        info.stagnation() >= self.0
    }
}

/// Stops once the wall-clock limit has passed since construction.
///
/// The clock lives here rather than in [`IterationInfo`], so runs stay
/// reproducible; create the criterion right before starting the engine.
#[derive(Debug, Clone, Copy)]
pub struct MaxTime {
    started: Instant,
    limit: Duration,
}

impl MaxTime {
    pub fn new(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl<C> Termination<C> for MaxTime {
    fn is_terminated(&self, _info: &IterationInfo<C>) -> bool {
        self.started.elapsed() >= self.limit
    }
}
