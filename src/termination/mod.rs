//! Stopping criteria evaluated once per iteration.
//!
//! Any `Fn(&IterationInfo<C>) -> bool` closure is a [`Termination`]; the
//! built-in criteria cover the common cases and can be combined with
//! [`AnyOf`].

mod criteria;

pub use criteria::{MaxEvaluations, MaxIterations, MaxTime, Stagnation, TargetScore};

use crate::engine::IterationInfo;

/// Decides whether the engine should stop.
///
/// Called with every [`IterationInfo`], including iteration 0, before the
/// next generation is produced. Implementations must not have side effects
/// on the run.
pub trait Termination<C> {
    /// Returns `true` when the run should stop.
    fn is_terminated(&self, info: &IterationInfo<C>) -> bool;
}

impl<C, F> Termination<C> for F
where
    F: Fn(&IterationInfo<C>) -> bool,
{
    fn is_terminated(&self, info: &IterationInfo<C>) -> bool {
        self(info)
    }
}

/// Stops as soon as any of its criteria stops.
///
/// ```
/// use rkopt::termination::{AnyOf, MaxIterations, TargetScore};
///
/// let stop = AnyOf::<Vec<f64>>::new()
///     .with(MaxIterations(1000))
///     .with(TargetScore(1e-6));
/// ```
pub struct AnyOf<C> {
    criteria: Vec<Box<dyn Termination<C>>>,
}

impl<C> AnyOf<C> {
    pub fn new() -> Self {
        Self {
            criteria: Vec::new(),
        }
    }

    pub fn with<T: Termination<C> + 'static>(mut self, criterion: T) -> Self {
        self.criteria.push(Box::new(criterion));
        self
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl<C> Default for AnyOf<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Termination<C> for AnyOf<C> {
    fn is_terminated(&self, info: &IterationInfo<C>) -> bool {
        self.criteria.iter().any(|c| c.is_terminated(info))
    }
}
