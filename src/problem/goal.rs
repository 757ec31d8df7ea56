//! Goal direction and the comparator derived from it.

use crate::population::EvaluatedIndividual;
use std::cmp::Ordering;

/// Direction of optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Goal {
    /// Lower scores are better.
    Minimize,
    /// Higher scores are better.
    Maximize,
}

impl Goal {
    /// Compares two raw scores; `Ordering::Less` means `a` is better.
    ///
    /// `0.0` and `-0.0` compare equal.
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        // -0.0 + 0.0 == +0.0
        let (a, b) = (a + 0.0, b + 0.0);
        match self {
            Goal::Minimize => a.total_cmp(&b),
            Goal::Maximize => b.total_cmp(&a),
        }
    }

    /// The worst possible score under this goal.
    pub fn worst(self) -> f64 {
        match self {
            Goal::Minimize => f64::INFINITY,
            Goal::Maximize => f64::NEG_INFINITY,
        }
    }

    /// Returns `true` if `a` is strictly better than `b`.
    pub fn is_better(self, a: f64, b: f64) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Moves `score` away from the optimum by `amount`.
    pub fn worsen(self, score: f64, amount: f64) -> f64 {
        match self {
            Goal::Minimize => score + amount,
            Goal::Maximize => score - amount,
        }
    }
}

/// How infeasible individuals are ranked against feasible ones.
///
/// Infeasibility is never an error: infeasible individuals stay in the
/// population and are ranked by this policy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeasibilityPolicy {
    /// Every feasible individual beats every infeasible one. Infeasible
    /// individuals are ordered among themselves by raw score.
    #[default]
    RankLast,
    /// Infeasible scores are worsened by the given amount in the goal's
    /// direction, then compared like any other score.
    Penalty(f64),
}

/// The single comparator used for every ranking and best-so-far decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranking {
    goal: Goal,
    policy: FeasibilityPolicy,
}

impl Ranking {
    /// Creates a ranking with the default [`FeasibilityPolicy::RankLast`].
    pub fn new(goal: Goal) -> Self {
        Self::with_policy(goal, FeasibilityPolicy::default())
    }

    pub fn with_policy(goal: Goal, policy: FeasibilityPolicy) -> Self {
        Self { goal, policy }
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    pub fn policy(&self) -> FeasibilityPolicy {
        self.policy
    }

    /// Score as seen by the comparator, after applying the penalty policy.
    pub fn effective_score<C>(&self, individual: &EvaluatedIndividual<C>) -> f64 {
        match self.policy {
            FeasibilityPolicy::Penalty(p) if !individual.is_feasible() => {
                self.goal.worsen(individual.score(), p)
            }
            _ => individual.score(),
        }
    }

    /// Orders two individuals; `Ordering::Less` means `a` ranks higher.
    pub fn compare<C>(&self, a: &EvaluatedIndividual<C>, b: &EvaluatedIndividual<C>) -> Ordering {
        if let FeasibilityPolicy::RankLast = self.policy {
            match (a.is_feasible(), b.is_feasible()) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => {}
            }
        }
        self.goal
            .compare(self.effective_score(a), self.effective_score(b))
    }

    /// Returns `true` if `a` ranks strictly above `b`.
    pub fn is_better<C>(&self, a: &EvaluatedIndividual<C>, b: &EvaluatedIndividual<C>) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Indices of `individuals` from best to worst.
    ///
    /// The sort is stable, so ties keep their original order.
    pub fn rank<C>(&self, individuals: &[EvaluatedIndividual<C>]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..individuals.len()).collect();
        order.sort_by(|&a, &b| self.compare(&individuals[a], &individuals[b]));
        order
    }

    /// The best individual, first one wins on ties. `None` when empty.
    pub fn best<'a, C>(
        &self,
        individuals: &'a [EvaluatedIndividual<C>],
    ) -> Option<&'a EvaluatedIndividual<C>> {
        individuals.iter().reduce(|best, ind| {
            if self.is_better(ind, best) {
                ind
            } else {
                best
            }
        })
    }
}
