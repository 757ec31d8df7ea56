//! Evaluated individuals and populations.

use super::chromosome::Chromosome;
use crate::problem::Ranking;

/// How an individual entered its population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Uniformly random keys in a freshly initialized population.
    Initial,
    /// A user-supplied guess or a chromosome carried over by a restart.
    Seeded,
    /// Copied unchanged from the previous generation's elite set.
    Elite,
    /// Fresh random keys injected for diversity.
    Mutant,
    /// Produced by biased crossover.
    Offspring,
}

/// A chromosome together with everything derived from it.
///
/// Candidate, score and feasibility are computed once by the
/// [`Evaluator`](super::Evaluator) and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedIndividual<C> {
    chromosome: Chromosome,
    candidate: C,
    score: f64,
    feasible: bool,
    origin: Origin,
}

impl<C> EvaluatedIndividual<C> {
    pub(crate) fn new(
        chromosome: Chromosome,
        candidate: C,
        score: f64,
        feasible: bool,
        origin: Origin,
    ) -> Self {
        Self {
            chromosome,
            candidate,
            score,
            feasible,
            origin,
        }
    }

    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    pub fn candidate(&self) -> &C {
        &self.candidate
    }

    /// Raw objective value, before any feasibility penalty.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// The same evaluation under a different origin tag.
    ///
    /// Used to carry individuals into a new generation without re-evaluation.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn into_candidate(self) -> C {
        self.candidate
    }
}

/// An ordered collection of evaluated individuals.
#[derive(Debug, Clone, PartialEq)]
pub struct Population<C> {
    individuals: Vec<EvaluatedIndividual<C>>,
}

impl<C> Population<C> {
    pub fn new(individuals: Vec<EvaluatedIndividual<C>>) -> Self {
        Self { individuals }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn individuals(&self) -> &[EvaluatedIndividual<C>] {
        &self.individuals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EvaluatedIndividual<C>> {
        self.individuals.iter()
    }

    pub fn get(&self, index: usize) -> Option<&EvaluatedIndividual<C>> {
        self.individuals.get(index)
    }

    /// Number of individuals with the given origin.
    pub fn count(&self, origin: Origin) -> usize {
        self.individuals
            .iter()
            .filter(|ind| ind.origin == origin)
            .count()
    }

    /// Indices from best to worst; ties keep population order.
    pub fn ranked(&self, ranking: &Ranking) -> Vec<usize> {
        ranking.rank(&self.individuals)
    }

    /// The best individual under `ranking`. `None` only when empty.
    pub fn best(&self, ranking: &Ranking) -> Option<&EvaluatedIndividual<C>> {
        ranking.best(&self.individuals)
    }

    pub fn into_individuals(self) -> Vec<EvaluatedIndividual<C>> {
        self.individuals
    }
}

impl<'a, C> IntoIterator for &'a Population<C> {
    type Item = &'a EvaluatedIndividual<C>;
    type IntoIter = std::slice::Iter<'a, EvaluatedIndividual<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}
