//! Random-key chromosomes, evaluated individuals and populations.
//!
//! - [`Chromosome`]: keys in `[0, 1)`, never modified after construction
//! - [`EvaluatedIndividual`]: chromosome plus candidate, score and feasibility
//! - [`Population`]: ordered collection ranked through a
//!   [`Ranking`](crate::problem::Ranking)
//! - [`Evaluator`]: the only path from a chromosome to an evaluated individual

mod chromosome;
mod evaluator;
mod types;

pub use chromosome::Chromosome;
pub use evaluator::Evaluator;
pub use types::{EvaluatedIndividual, Origin, Population};
