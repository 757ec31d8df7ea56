//! Biased Random-Key Genetic Algorithm (BRKGA).
//!
//! BRKGA separates the evolutionary engine from the problem by using a
//! random-key representation: chromosomes are vectors of `f64` in `[0, 1)`,
//! and the [`Problem`](crate::problem::Problem) decodes keys into candidates.
//!
//! [`Brkga`] implements [`Optimizer`](crate::engine::Optimizer) and handles
//! population management (elite copy, mutant injection, biased crossover);
//! the [`Engine`](crate::engine::Engine) drives it.
//!
//! # References
//!
//! - Bean (1994), "Genetic algorithms and random keys for sequencing and optimization"
//! - Goncalves & Resende (2011), "Biased random-key genetic algorithms for
//!   combinatorial optimization", *J. Heuristics* 17(5), 487–525

mod config;
mod runner;

pub use config::{BrkgaConfig, DEFAULT_BIAS, DEFAULT_ELITE_FRACTION, DEFAULT_MUTANT_FRACTION};
pub use runner::Brkga;
