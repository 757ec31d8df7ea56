//! Random-key optimization engine.
//!
//! A user describes a problem by implementing [`problem::Problem`]: how to
//! decode a chromosome of keys in `[0, 1)` into a candidate, how to score it
//! and whether it is feasible. An [`engine::Engine`] then drives an
//! [`engine::Optimizer`] over that problem until a caller-supplied
//! [`termination::Termination`] fires.
//!
//! - **Engine**: owns the loop, the seeded random generator, best-so-far
//!   tracking under a [`problem::Goal`], optional restarts
//! - **BRKGA**: Biased Random-Key Genetic Algorithm: elite copy, mutant
//!   injection and biased uniform crossover over random keys
//! - **Termination**: closures or built-in criteria (iterations,
//!   evaluations, target score, stagnation, wall clock)
//!
//! # Example
//!
//! ```
//! use rkopt::brkga::Brkga;
//! use rkopt::engine::{Engine, EngineConfig};
//! use rkopt::error::ProblemError;
//! use rkopt::problem::{Goal, Problem};
//! use rkopt::termination::MaxIterations;
//!
//! /// Rastrigin on [-5.12, 5.12]^n.
//! struct Rastrigin { dim: usize }
//!
//! impl Problem for Rastrigin {
//!     type Candidate = Vec<f64>;
//!
//!     fn decode(&self, keys: &[f64]) -> Result<Vec<f64>, ProblemError> {
//!         Ok(keys.iter().map(|k| -5.12 + k * 10.24).collect())
//!     }
//!
//!     fn objective(&self, x: &Vec<f64>) -> Result<f64, ProblemError> {
//!         let sum: f64 = x
//!             .iter()
//!             .map(|v| v * v - 10.0 * (2.0 * std::f64::consts::PI * v).cos())
//!             .sum();
//!         Ok(10.0 * self.dim as f64 + sum)
//!     }
//! }
//!
//! let engine = Engine::new(EngineConfig::default().with_seed(42));
//! let info = engine
//!     .optimize(&Rastrigin { dim: 4 }, Goal::Minimize, &Brkga::new(4, 100), &MaxIterations(50))
//!     .unwrap();
//! println!("{info}");
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate batches on the rayon pool (results are unchanged)
//! - `serde`: `Serialize`/`Deserialize` for goals and configurations

pub mod brkga;
pub mod engine;
pub mod error;
pub mod population;
pub mod problem;
pub mod random;
pub mod termination;
