//! Generic iteration engine.
//!
//! [`Engine`] owns the optimization loop: it seeds the run's random
//! generator, asks an [`Optimizer`] for the initial population and for every
//! following generation, keeps the best individual under the goal-derived
//! [`Ranking`](crate::problem::Ranking), and stops when the caller's
//! [`Termination`](crate::termination::Termination) says so.
//!
//! # Key Types
//!
//! - [`Engine`]: runs the loop
//! - [`EngineConfig`]: seed, restarts, feasibility policy, initial guesses
//! - [`Optimizer`]: the strategy seam (see [`crate::brkga::Brkga`])
//! - [`IterationInfo`]: per-iteration report handed to termination and
//!   returned to the caller

mod config;
mod runner;
mod types;

pub use config::EngineConfig;
pub use runner::Engine;
pub use types::{IterationInfo, Optimizer};
