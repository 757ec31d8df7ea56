//! Error types shared by the engine and optimizers.

use std::error::Error;

/// Error produced by a [`Problem`](crate::problem::Problem) implementation.
///
/// Problems are external collaborators, so any error type is accepted as long
/// as it can cross thread boundaries (evaluation may run on a rayon pool).
pub type ProblemError = Box<dyn Error + Send + Sync + 'static>;

/// Errors reported by [`Engine`](crate::engine::Engine) and optimizers.
#[derive(Debug, thiserror::Error)]
pub enum OptimError {
    /// Invalid sizes, fractions or user-supplied chromosomes.
    ///
    /// Always detected before any evaluation work begins.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The problem failed to decode, score or feasibility-check a chromosome.
    #[error("evaluation failed for individual {index}: {source}")]
    Evaluation {
        /// Position of the failing chromosome within the evaluated batch.
        index: usize,
        #[source]
        source: ProblemError,
    },
}

impl OptimError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        OptimError::Configuration(msg.into())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, OptimError>;

/// Raised when an objective evaluates to NaN, which cannot be ranked.
#[derive(Debug, thiserror::Error)]
#[error("objective yields NaN value")]
pub struct NanObjective;
