//! The problem contract consumed by the engine.

use crate::error::ProblemError;

/// A black-box optimization problem over random-key chromosomes.
///
/// The engine never inspects [`Problem::Candidate`]; it only decodes keys into
/// candidates, scores them and asks whether they are feasible. Whether a
/// lower or higher score is better is decided by the
/// [`Goal`](crate::problem::Goal) passed to the engine, not by the problem.
///
/// # Examples
///
/// ```
/// use rkopt::problem::Problem;
/// use rkopt::error::ProblemError;
///
/// struct Sphere { dim: usize }
///
/// impl Problem for Sphere {
///     type Candidate = Vec<f64>;
///
///     fn decode(&self, keys: &[f64]) -> Result<Vec<f64>, ProblemError> {
///         Ok(keys.iter().map(|k| -5.0 + 10.0 * k).collect())
///     }
///
///     fn objective(&self, x: &Vec<f64>) -> Result<f64, ProblemError> {
///         Ok(x.iter().map(|v| v * v).sum())
///     }
/// }
/// # let _ = Sphere { dim: 3 }.dim;
/// ```
///
/// # Thread Safety
///
/// `Problem` must be `Sync` and candidates `Send` because a batch may be
/// evaluated on the rayon pool when the `parallel` feature is enabled.
pub trait Problem: Sync {
    /// The decoded, domain-specific solution.
    type Candidate: Clone + Send;

    /// Maps a chromosome of keys in `[0, 1)` to a candidate.
    ///
    /// Must be total over `[0, 1)` inputs; an `Err` aborts the run.
    fn decode(&self, keys: &[f64]) -> Result<Self::Candidate, ProblemError>;

    /// Scores a decoded candidate. NaN scores are rejected by the engine.
    fn objective(&self, candidate: &Self::Candidate) -> Result<f64, ProblemError>;

    /// Whether the candidate satisfies the problem's constraints.
    ///
    /// Infeasible candidates are kept and ranked by the
    /// [`FeasibilityPolicy`](crate::problem::FeasibilityPolicy).
    /// The default treats every candidate as feasible.
    fn is_feasible(&self, _candidate: &Self::Candidate) -> Result<bool, ProblemError> {
        Ok(true)
    }
}
