//! Problem contract and goal direction.
//!
//! - [`Problem`]: decode / objective / feasibility, implemented by users
//! - [`Goal`]: minimize or maximize
//! - [`Ranking`]: the comparator derived from a goal and a
//!   [`FeasibilityPolicy`], used for every score comparison in the crate

mod goal;
mod types;

pub use goal::{FeasibilityPolicy, Goal, Ranking};
pub use types::Problem;
