//! Triangle solving from exactly three known measurements.
//!
//! Given any mix of three side lengths and interior angles that determines a
//! triangle (SSS, SAS, SSA, ASA/AAS), this module computes the remaining
//! sides and angles via the laws of sines and cosines, then derives the
//! perimeter, area, altitudes, and medians. The ambiguous SSA configuration
//! yields a second valid triangle, attached to the primary [`Solution`] as
//! its `alternate`.
//!
//! Inputs are validated before and after solving. Any violation aborts the
//! solve with a [`TriangleError`]; no partial results are produced.

pub mod solver;
pub mod types;
pub mod validate;

mod derived;
mod laws;

#[cfg(test)]
mod tests_solver;




pub use solver::{solve, solve_in_radians, solve_with_tolerances};
pub use types::{Measurements, Solution, SolvedTriangle, TriangleCase};
pub use validate::Tolerances;

use thiserror::Error;

/// Errors that reject a solve request.
///
/// All variants are deterministic input errors; none are transient.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TriangleError {
    #[error("fewer than three measurements were provided")]
    NotEnoughVariables,

    #[error("more than three measurements were provided")]
    TooManyVariables,

    #[error("no side was provided; angles alone fix the shape but not the size")]
    NoSides,

    #[error("a side length is not positive or violates the triangle inequality")]
    InvalidSide,

    #[error("an angle lies outside the open interval (0, pi)")]
    InvalidAngle,

    #[error("the measurements are mutually inconsistent; no triangle satisfies them")]
    InvalidTriangle,
}

/// Result type for triangle operations.
pub type TriangleResult<T> = Result<T, TriangleError>;
