pub mod triangle;
pub mod units;

pub use triangle::{
    solve, solve_in_radians, solve_with_tolerances, Measurements, Solution, SolvedTriangle,
    Tolerances, TriangleCase, TriangleError, TriangleResult,
};

pub fn version() -> &'static str {
    "0.1.0"
}
