//! Derived quantities of a fully solved triangle.
//!
//! Purely algebraic; given a validated complete triangle there are no failure
//! conditions here.

use super::types::{others, SolvedTriangle};

/// Attaches perimeter, area, altitudes, and medians to a completed triangle.
pub(crate) fn complete(sides: [f64; 3], angles: [f64; 3]) -> SolvedTriangle {
    let perimeter: f64 = sides.iter().sum();

    // Heron's formula
    let s = perimeter / 2.0;
    let area = (s * (s - sides[0]) * (s - sides[1]) * (s - sides[2])).sqrt();

    let mut altitudes = [0.0; 3];
    let mut medians = [0.0; 3];
    for i in 0..3 {
        let (a, b) = others(i);
        // Height over side i: the right triangle cut off by the altitude has
        // hypotenuse sides[b] and the angle at index a.
        altitudes[i] = angles[a].sin() * sides[b];
        // Median-length formula, m^2 = (2a^2 + 2b^2 - c^2) / 4
        medians[i] =
            (2.0 * sides[a] * sides[a] + 2.0 * sides[b] * sides[b] - sides[i] * sides[i]).sqrt()
                / 2.0;
    }

    SolvedTriangle {
        sides,
        angles,
        perimeter,
        area,
        altitudes,
        medians,
    }
}
