//! Structural and geometric validation of triangle measurements.
//!
//! `validate_partial` runs before solving and rejects inputs that cannot
//! select a solvable configuration. `validate_complete` runs after solving,
//! when all six quantities are known, and additionally cross-checks the
//! solved sides against any (side, opposite angle) pair the caller originally
//! supplied.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::laws;
use super::types::{others, Measurements};
use super::{TriangleError, TriangleResult};

/// Comparison tolerances used during validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    /// Absolute tolerance when rechecking a given angle against the angle
    /// implied by the solved side lengths.
    pub consistency: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self { consistency: 0.01 }
    }
}

fn angle_is_valid(angle: f64) -> bool {
    angle.is_finite() && angle > 0.0 && angle < PI
}

fn side_is_positive(side: f64) -> bool {
    side.is_finite() && side > 0.0
}

/// Strict triangle inequality of `side` against the other two sides.
#[inline]
fn inequality_holds(side: f64, a: f64, b: f64) -> bool {
    side < a + b && side > (a - b).abs()
}

/// Validates a padded, not yet solved input.
///
/// Range checks run per index first, then the measurement count is checked:
/// exactly three of the six slots must be known, at least one of them a side.
pub fn validate_partial(measurements: &Measurements) -> TriangleResult<()> {
    for i in 0..3 {
        if let Some(side) = measurements.sides[i] {
            if !side_is_positive(side) {
                return Err(TriangleError::InvalidSide);
            }
            let (a_idx, b_idx) = others(i);
            if let (Some(a), Some(b)) = (measurements.sides[a_idx], measurements.sides[b_idx]) {
                if !inequality_holds(side, a, b) {
                    return Err(TriangleError::InvalidSide);
                }
            }
        }

        if let Some(angle) = measurements.angles[i] {
            if !angle_is_valid(angle) {
                return Err(TriangleError::InvalidAngle);
            }
        }
    }

    let known = measurements.known_sides() + measurements.known_angles();
    if known > 3 {
        return Err(TriangleError::TooManyVariables);
    }
    if known < 3 {
        return Err(TriangleError::NotEnoughVariables);
    }
    if measurements.known_sides() == 0 {
        return Err(TriangleError::NoSides);
    }

    Ok(())
}

/// Rechecks a completed triangle.
///
/// `given` is the original input. Wherever it supplied both a side and its
/// opposite angle, the angle implied by the three solved sides (law of
/// cosines) must match the given angle within `tolerances.consistency`;
/// otherwise the three original measurements describe no single triangle.
pub fn validate_complete(
    sides: &[f64; 3],
    angles: &[f64; 3],
    given: &Measurements,
    tolerances: &Tolerances,
) -> TriangleResult<()> {
    for i in 0..3 {
        let (a_idx, b_idx) = others(i);
        if !side_is_positive(sides[i]) || !inequality_holds(sides[i], sides[a_idx], sides[b_idx]) {
            return Err(TriangleError::InvalidSide);
        }
        if !angle_is_valid(angles[i]) {
            return Err(TriangleError::InvalidAngle);
        }

        if given.sides[i].is_none() || given.angles[i].is_none() {
            continue;
        }
        let implied = laws::angle_from_sides(sides[a_idx], sides[b_idx], sides[i])
            .ok_or(TriangleError::InvalidTriangle)?;
        if (implied - angles[i]).abs() > tolerances.consistency {
            return Err(TriangleError::InvalidTriangle);
        }
    }

    Ok(())
}
