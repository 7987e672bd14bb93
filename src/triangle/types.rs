//! Working data and result types for the triangle solver.
//!
//! The index correspondence is the load-bearing invariant here: `sides[i]` is
//! always opposite `angles[i]`, and every law-of-sines/cosines pairing in the
//! solver relies on it.

use serde::{Deserialize, Serialize};

/// A measurement slot: a known value, or not yet determined.
pub type MaybeMeasure = Option<f64>;

/// Ordered side and angle triples, possibly partial.
///
/// Angles are in radians. `sides[i]` is opposite `angles[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurements {
    pub sides: [MaybeMeasure; 3],
    pub angles: [MaybeMeasure; 3],
}

impl Measurements {
    /// Pads up to three known sides and up to three known angles out to
    /// fixed-length triples. Extra elements beyond three are ignored.
    /// Purely shape-fixing; no validation happens here.
    pub fn from_partial(sides: &[MaybeMeasure], angles: &[MaybeMeasure]) -> Self {
        Self {
            sides: pad(sides),
            angles: pad(angles),
        }
    }

    pub fn known_sides(&self) -> usize {
        self.sides.iter().filter(|s| s.is_some()).count()
    }

    pub fn known_angles(&self) -> usize {
        self.angles.iter().filter(|a| a.is_some()).count()
    }
}

fn pad(values: &[MaybeMeasure]) -> [MaybeMeasure; 3] {
    let mut out = [None; 3];
    for (slot, value) in out.iter_mut().zip(values.iter()) {
        *slot = *value;
    }
    out
}

/// The two indices other than `i`, in ascending order.
#[inline]
pub(crate) fn others(i: usize) -> (usize, usize) {
    match i {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    }
}

/// Which solvable configuration applies, keyed by how many sides are known.
///
/// Partial validation guarantees exactly three known measurements with at
/// least one side, so the known-side count alone selects the case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriangleCase {
    /// All three sides known (SSS).
    ThreeSides,
    /// Two sides and one angle known (SAS or SSA).
    TwoSidesOneAngle,
    /// One side and two angles known (ASA or AAS).
    OneSideTwoAngles,
}

impl TriangleCase {
    pub fn classify(measurements: &Measurements) -> Self {
        match measurements.known_sides() {
            3 => Self::ThreeSides,
            2 => Self::TwoSidesOneAngle,
            _ => Self::OneSideTwoAngles,
        }
    }
}

/// A fully determined triangle with its derived quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolvedTriangle {
    /// Side lengths, in the caller-supplied linear unit.
    pub sides: [f64; 3],
    /// Interior angles in radians, `angles[i]` opposite `sides[i]`.
    pub angles: [f64; 3],
    /// Sum of the three sides.
    pub perimeter: f64,
    /// Area via Heron's formula.
    pub area: f64,
    /// `altitudes[i]` is the perpendicular distance from the vertex opposite
    /// `sides[i]` to the line of `sides[i]`.
    pub altitudes: [f64; 3],
    /// `medians[i]` is the distance from the vertex opposite `sides[i]` to
    /// the midpoint of `sides[i]`.
    pub medians: [f64; 3],
}

/// Result of a successful solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub triangle: SolvedTriangle,
    /// Second valid triangle, present only for the ambiguous SSA
    /// configuration. Never carries its own alternate.
    pub alternate: Option<SolvedTriangle>,
}
