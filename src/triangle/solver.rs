//! Case dispatch and the law-of-sines / law-of-cosines solving passes.
//!
//! The solver is a pure function over values: each pass takes measurements in
//! and returns completed triples out. The ambiguous SSA configuration builds
//! its alternate from a value copy of the pre-ambiguity measurements with the
//! supplementary angle substituted; since the alternate is completed through
//! the one-side-two-angles pass, which has no SSA branch, a second-level
//! alternate is impossible by construction.

use log::debug;
use std::f64::consts::{FRAC_PI_2, PI};

use super::derived;
use super::laws;
use super::types::{others, MaybeMeasure, Measurements, Solution, SolvedTriangle, TriangleCase};
use super::validate::{self, Tolerances};
use super::{TriangleError, TriangleResult};
use crate::units::AngleUnit;

/// Solves a triangle from up to three known sides and up to three known
/// angles in degrees.
///
/// Exactly three of the six slots must be known, at least one of them a side;
/// `sides[i]` is opposite `angles[i]`. Result angles are in radians, sides in
/// the caller-supplied linear unit.
///
/// ```
/// let solution = triangle_core::solve(
///     &[Some(3.0), Some(4.0), Some(5.0)],
///     &[None, None, None],
/// ).unwrap();
/// assert!((solution.triangle.area - 6.0).abs() < 1e-9);
/// ```
pub fn solve(sides: &[MaybeMeasure], angles_deg: &[MaybeMeasure]) -> TriangleResult<Solution> {
    let angles: Vec<MaybeMeasure> = angles_deg
        .iter()
        .map(|a| a.map(|v| AngleUnit::Degrees.to_radians(v)))
        .collect();
    solve_in_radians(sides, &angles)
}

/// Same contract as [`solve`], with angles already in radians.
pub fn solve_in_radians(
    sides: &[MaybeMeasure],
    angles: &[MaybeMeasure],
) -> TriangleResult<Solution> {
    solve_with_tolerances(sides, angles, &Tolerances::default())
}

/// Same contract as [`solve_in_radians`], with explicit validation
/// tolerances.
pub fn solve_with_tolerances(
    sides: &[MaybeMeasure],
    angles: &[MaybeMeasure],
    tolerances: &Tolerances,
) -> TriangleResult<Solution> {
    let given = Measurements::from_partial(sides, angles);
    validate::validate_partial(&given)?;

    let case = TriangleCase::classify(&given);
    debug!("solving {case:?} configuration");

    let (triangle, alternate) = match case {
        TriangleCase::ThreeSides => {
            let (sides, angles) = solve_three_sides(&given)?;
            (finish(sides, angles, &given, tolerances)?, None)
        }
        TriangleCase::OneSideTwoAngles => {
            let (sides, angles) = solve_one_side(&given)?;
            (finish(sides, angles, &given, tolerances)?, None)
        }
        TriangleCase::TwoSidesOneAngle => solve_two_sides(&given, tolerances)?,
    };

    Ok(Solution { triangle, alternate })
}

/// Final validation plus the derived-quantity pass, shared by every case and
/// by the SSA alternate.
fn finish(
    sides: [f64; 3],
    angles: [f64; 3],
    given: &Measurements,
    tolerances: &Tolerances,
) -> TriangleResult<SolvedTriangle> {
    validate::validate_complete(&sides, &angles, given, tolerances)?;
    Ok(derived::complete(sides, angles))
}

/// SSS: every angle follows from the law of cosines. A ratio outside the
/// arccos domain means the three sides do not close.
fn solve_three_sides(measurements: &Measurements) -> TriangleResult<([f64; 3], [f64; 3])> {
    let (Some(s0), Some(s1), Some(s2)) = (
        measurements.sides[0],
        measurements.sides[1],
        measurements.sides[2],
    ) else {
        return Err(TriangleError::NotEnoughVariables);
    };

    let sides = [s0, s1, s2];
    let mut angles = [0.0; 3];
    for i in 0..3 {
        let (a_idx, b_idx) = others(i);
        angles[i] = laws::angle_from_sides(sides[a_idx], sides[b_idx], sides[i])
            .ok_or(TriangleError::InvalidTriangle)?;
    }

    Ok((sides, angles))
}

/// At least one side and two angles known (ASA/AAS), or an SSA partial whose
/// second angle has been filled in. Fills the last angle from the angle sum,
/// then every unknown side from the law of sines.
fn solve_one_side(measurements: &Measurements) -> TriangleResult<([f64; 3], [f64; 3])> {
    let angles = complete_angles(measurements)?;

    let mut sides = [0.0; 3];
    let mut known = [false; 3];
    for i in 0..3 {
        if let Some(side) = measurements.sides[i] {
            sides[i] = side;
            known[i] = true;
        }
    }
    let Some(reference) = (0..3).find(|&i| known[i]) else {
        return Err(TriangleError::NoSides);
    };

    for j in 0..3 {
        if !known[j] {
            sides[j] = laws::side_from_sines(sides[reference], angles[reference], angles[j]);
        }
    }

    Ok((sides, angles))
}

/// Fills at most one unknown angle as pi minus the other two. A non-positive
/// remainder means the two given angles already exhaust the angle sum.
fn complete_angles(measurements: &Measurements) -> TriangleResult<[f64; 3]> {
    let mut angles = [0.0; 3];
    let mut missing = None;
    let mut sum = 0.0;

    for i in 0..3 {
        match measurements.angles[i] {
            Some(angle) => {
                angles[i] = angle;
                sum += angle;
            }
            None if missing.is_none() => missing = Some(i),
            None => return Err(TriangleError::NotEnoughVariables),
        }
    }

    if let Some(i) = missing {
        let remainder = PI - sum;
        if remainder <= 0.0 {
            return Err(TriangleError::InvalidTriangle);
        }
        angles[i] = remainder;
    }

    Ok(angles)
}

/// Two sides and one angle known. SAS when the known angle's opposite side is
/// one of the unknowns; SSA otherwise, with the ambiguity check and alternate
/// construction.
fn solve_two_sides(
    given: &Measurements,
    tolerances: &Tolerances,
) -> TriangleResult<(SolvedTriangle, Option<SolvedTriangle>)> {
    let Some((i, angle_i)) = given
        .angles
        .iter()
        .enumerate()
        .find_map(|(k, a)| a.map(|angle| (k, angle)))
    else {
        return Err(TriangleError::NotEnoughVariables);
    };

    match given.sides[i] {
        // SAS: the known angle is enclosed by the two known sides.
        None => {
            let (a_idx, b_idx) = others(i);
            let (Some(a), Some(b)) = (given.sides[a_idx], given.sides[b_idx]) else {
                return Err(TriangleError::NotEnoughVariables);
            };

            let mut filled = *given;
            filled.sides[i] = Some(laws::side_from_enclosing(a, b, angle_i));
            let (sides, angles) = solve_three_sides(&filled)?;
            Ok((finish(sides, angles, given, tolerances)?, None))
        }

        // SSA: the known angle is opposite one of the known sides.
        Some(side_i) => {
            let (a_idx, b_idx) = others(i);
            let Some(j) = [a_idx, b_idx]
                .into_iter()
                .find(|&k| given.sides[k].is_some())
            else {
                return Err(TriangleError::NotEnoughVariables);
            };
            let Some(side_j) = given.sides[j] else {
                return Err(TriangleError::NotEnoughVariables);
            };

            let angle_j = laws::angle_from_sines(side_i, angle_i, side_j)
                .ok_or(TriangleError::InvalidTriangle)?;

            let alternate = if is_ambiguous(side_i, angle_i, side_j, angle_j) {
                debug!("ambiguous SSA configuration, building the supplementary solution");
                let mut supplement = *given;
                supplement.angles[j] = Some(PI - angle_j);
                let (sides, angles) = solve_one_side(&supplement)?;
                Some(finish(sides, angles, given, tolerances)?)
            } else {
                None
            };

            let mut filled = *given;
            filled.angles[j] = Some(angle_j);
            let (sides, angles) = solve_one_side(&filled)?;
            Ok((finish(sides, angles, given, tolerances)?, alternate))
        }
    }
}

/// Classic SSA two-solution test: the supplementary angle also satisfies the
/// law of sines when the side opposite the known angle is shorter than the
/// other known side but still clears the altitude `side_j * sin(angle_i)`.
fn is_ambiguous(side_i: f64, angle_i: f64, side_j: f64, angle_j: f64) -> bool {
    angle_j < FRAC_PI_2 && side_i < side_j && side_i > side_j * angle_i.sin()
}
