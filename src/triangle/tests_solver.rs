use crate::triangle::solver::solve_in_radians;
use crate::triangle::types::{Measurements, TriangleCase};
use std::f64::consts::{FRAC_PI_2, PI};

const TOL: f64 = 1e-6;

#[test]
fn test_sss_right_triangle() {
    let solution = solve_in_radians(&[Some(3.0), Some(4.0), Some(5.0)], &[]).unwrap();
    let t = &solution.triangle;

    assert!((t.angles[0] - 0.6435011).abs() < 1e-6);
    assert!((t.angles[1] - 0.9272952).abs() < 1e-6);
    assert!((t.angles[2] - FRAC_PI_2).abs() < 1e-6);
    assert!((t.perimeter - 12.0).abs() < TOL);
    assert!((t.area - 6.0).abs() < TOL);
    assert!(solution.alternate.is_none(), "SSS is never ambiguous");
}

#[test]
fn test_sas_unique_solution() {
    // 5 and 7 enclosing a 60 degree angle
    let solution =
        solve_in_radians(&[Some(5.0), Some(7.0), None], &[None, None, Some(1.0472)]).unwrap();
    let t = &solution.triangle;

    assert!((t.sides[2] - 6.245).abs() < 1e-2);
    assert!(solution.alternate.is_none(), "SAS is never ambiguous");
    assert!((t.angles.iter().sum::<f64>() - PI).abs() < TOL);
}

#[test]
fn test_asa_fills_sides_by_law_of_sines() {
    let solution =
        solve_in_radians(&[Some(10.0), None, None], &[None, Some(0.7), Some(1.1)]).unwrap();
    let t = &solution.triangle;

    assert!((t.angles[0] - (PI - 1.8)).abs() < TOL);
    // All three sine ratios must agree
    let ratio = t.sides[0] / t.angles[0].sin();
    assert!((t.sides[1] / t.angles[1].sin() - ratio).abs() < TOL);
    assert!((t.sides[2] / t.angles[2].sin() - ratio).abs() < TOL);
    assert!(solution.alternate.is_none());
}

#[test]
fn test_angle_sum_invariant() {
    let inputs: &[(&[Option<f64>], &[Option<f64>])] = &[
        (&[Some(3.0), Some(4.0), Some(5.0)], &[]),
        (&[Some(2.0), Some(2.0), Some(2.0)], &[]),
        (&[Some(5.0), Some(7.0), None], &[None, None, Some(1.0472)]),
        (&[Some(10.0), None, None], &[None, Some(0.7), Some(1.1)]),
        (&[Some(7.0), Some(9.0), None], &[None, Some(0.5), None]),
    ];

    for &(sides, angles) in inputs {
        let solution = solve_in_radians(sides, angles).unwrap();
        let sum: f64 = solution.triangle.angles.iter().sum();
        assert!(
            (sum - PI).abs() < TOL,
            "angle sum {sum} for sides {sides:?} angles {angles:?}"
        );
    }
}

#[test]
fn test_law_of_cosines_round_trip() {
    let solution =
        solve_in_radians(&[Some(6.0), Some(4.5), None], &[None, None, Some(0.8)]).unwrap();
    let t = &solution.triangle;

    for i in 0..3 {
        let (a, b) = match i {
            0 => (t.sides[1], t.sides[2]),
            1 => (t.sides[0], t.sides[2]),
            _ => (t.sides[0], t.sides[1]),
        };
        let implied = ((a * a + b * b - t.sides[i] * t.sides[i]) / (2.0 * a * b)).acos();
        assert!((implied - t.angles[i]).abs() < TOL);
    }
}

#[test]
fn test_resolving_output_sides_reproduces_angles() {
    let first =
        solve_in_radians(&[Some(5.0), Some(7.0), None], &[None, None, Some(1.0472)]).unwrap();
    let sides: Vec<Option<f64>> = first.triangle.sides.iter().map(|&s| Some(s)).collect();
    let second = solve_in_radians(&sides, &[]).unwrap();

    for i in 0..3 {
        assert!((second.triangle.angles[i] - first.triangle.angles[i]).abs() < TOL);
    }
}

#[test]
fn test_case_classification() {
    let sss = Measurements::from_partial(&[Some(3.0), Some(4.0), Some(5.0)], &[]);
    assert_eq!(TriangleCase::classify(&sss), TriangleCase::ThreeSides);

    let ssa = Measurements::from_partial(&[Some(3.0), Some(4.0)], &[Some(1.0)]);
    assert_eq!(TriangleCase::classify(&ssa), TriangleCase::TwoSidesOneAngle);

    let asa = Measurements::from_partial(&[Some(3.0)], &[Some(1.0), Some(1.0)]);
    assert_eq!(TriangleCase::classify(&asa), TriangleCase::OneSideTwoAngles);
}

#[test]
fn test_two_given_angles_exhausting_the_angle_sum_are_rejected() {
    let result = solve_in_radians(&[Some(10.0), None, None], &[None, Some(1.6), Some(1.6)]);
    assert_eq!(result.unwrap_err(), crate::triangle::TriangleError::InvalidTriangle);
}
