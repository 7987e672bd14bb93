//! Closed-form trigonometric relations between sides and angles.
//!
//! Each function is a single application of the law of sines or the law of
//! cosines. Inversions whose input ratio can leave the arccos/arcsin domain
//! return `None` in that case; the caller decides what a domain violation
//! means (it always indicates measurements that close no triangle).

/// Angle opposite `c`, from all three side lengths (law of cosines).
#[inline]
pub(crate) fn angle_from_sides(a: f64, b: f64, c: f64) -> Option<f64> {
    let ratio = (a * a + b * b - c * c) / (2.0 * a * b);
    if !(-1.0..=1.0).contains(&ratio) {
        return None;
    }
    Some(ratio.acos())
}

/// Side opposite `gamma`, from the two enclosing sides (law of cosines).
/// `a*a + b*b >= 2ab >= 2ab*cos(gamma)`, so the radicand never goes negative.
#[inline]
pub(crate) fn side_from_enclosing(a: f64, b: f64, gamma: f64) -> f64 {
    (a * a + b * b - 2.0 * a * b * gamma.cos()).sqrt()
}

/// Unknown side opposite `angle`, from a known (side, angle) pair at another
/// index (law of sines).
#[inline]
pub(crate) fn side_from_sines(known_side: f64, known_angle: f64, angle: f64) -> f64 {
    angle.sin() * known_side / known_angle.sin()
}

/// Unknown angle opposite `side`, from a known (side, angle) pair at another
/// index (law of sines, inverted). Returns the principal value; the ambiguous
/// SSA configuration is where the supplementary angle may also apply.
#[inline]
pub(crate) fn angle_from_sines(known_side: f64, known_angle: f64, side: f64) -> Option<f64> {
    let ratio = known_angle.sin() * side / known_side;
    if !(-1.0..=1.0).contains(&ratio) {
        return None;
    }
    Some(ratio.asin())
}
