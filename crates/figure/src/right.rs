//! Inverse Pythagorean test.

use crate::error::{FigureError, Result};
use crate::measure::triangle_exists;

/// Whether three sides form a right triangle.
///
/// The comparison `b² + c² == a²` (with `a` the longest side) is exact; sides
/// whose squares are not bit-identical in `f64` report `false` even when the
/// triangle is right in exact arithmetic.
///
/// Errors: `InvalidArgumentCount` unless exactly 3 sides are given,
/// `InvalidTriangle` if they violate the strict triangle inequality. Sides are
/// not checked for positivity; a non-positive side always fails the
/// inequality, and so does a NaN side.
pub fn is_right_triangle(sides: &[f64]) -> Result<bool> {
    let mut s: [f64; 3] = sides
        .try_into()
        .map_err(|_| FigureError::InvalidArgumentCount { count: sides.len() })?;
    if !triangle_exists(s[0], s[1], s[2])? {
        return Ok(false);
    }
    // single pass: move the largest side to the front
    for i in 1..s.len() {
        if s[i] > s[0] {
            s.swap(0, i);
        }
    }
    Ok(s[1] * s[1] + s[2] * s[2] == s[0] * s[0])
}
