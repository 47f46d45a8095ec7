//! Input checks shared by the area and right-triangle operations.

use crate::error::{FigureError, Result};

/// Every value must be strictly positive; reports the first one that is not.
/// NaN counts as non-positive.
pub fn check_sides(sides: &[f64]) -> Result<()> {
    match sides.iter().position(|&s| !(s > 0.0)) {
        Some(index) => Err(FigureError::InvalidMeasurement {
            index,
            value: sides[index],
        }),
        None => Ok(()),
    }
}

/// Strict triangle inequality for sides `a, b, c`.
///
/// Never yields `Ok(false)`: a violated inequality is reported as
/// `InvalidTriangle`, so callers see either `Ok(true)` or the error.
/// A NaN side fails every comparison and is rejected too.
pub fn triangle_exists(a: f64, b: f64, c: f64) -> Result<bool> {
    if !(a + b > c && a + c > b && b + c > a) {
        return Err(FigureError::InvalidTriangle { a, b, c });
    }
    Ok(true)
}
