//! Area formulas and the count-based dispatch.

use std::f64::consts::PI;

use crate::error::Result;
use crate::shape::Shape;

/// Area of a circle with radius `r`: π r².
#[inline]
pub fn circle_area(r: f64) -> f64 {
    PI * r * r
}

/// Area of an ellipse with semi-axes `a` and `b`: π a b.
#[inline]
pub fn ellipse_area(a: f64, b: f64) -> f64 {
    PI * a * b
}

/// Heron's formula. Assumes `a, b, c` already satisfy the triangle inequality.
#[inline]
pub fn triangle_area(a: f64, b: f64, c: f64) -> f64 {
    let p = (a + b + c) / 2.0;
    (p * (p - a) * (p - b) * (p - c)).sqrt()
}

/// Area of the figure described by 1, 2 or 3 positive measurements.
///
/// Errors: `InvalidMeasurement` for any value `<= 0`, `UnknownShape` for a
/// count outside 1..=3, `InvalidTriangle` for three sides that violate the
/// strict triangle inequality.
pub fn compute_area(sides: &[f64]) -> Result<f64> {
    Shape::classify(sides)?.area()
}
