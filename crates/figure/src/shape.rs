//! Typed view of a measurement set.
//!
//! The number of measurements decides the figure: one radius is a circle,
//! two semi-axes an ellipse, three sides a triangle.

use serde::Serialize;

use crate::area::{circle_area, ellipse_area, triangle_area};
use crate::error::{FigureError, Result};
use crate::measure::{check_sides, triangle_exists};
use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Circle { radius: f64 },
    Ellipse { a: f64, b: f64 },
    Triangle { a: f64, b: f64, c: f64 },
}

impl Shape {
    /// Validate positivity, then pick the figure by measurement count.
    ///
    /// The triangle inequality is not checked here; see [`Shape::area`].
    pub fn classify(sides: &[f64]) -> Result<Self> {
        check_sides(sides)?;
        match *sides {
            [radius] => Ok(Shape::Circle { radius }),
            [a, b] => Ok(Shape::Ellipse { a, b }),
            [a, b, c] => Ok(Shape::Triangle { a, b, c }),
            _ => Err(FigureError::UnknownShape { count: sides.len() }),
        }
    }

    /// Triangle with the pairwise distances of three planar points as sides.
    pub fn triangle_from_vertices(p: Vec2<f64>, q: Vec2<f64>, r: Vec2<f64>) -> Self {
        Shape::Triangle {
            a: (q - p).norm(),
            b: (r - q).norm(),
            c: (p - r).norm(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Ellipse { .. } => "ellipse",
            Shape::Triangle { .. } => "triangle",
        }
    }

    /// Area in the squared units of the measurements.
    pub fn area(&self) -> Result<f64> {
        match *self {
            Shape::Circle { radius } => Ok(circle_area(radius)),
            Shape::Ellipse { a, b } => Ok(ellipse_area(a, b)),
            Shape::Triangle { a, b, c } => {
                if triangle_exists(a, b, c)? {
                    Ok(triangle_area(a, b, c))
                } else {
                    // unreachable: triangle_exists errors instead of returning false
                    Ok(0.0)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn classify_by_count() {
        assert_eq!(
            Shape::classify(&[2.0]),
            Ok(Shape::Circle { radius: 2.0 })
        );
        assert_eq!(
            Shape::classify(&[2.0, 1.0]),
            Ok(Shape::Ellipse { a: 2.0, b: 1.0 })
        );
        assert_eq!(
            Shape::classify(&[3.0, 4.0, 5.0]),
            Ok(Shape::Triangle {
                a: 3.0,
                b: 4.0,
                c: 5.0
            })
        );
        assert_eq!(
            Shape::classify(&[]),
            Err(FigureError::UnknownShape { count: 0 })
        );
        assert_eq!(
            Shape::classify(&[1.0, 2.0, 3.0, 4.0]),
            Err(FigureError::UnknownShape { count: 4 })
        );
    }

    #[test]
    fn positivity_is_checked_before_count() {
        assert_eq!(
            Shape::classify(&[1.0, 2.0, 3.0, -4.0]),
            Err(FigureError::InvalidMeasurement {
                index: 3,
                value: -4.0
            })
        );
    }

    #[test]
    fn classify_accepts_impossible_triangle_but_area_rejects_it() {
        let s = Shape::classify(&[1.0, 1.0, 3.0]).unwrap();
        assert_eq!(s.kind(), "triangle");
        assert!(matches!(
            s.area(),
            Err(FigureError::InvalidTriangle { .. })
        ));
    }

    #[test]
    fn triangle_from_axis_vertices() {
        let s = Shape::triangle_from_vertices(vector![0.0, 0.0], vector![3.0, 0.0], vector![0.0, 4.0]);
        assert_eq!(
            s,
            Shape::Triangle {
                a: 3.0,
                b: 5.0,
                c: 4.0
            }
        );
        assert!((s.area().unwrap() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn collinear_vertices_do_not_form_a_triangle() {
        let s = Shape::triangle_from_vertices(vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]);
        assert!(matches!(
            s.area(),
            Err(FigureError::InvalidTriangle { .. })
        ));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Shape::Ellipse { a: 2.0, b: 1.0 }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "ellipse", "a": 2.0, "b": 1.0}));
    }
}
