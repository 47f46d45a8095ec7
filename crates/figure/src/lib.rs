//! Areas of circles, ellipses and triangles from raw measurements.
//!
//! Layout
//! - `measure`: positivity and triangle-inequality checks.
//! - `area`: the three area formulas and the count-based dispatch.
//! - `right`: the inverse Pythagorean test.
//! - `shape`: typed view of a measurement set (`Shape`).
//!
//! Every operation is pure and returns `Result<_, FigureError>`; nothing here
//! logs, allocates global state, or touches I/O.

pub mod area;
pub mod error;
pub mod measure;
pub mod right;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use area::{circle_area, compute_area, ellipse_area, triangle_area};
pub use error::{FigureError, Result};
pub use measure::{check_sides, triangle_exists};
pub use right::is_right_triangle;
pub use shape::Shape;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::{compute_area, is_right_triangle, FigureError, Shape, Vec2};
}
