use thiserror::Error;

/// Failures of the area and right-triangle operations.
///
/// Each variant carries the values that caused it so callers can render
/// their own messages.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FigureError {
    /// A radius or side is not strictly positive (NaN included).
    #[error("radii and sides must be positive, got {value} at position {index}")]
    InvalidMeasurement { index: usize, value: f64 },

    #[error("no triangle exists with sides {a}, {b}, {c}")]
    InvalidTriangle { a: f64, b: f64, c: f64 },

    #[error("unknown figure for {count} measurement(s)")]
    UnknownShape { count: usize },

    #[error("a triangle needs exactly 3 sides, got {count}")]
    InvalidArgumentCount { count: usize },
}

pub type Result<T> = std::result::Result<T, FigureError>;
