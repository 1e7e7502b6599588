use thiserror::Error;

/// Errors raised while building an interpolation table.
///
/// Every variant is a configuration error: tables are validated once at
/// construction so queries never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// The independent and dependent columns have different lengths.
    #[error("table columns differ in length: x has {x} points, y has {y}")]
    LengthMismatch { x: usize, y: usize },

    /// Not enough points to define the spline.
    #[error("table has {len} points, at least {min} are required")]
    TooFewPoints { len: usize, min: usize },

    /// The independent variable is not strictly increasing at `index`.
    #[error("independent variable is not strictly increasing at index {index}")]
    NotIncreasing { index: usize },

    /// The independent variable is NaN or infinite at `index`.
    #[error("independent variable is not finite at index {index}")]
    NonFiniteAbscissa { index: usize },

    /// The dependent variable is NaN or infinite at `index`.
    #[error("dependent variable is not finite at index {index}")]
    NonFiniteOrdinate { index: usize },

    /// The spline coefficient system could not be solved.
    #[error("spline system is singular")]
    Singular,
}
