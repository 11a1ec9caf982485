//! Error types for the designer crate.
//!
//! The interactive paths never surface these: an early close falls back to a
//! vertex append and a rejected grid step is ignored. They guard the
//! constructors of validated values.

use thiserror::Error;

/// Errors raised when building designer values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignerError {
    /// A closed polygon was requested from too few vertices.
    #[error("Polygon needs at least {min} vertices, got {actual}")]
    TooFewVertices { min: usize, actual: usize },

    /// A grid step that is zero, negative or not finite.
    #[error("Grid step must be a positive finite number, got {0}")]
    InvalidGridStep(f64),
}

/// Result type alias for designer operations.
pub type DesignerResult<T> = Result<T, DesignerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DesignerError::TooFewVertices { min: 3, actual: 2 };
        assert_eq!(err.to_string(), "Polygon needs at least 3 vertices, got 2");

        let err = DesignerError::InvalidGridStep(-1.0);
        assert_eq!(
            err.to_string(),
            "Grid step must be a positive finite number, got -1"
        );
    }
}
