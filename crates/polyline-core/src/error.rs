//! Error handling for the Polyline Editor
//!
//! The drawing core itself never fails; crates that validate configuration
//! values report them through [`ConfigValueError`].

use thiserror::Error;

/// Configuration value error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValueError {
    /// Value lies outside its allowed range
    #[error("Value {value} for '{key}' is outside [{min}, {max}]")]
    OutOfRange {
        /// The setting name.
        key: String,
        /// The rejected value.
        value: f64,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
    },

    /// Value must be strictly positive
    #[error("Value for '{key}' must be > 0")]
    NotPositive {
        /// The setting name.
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = ConfigValueError::OutOfRange {
            key: "grid_step".to_string(),
            value: 0.5,
            min: 1.0,
            max: 1000.0,
        };
        assert_eq!(
            err.to_string(),
            "Value 0.5 for 'grid_step' is outside [1, 1000]"
        );
    }

    #[test]
    fn test_not_positive_display() {
        let err = ConfigValueError::NotPositive {
            key: "window_width".to_string(),
        };
        assert_eq!(err.to_string(), "Value for 'window_width' must be > 0");
    }
}
