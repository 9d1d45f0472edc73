//! Error types for the supporting surfaces of the library.
//!
//! Building, evaluating and differentiating a graph never fails: degenerate
//! arithmetic is carried by the float itself (infinity or NaN). The errors
//! below cover configuration, scalar conversion and derivative checking.

use thiserror::Error;

/// Errors raised outside the core graph contracts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AutodiffError {
    /// Invalid configuration value.
    ///
    /// This error occurs when a configuration is built with a step size or
    /// tolerance that is non-positive or non-finite.
    #[error("Invalid configuration: {parameter} = {value} ({reason})")]
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: String,
        /// Value that was invalid
        value: String,
        /// Description of the configuration error
        reason: String,
    },

    /// A constant could not be represented in the target scalar type.
    #[error("Cannot convert {value} to {target}")]
    Conversion {
        /// Value that failed to convert
        value: String,
        /// Name of the target type
        target: &'static str,
    },

    /// Analytic and numerical derivatives disagree.
    ///
    /// This error is returned by strict derivative checks when the
    /// comparison exceeds the configured tolerances.
    #[error("Derivative check failed for {node}: analytic {analytic}, numeric {numeric}")]
    CheckFailed {
        /// Display form of the checked target
        node: String,
        /// Analytic derivative value
        analytic: f64,
        /// Finite-difference estimate
        numeric: f64,
    },
}

impl AutodiffError {
    /// Create an InvalidConfiguration error.
    pub fn invalid_configuration<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: std::fmt::Display,
        R: Into<String>,
    {
        Self::InvalidConfiguration {
            parameter: parameter.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a Conversion error for the given value and target type.
    pub fn conversion<V: std::fmt::Display>(value: V, target: &'static str) -> Self {
        Self::Conversion {
            value: value.to_string(),
            target,
        }
    }

    /// Create a CheckFailed error.
    pub fn check_failed<S: Into<String>>(node: S, analytic: f64, numeric: f64) -> Self {
        Self::CheckFailed {
            node: node.into(),
            analytic,
            numeric,
        }
    }
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, AutodiffError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        let err = AutodiffError::invalid_configuration("step", -1.0, "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: step = -1 (must be positive)"
        );

        let err = AutodiffError::conversion(1e300, "f32");
        assert_eq!(err.to_string(), format!("Cannot convert {} to f32", 1e300));

        let err = AutodiffError::check_failed("x", 1.0, 2.0);
        assert_eq!(
            err.to_string(),
            "Derivative check failed for x: analytic 1, numeric 2"
        );
    }

    #[test]
    fn test_error_equality() {
        let a = AutodiffError::conversion("nan", "f64");
        let b = AutodiffError::Conversion {
            value: "nan".to_string(),
            target: "f64",
        };
        assert_eq!(a, b);
    }
}
