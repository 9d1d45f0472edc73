//! Numeric types accepted by expression graphs.
//!
//! Every leaf of a graph stores a value of some [`Scalar`] type, and every
//! node built on top of it shares that type. Mixing `f32` and `f64` operands
//! is rejected at compile time.

use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types stored in expression graphs (f32 or f64).
///
/// This trait combines the numeric traits needed to evaluate and
/// differentiate the supported operations, including the exponential.
pub trait Scalar: Float + FromPrimitive + Display + Debug + Default + Copy + 'static {
    /// Machine epsilon for this scalar type.
    const EPSILON: Self;

    /// Default step for central finite differences.
    const DEFAULT_FD_STEP: Self;

    /// Default absolute tolerance when comparing derivatives.
    const DEFAULT_ABS_TOLERANCE: Self;

    /// Default relative tolerance when comparing derivatives.
    const DEFAULT_REL_TOLERANCE: Self;

    /// Convert from f64 (for constants).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails. Use `try_from_f64` for a non-panicking version.
    fn from_f64(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).expect("Failed to convert from f64")
    }

    /// Try to convert from f64.
    ///
    /// Returns None if the conversion fails.
    fn try_from_f64(v: f64) -> Option<Self> {
        <Self as FromPrimitive>::from_f64(v)
    }

    /// Convert to f64 (for logging/display).
    fn to_f64(self) -> f64 {
        num_traits::cast(self).unwrap_or(f64::NAN)
    }
}

impl Scalar for f32 {
    const EPSILON: Self = f32::EPSILON;
    const DEFAULT_FD_STEP: Self = 1e-3;
    const DEFAULT_ABS_TOLERANCE: Self = 1e-3;
    const DEFAULT_REL_TOLERANCE: Self = 1e-2;
}

impl Scalar for f64 {
    const EPSILON: Self = f64::EPSILON;
    const DEFAULT_FD_STEP: Self = 1e-6;
    const DEFAULT_ABS_TOLERANCE: Self = 1e-7;
    const DEFAULT_REL_TOLERANCE: Self = 1e-6;
}

/// Numerical constants for different precision levels.
pub mod constants {
    use super::Scalar;

    /// Get machine epsilon for the given scalar type.
    pub fn epsilon<T: Scalar>() -> T {
        T::EPSILON
    }

    /// Get the default finite-difference step.
    pub fn fd_step<T: Scalar>() -> T {
        T::DEFAULT_FD_STEP
    }

    /// Get the default absolute tolerance.
    pub fn abs_tolerance<T: Scalar>() -> T {
        T::DEFAULT_ABS_TOLERANCE
    }

    /// Get the default relative tolerance.
    pub fn rel_tolerance<T: Scalar>() -> T {
        T::DEFAULT_REL_TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scalar_constants() {
        assert_eq!(constants::epsilon::<f64>(), f64::EPSILON);
        assert_eq!(constants::epsilon::<f32>(), f32::EPSILON);
        assert!(constants::fd_step::<f64>() < constants::fd_step::<f32>() as f64);
    }

    #[test]
    fn test_scalar_conversions() {
        let x: f64 = <f64 as Scalar>::from_f64(3.14);
        assert_eq!(x, 3.14);

        let y: f32 = <f32 as Scalar>::from_f64(2.5);
        assert_eq!(y, 2.5);
        assert_relative_eq!(Scalar::to_f64(y), 2.5);

        assert_eq!(<f64 as Scalar>::try_from_f64(1.0), Some(1.0));
    }

    #[test]
    fn test_native_float_semantics() {
        // Degenerate arithmetic stays inside the float domain.
        let zero: f64 = 0.0;
        assert!((1.0 / zero).is_infinite());
        assert!((zero / zero).is_nan());
        assert!(Float::exp(1000.0_f64).is_infinite());
    }
}
