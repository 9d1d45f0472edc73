//! Configuration for derivative checking.
//!
//! Analytic derivatives produced by the graph are compared against central
//! finite differences. The step and tolerances used for that comparison are
//! gathered in [`DerivativeCheckConfig`].

use crate::error::{AutodiffError, Result};
use crate::types::Scalar;

/// Configuration for finite-difference derivative checks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivativeCheckConfig<T> {
    /// Step used for the central difference `(f(x+h) - f(x-h)) / 2h`
    pub step: T,
    /// Absolute tolerance on the derivative error
    pub abs_tolerance: T,
    /// Relative tolerance on the derivative error
    pub rel_tolerance: T,
}

impl<T: Scalar> Default for DerivativeCheckConfig<T> {
    fn default() -> Self {
        Self {
            step: T::DEFAULT_FD_STEP,
            abs_tolerance: T::DEFAULT_ABS_TOLERANCE,
            rel_tolerance: T::DEFAULT_REL_TOLERANCE,
        }
    }
}

impl<T: Scalar> DerivativeCheckConfig<T> {
    /// Creates a configuration with the default values for `T`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a validated configuration from `f64` values.
    ///
    /// Fails if a value cannot be represented in `T` or is not a positive
    /// finite number.
    pub fn from_f64(step: f64, abs_tolerance: f64, rel_tolerance: f64) -> Result<Self> {
        let convert = |v: f64| {
            <T as Scalar>::try_from_f64(v)
                .filter(|c| c.is_finite() || !v.is_finite())
                .ok_or_else(|| AutodiffError::conversion(v, std::any::type_name::<T>()))
        };
        let config = Self {
            step: convert(step)?,
            abs_tolerance: convert(abs_tolerance)?,
            rel_tolerance: convert(rel_tolerance)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the finite-difference step.
    pub fn with_step(mut self, step: T) -> Self {
        self.step = step;
        self
    }

    /// Sets the absolute tolerance.
    pub fn with_abs_tolerance(mut self, tolerance: T) -> Self {
        self.abs_tolerance = tolerance;
        self
    }

    /// Sets the relative tolerance.
    pub fn with_rel_tolerance(mut self, tolerance: T) -> Self {
        self.rel_tolerance = tolerance;
        self
    }

    /// Checks that every field is a positive finite number.
    pub fn validate(&self) -> Result<()> {
        check_positive("step", self.step)?;
        check_positive("abs_tolerance", self.abs_tolerance)?;
        check_positive("rel_tolerance", self.rel_tolerance)?;
        Ok(())
    }

    /// Returns true if `analytic` and `numeric` agree within tolerance.
    ///
    /// The error is accepted if it is below the absolute tolerance or below
    /// the relative tolerance scaled by the larger magnitude.
    pub fn accepts(&self, analytic: T, numeric: T) -> bool {
        let error = (analytic - numeric).abs();
        let scale = analytic.abs().max(numeric.abs());
        error <= self.abs_tolerance || error <= self.rel_tolerance * scale
    }
}

fn check_positive<T: Scalar>(parameter: &str, value: T) -> Result<()> {
    if !value.is_finite() {
        return Err(AutodiffError::invalid_configuration(
            parameter,
            value,
            "must be finite",
        ));
    }
    if value <= T::zero() {
        return Err(AutodiffError::invalid_configuration(
            parameter,
            value,
            "must be positive",
        ));
    }
    Ok(())
}
