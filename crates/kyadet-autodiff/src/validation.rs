//! Numerical validation of derivatives.
//!
//! This module compares the derivatives produced by the graph against
//! central finite differences, and cross-checks the two differentiation
//! modes against each other. Finite differences are taken by rebinding the
//! target leaf (see [`Bindings`]), so the checked graph is never modified.

use crate::eval::Bindings;
use crate::graph::Expr;
use kyadet_core::{AutodiffError, DerivativeCheckConfig, Result, Scalar};
use log::{debug, warn};

/// Results from a derivative check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivativeCheckResult<T> {
    /// Value-mode derivative
    pub analytic: T,
    /// Graph-mode derivative, evaluated
    pub symbolic: T,
    /// Central finite-difference estimate
    pub numeric: T,
    /// `|analytic - numeric|`
    pub error: T,
    /// Whether value mode and graph mode agree
    pub modes_agree: bool,
    /// Whether the check passed
    pub passed: bool,
}

/// Checks graph derivatives against finite differences.
#[derive(Debug, Clone)]
pub struct DerivativeChecker<T> {
    config: DerivativeCheckConfig<T>,
}

impl<T: Scalar> Default for DerivativeChecker<T> {
    fn default() -> Self {
        Self {
            config: DerivativeCheckConfig::default(),
        }
    }
}

impl<T: Scalar> DerivativeChecker<T> {
    /// Creates a checker, validating the configuration.
    pub fn new(config: DerivativeCheckConfig<T>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &DerivativeCheckConfig<T> {
        &self.config
    }

    /// Checks `d expr / d target` at the point described by `at`.
    ///
    /// Leaves missing from `at` keep their stored value.
    pub fn check(
        &self,
        expr: &Expr<T>,
        target: &Expr<T>,
        at: &Bindings<T>,
    ) -> DerivativeCheckResult<T> {
        let analytic = expr.diff_with(target.id(), at);
        let symbolic = expr.diff_graph(target.id()).value_with(at);
        let numeric = self.central_difference(target, at, |b| expr.value_with(b));

        self.compare(target, analytic, symbolic, numeric)
    }

    /// Checks the mixed second derivative `∂² expr / ∂first ∂second`.
    ///
    /// The graph-mode second derivative is compared against a finite
    /// difference of the value-mode first derivative.
    pub fn check_mixed(
        &self,
        expr: &Expr<T>,
        first: &Expr<T>,
        second: &Expr<T>,
        at: &Bindings<T>,
    ) -> DerivativeCheckResult<T> {
        let first_derivative = expr.diff_graph(first.id());
        let analytic = first_derivative.diff_with(second.id(), at);
        let symbolic = first_derivative.diff_graph(second.id()).value_with(at);
        let numeric =
            self.central_difference(second, at, |b| expr.diff_with(first.id(), b));

        self.compare(second, analytic, symbolic, numeric)
    }

    /// Like [`check`](Self::check), but returns an error when it fails.
    pub fn check_strict(
        &self,
        expr: &Expr<T>,
        target: &Expr<T>,
        at: &Bindings<T>,
    ) -> Result<DerivativeCheckResult<T>> {
        let result = self.check(expr, target, at);
        if result.passed {
            Ok(result)
        } else {
            Err(AutodiffError::check_failed(
                target.to_string(),
                Scalar::to_f64(result.analytic),
                Scalar::to_f64(result.numeric),
            ))
        }
    }

    fn central_difference<F>(&self, target: &Expr<T>, at: &Bindings<T>, f: F) -> T
    where
        F: Fn(&Bindings<T>) -> T,
    {
        let h = self.config.step;
        let x0 = target.value_with(at);

        let plus = at.clone().with(target, x0 + h);
        let minus = at.clone().with(target, x0 - h);

        (f(&plus) - f(&minus)) / (h + h)
    }

    fn compare(
        &self,
        target: &Expr<T>,
        analytic: T,
        symbolic: T,
        numeric: T,
    ) -> DerivativeCheckResult<T> {
        let modes_agree = self.config.accepts(analytic, symbolic);
        let passed = modes_agree && self.config.accepts(analytic, numeric);
        let error = (analytic - numeric).abs();

        debug!(
            "derivative check w.r.t. {}: analytic={} symbolic={} numeric={} error={}",
            target.id(),
            analytic,
            symbolic,
            numeric,
            error
        );
        if !passed {
            warn!(
                "derivative mismatch w.r.t. {} ({}): analytic={} symbolic={} numeric={}",
                target.id(),
                target,
                analytic,
                symbolic,
                numeric
            );
        }

        DerivativeCheckResult {
            analytic,
            symbolic,
            numeric,
            error,
            modes_agree,
            passed,
        }
    }
}
