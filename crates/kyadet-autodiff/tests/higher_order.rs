//! Integration tests for graph-mode and higher-order differentiation.

use approx::assert_relative_eq;
use kyadet_autodiff::prelude::*;
use pretty_assertions::assert_eq;

/// Tests the mixed partial of `x + y / (x*y + 2)` at (1, 1).
#[test]
fn test_mixed_partial_closed_form() {
    let x = Expr::new(1.0_f64);
    let y = Expr::new(1.0_f64);
    let z = &x + &y / (&x * &y + 2.0);

    // ∂²z/∂x∂y = -4y / (xy + 2)³
    let dxy = z.diff_graph(x.id()).diff_graph(y.id());
    assert_relative_eq!(dxy.value(), -4.0 / 27.0, epsilon = 1e-14);

    // Mixed partials commute.
    let dyx = z.diff_graph(y.id()).diff_graph(x.id());
    assert_relative_eq!(dyx.value(), dxy.value(), epsilon = 1e-14);

    // Value mode on a graph-mode derivative.
    assert_relative_eq!(z.diff_graph(x.id()).diff(y.id()), -4.0 / 27.0, epsilon = 1e-14);
}

/// Tests the quotient scenario `z = x / y` at (1, 2).
#[test]
fn test_quotient_scenario() {
    let x = Expr::new(1.0_f64);
    let y = Expr::new(2.0_f64);
    let z = &x / &y;

    assert_eq!(z.value(), 0.5);
    assert_eq!(z.diff(x.id()), 0.5);
    assert_eq!(z.diff_graph(x.id()).value(), 0.5);
    assert_relative_eq!(z.diff_graph(x.id()).diff_graph(y.id()).value(), -0.25);
}

/// Tests second derivatives against closed forms.
#[test]
fn test_second_derivatives() {
    let x = Expr::new(0.4_f64);

    // f = x * exp(x), f'' = (x + 2) exp(x)
    let f = &x * exp(&x);
    let d2 = f.nth_derivative(x.id(), 2);
    assert_relative_eq!(d2.value(), 2.4 * 0.4_f64.exp(), epsilon = 1e-12);

    // g = 1 / x, g'' = 2 / x³
    let g = 1.0 / &x;
    let d2 = g.diff_graph(x.id()).diff_graph(x.id());
    assert_relative_eq!(d2.value(), 2.0 / 0.4_f64.powi(3), max_relative = 1e-12);
}

/// Tests that a derivative graph can be re-evaluated at other points.
#[test]
fn test_derivative_graph_with_bindings() {
    let x = Expr::named(1.0_f64, "x");
    let y = Expr::named(1.0_f64, "y");
    let z = &x + &y / (&x * &y + 2.0);
    let dxy = z.diff_graph(x.id()).diff_graph(y.id());

    for (xv, yv) in [(0.5, 2.0), (2.0, 3.0), (-1.0, 0.5)] {
        let at = Bindings::new().with(&x, xv).with(&y, yv);
        let expected = -4.0 * yv / (xv * yv + 2.0_f64).powi(3);
        assert_relative_eq!(dxy.value_with(&at), expected, max_relative = 1e-12);
    }
}

/// Tests that derivative graphs reference the original leaves.
#[test]
fn test_derivative_graph_keeps_leaves() {
    let x = Expr::named(3.0_f64, "x");
    let y = Expr::named(4.0_f64, "y");
    let f = &x * &y;
    let df = f.diff_graph(x.id());

    let leaves = df.leaves();
    assert!(leaves.iter().any(|l| l.ptr_eq(&x)));
    assert!(leaves.iter().any(|l| l.ptr_eq(&y)));
    assert_eq!(df.to_string(), "((1 * y) + (x * 0))");

    // Two fresh constants plus the two inputs.
    assert_eq!(leaves.len(), 4);
}

/// Tests that diamond-shared nodes are counted once in traversal and twice
/// in differentiation.
#[test]
fn test_diamond_sharing() {
    let x = Expr::new(1.5_f64);
    let shared = exp(&x);
    let f = &shared * &shared;

    assert_eq!(f.num_nodes(), 3);
    // d/dx exp(x)² = 2 exp(2x)
    assert_relative_eq!(f.diff(x.id()), 2.0 * 3.0_f64.exp(), max_relative = 1e-12);
    assert_relative_eq!(
        f.diff_graph(x.id()).value(),
        2.0 * 3.0_f64.exp(),
        max_relative = 1e-12
    );
}

/// Tests derivative checks on a typical expression.
#[test]
fn test_derivative_checker_integration() {
    let x = Expr::named(0.3_f64, "x");
    let y = Expr::named(-0.8_f64, "y");
    let f = exp(&x - &y) * (&x / (&y * &y + 1.0));

    let checker = DerivativeChecker::new(
        DerivativeCheckConfig::default()
            .with_step(1e-5)
            .with_abs_tolerance(1e-6),
    )
    .unwrap();
    let at = Bindings::new();

    assert!(checker.check_strict(&f, &x, &at).is_ok());
    assert!(checker.check_strict(&f, &y, &at).is_ok());
    assert!(checker.check_mixed(&f, &x, &y, &at).passed);
}
