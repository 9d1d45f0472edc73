//! Forward-mode automatic differentiation on explicit expression graphs.
//!
//! Arithmetic on [`Expr`] handles does not compute a number: it builds an
//! immutable directed acyclic graph of nodes. The graph can then be
//! evaluated, differentiated to a number, or differentiated into a new graph
//! that can itself be differentiated again.
//!
//! # Features
//!
//! - **Shared sub-expressions**: nodes are reference counted, so `x * x`
//!   references the same `x` twice and both occurrences are differentiated
//! - **Value mode**: [`Expr::diff`] returns the derivative in one fused sweep
//! - **Graph mode**: [`Expr::diff_graph`] returns the derivative as a graph,
//!   enabling second and mixed derivatives
//! - **Literal promotion**: `x + 2.0` and `2.0 + x` wrap the literal as a leaf
//! - **Validation**: [`DerivativeChecker`] compares derivatives against finite
//!   differences
//!
//! # Example
//!
//! ```
//! use kyadet_autodiff::prelude::*;
//!
//! let x = Expr::new(1.0_f64);
//! let y = Expr::new(1.0_f64);
//! let z = &x + &y / (&x * &y + 2.0);
//!
//! // ∂z/∂x = 1 - y² / (xy + 2)²
//! assert!((z.diff(x.id()) - (1.0 - 1.0 / 9.0)).abs() < 1e-12);
//!
//! // ∂²z/∂x∂y = -4y / (xy + 2)³
//! let dxy = z.diff_graph(x.id()).diff_graph(y.id());
//! assert!((dxy.value() + 4.0 / 27.0).abs() < 1e-12);
//! ```
//!
//! # Architecture
//!
//! 1. **Graph**: node variants, shared handles and identities
//! 2. **Operations**: composition operators and literal promotion
//! 3. **Evaluation**: values, optionally with rebound leaves
//! 4. **Forward / Symbolic**: the two differentiation modes
//!
//! Evaluation, both differentiation modes and dropping a graph all recurse
//! along operand edges, so stack depth grows with the longest chain in the
//! graph. Chains of a few hundred thousand nodes (for example
//! `s = s + 1.0` repeated in a loop) overflow the default thread stack.

pub mod display;
pub mod eval;
pub mod forward;
pub mod graph;
pub mod ops;
pub mod symbolic;
pub mod validation;

// Re-export key types
pub use eval::Bindings;
pub use graph::{Expr, Leaf, Node, NodeId};
pub use ops::{exp, IntoExpr, OpType};
pub use validation::{DerivativeCheckResult, DerivativeChecker};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::eval::Bindings;
    pub use crate::graph::{Expr, Leaf, Node, NodeId};
    pub use crate::ops::{exp, IntoExpr, OpType};
    pub use crate::validation::{DerivativeCheckResult, DerivativeChecker};
    pub use kyadet_core::{AutodiffError, DerivativeCheckConfig, Scalar};
}
