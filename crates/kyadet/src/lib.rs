//! # kyadet
//!
//! Forward-mode automatic differentiation on explicit expression graphs.
//!
//! Arithmetic on [`Expr`](autodiff::Expr) handles builds an immutable graph.
//! Derivatives are taken with respect to a leaf's identity, either as a
//! number (value mode) or as a new graph that can be differentiated again
//! (graph mode).
//!
//! ## Quick Start
//!
//! ```
//! use kyadet::prelude::*;
//!
//! let x = Expr::named(1.0_f64, "x");
//! let y = Expr::named(2.0_f64, "y");
//! let z = &x / &y;
//!
//! assert_eq!(z.value(), 0.5);
//! assert_eq!(z.diff(x.id()), 0.5);
//!
//! let dxy = z.diff_graph(x.id()).diff_graph(y.id());
//! assert!((dxy.value() + 0.25).abs() < 1e-12);
//! ```
//!
//! ## Crates
//!
//! - [`types`], [`error`], [`config`]: scalar trait, errors and configuration
//! - [`autodiff`]: the expression graph and differentiation

pub use kyadet_autodiff as autodiff;
pub use kyadet_core::{config, error, types};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use kyadet_autodiff::prelude::*;
    pub use kyadet_core::types::constants;
}
