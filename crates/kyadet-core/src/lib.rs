//! Core traits and types for kyadet.
//!
//! This crate provides the foundations shared by the differentiation engine:
//! the numeric [`Scalar`](types::Scalar) trait every graph is generic over,
//! the error type used by the supporting surfaces, and the configuration of
//! derivative checks.
//!
//! # Modules
//!
//! - [`config`]: Finite-difference check configuration
//! - [`error`]: Error types
//! - [`types`]: Scalar trait and numerical constants

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used items at the crate root
pub use config::DerivativeCheckConfig;
pub use error::{AutodiffError, Result};
pub use types::Scalar;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use kyadet_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::DerivativeCheckConfig;
    pub use crate::error::{AutodiffError, Result};
    pub use crate::types::{constants, Scalar};
}
