//! # newton_core: Multivariate Newton-Raphson Root Finding
//!
//! Solves `f(x) = 0` for `f: R^n → R^n` with Newton's method, using either
//! a supplied analytical Jacobian or one estimated by forward finite
//! differences.
//!
//! ## Modules
//!
//! - `types`: Vector and matrix aliases, error types (`SolverError`,
//!   `DomainError`, `ConfigurationError`)
//! - `traits`: `VectorFunction` and `JacobianProvider`
//! - `math::jacobian`: `JacobianEstimator` and free estimation functions
//! - `math::conditioning`: 2-norm condition number and the 1e10 singularity limit
//! - `math::solvers`: `NewtonSolver`, `SolverConfig`
//!
//! ## Dependencies
//!
//! - nalgebra: Dense vectors, LU solve and SVD
//! - num-traits: Generic float bounds for function implementations
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! The library does not log; callers decide what to report.
//!
//! ## Usage Examples
//!
//! ```rust
//! use newton_core::math::solvers::{NewtonSolver, SolverConfig};
//! use newton_core::types::{scalar, DomainError, SolverError, Vector};
//!
//! // ln(x) is undefined for x <= 0
//! let f = |x: &Vector| -> Result<Vector, DomainError> {
//!     if x.iter().any(|&v| v <= 0.0) {
//!         return Err(DomainError::new(x.as_slice(), "logarithm of a non-positive value"));
//!     }
//!     Ok(x.map(f64::ln))
//! };
//!
//! let solver = NewtonSolver::with_defaults(f);
//! let root = solver.solve(&scalar(0.5)).unwrap();
//! assert!((root[0] - 1.0).abs() < 1e-5);
//!
//! let err = solver.solve(&scalar(-1.0)).unwrap_err();
//! assert!(matches!(err, SolverError::Domain(_)));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SolverConfig` and the error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
