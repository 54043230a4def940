//! Newton-Raphson root finding for systems `f: R^n → R^n`.
//!
//! ## Components
//!
//! - [`NewtonSolver`]: Iterates `x ← x - J(x)⁻¹ f(x)` until `‖f(x)‖₂ < tolerance`
//! - [`JacobianStrategy`]: Analytical provider or forward finite differences,
//!   fixed when the solver is built
//! - [`SolverConfig`]: Tolerance, iteration budget, difference step and
//!   divergence radius
//!
//! ## Examples
//!
//! ```
//! use newton_core::math::solvers::{NewtonSolver, SolverConfig};
//! use newton_core::types::{DomainError, Matrix, Vector};
//!
//! // A linear system with its root at the origin
//! let a = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
//! let f = move |x: &Vector| -> Result<Vector, DomainError> { Ok(&a * x) };
//!
//! let solver = NewtonSolver::new(f, SolverConfig::new(1e-15, 20)).unwrap();
//! let root = solver.solve(&Vector::from_vec(vec![0.2, 0.4])).unwrap();
//! assert!(root.norm() < 1e-6);
//! ```
//!
//! The scalar case is `n = 1`; see [`crate::types::scalar`].

mod config;
mod newton;

pub use config::{SolverConfig, SolverConfigBuilder};
pub use newton::{AnalyticalFn, JacobianStrategy, NewtonResult, NewtonSolver};
