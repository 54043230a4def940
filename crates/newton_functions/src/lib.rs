//! # Newton Functions (L2: Models)
//!
//! Closed-form functions with analytical Jacobians, used to exercise and
//! validate the `newton_core` solver.
//!
//! This crate provides:
//! - [`Polynomial`]: `p(x)` applied elementwise, Jacobian `diag(p'(xᵢ))`
//! - [`LogPolynomial`]: `ln(p(x))` elementwise, undefined where `p(x) <= 0`
//! - [`Polynomial2D`]: Two affine equations in two unknowns
//!
//! Every type implements both [`VectorFunction`] and [`JacobianProvider`],
//! so one value can serve as the function and (cloned) as its Jacobian.
//!
//! ```
//! use newton_core::math::solvers::{NewtonSolver, SolverConfig};
//! use newton_core::types::scalar;
//! use newton_functions::Polynomial;
//!
//! // x² + 2x - 3 = (x + 3)(x - 1)
//! let p = Polynomial::new(vec![1.0, 2.0, -3.0]).unwrap();
//! let solver = NewtonSolver::with_jacobian(p.clone(), p, SolverConfig::new(1e-12, 100)).unwrap();
//!
//! let root = solver.solve(&scalar(0.5)).unwrap();
//! assert!((root[0] - 1.0).abs() < 1e-12);
//! ```
//!
//! [`VectorFunction`]: newton_core::traits::VectorFunction
//! [`JacobianProvider`]: newton_core::traits::JacobianProvider

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod polynomials;

pub use polynomials::{LogPolynomial, Polynomial, Polynomial2D};
