//! Function contracts consumed by the solver.
//!
//! This module defines:
//! - Generic floating-point operations (`Float` trait)
//! - Vector-valued functions (`VectorFunction` trait)
//! - Analytical derivatives (`JacobianProvider` trait)
//!
//! Both contracts are implemented for plain closures, so a solver can be
//! built from `|x: &Vector| -> Result<Vector, DomainError> { ... }`
//! without declaring a type.

pub mod function;

pub use function::{JacobianProvider, VectorFunction};

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use newton_core::traits::Float;
///
/// fn horner<T: Float>(coeffs: &[f64], x: T) -> T {
///     coeffs
///         .iter()
///         .fold(T::zero(), |acc, &c| acc * x + T::from(c).unwrap())
/// }
///
/// assert_eq!(horner(&[1.0, 2.0, 3.0], 5.0_f64), 38.0);
/// ```
pub use num_traits::Float;
