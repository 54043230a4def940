//! Core numeric and error types.
//!
//! This module provides:
//! - [`Vector`] and [`Matrix`]: dense `f64` vectors and square Jacobians
//! - `error`: Structured error types for domain, configuration, and solver failures
//!
//! A scalar problem is the `n = 1` case of every type here; [`scalar`]
//! builds such a vector.

pub mod error;

pub use error::{ConfigurationError, DomainError, SolverError};

/// Dense column vector of dimension `n >= 1`.
pub type Vector = nalgebra::DVector<f64>;

/// Dense `n x n` matrix, used as a Jacobian.
pub type Matrix = nalgebra::DMatrix<f64>;

/// Build the one-dimensional vector holding `value`.
///
/// # Examples
/// ```
/// use newton_core::types::scalar;
///
/// let x = scalar(-1.0);
/// assert_eq!(x.len(), 1);
/// assert_eq!(x[0], -1.0);
/// ```
pub fn scalar(value: f64) -> Vector {
    Vector::from_element(1, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_is_one_dimensional() {
        let x = scalar(3.5);
        assert_eq!(x.nrows(), 1);
        assert_eq!(x.ncols(), 1);
        assert_eq!(x[0], 3.5);
    }

    #[test]
    fn test_scalar_norm_is_abs() {
        assert_eq!(scalar(-4.0).norm(), 4.0);
    }
}
