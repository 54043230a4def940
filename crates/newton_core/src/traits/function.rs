//! Vector-valued function and analytical Jacobian traits.

use crate::types::{DomainError, Matrix, Vector};

/// A pure mapping from `R^n` to `R^n`, possibly with a restricted domain.
///
/// Implementations must be repeatable and free of side effects: the solver
/// evaluates them many times per iteration (once per coordinate when the
/// Jacobian is estimated) and relies on identical inputs giving identical
/// outputs.
///
/// Points outside the domain are reported as [`DomainError`]; the solver
/// propagates them to its caller unchanged.
///
/// # Examples
/// ```
/// use newton_core::traits::VectorFunction;
/// use newton_core::types::{scalar, DomainError, Vector};
///
/// let f = |x: &Vector| -> Result<Vector, DomainError> { Ok(x.map(|v| 3.0 * v + 6.0)) };
/// assert_eq!(f.evaluate(&scalar(-2.0)).unwrap()[0], 0.0);
/// ```
pub trait VectorFunction {
    /// Evaluate the function at `x`.
    fn evaluate(&self, x: &Vector) -> Result<Vector, DomainError>;
}

impl<F> VectorFunction for F
where
    F: Fn(&Vector) -> Result<Vector, DomainError>,
{
    #[inline]
    fn evaluate(&self, x: &Vector) -> Result<Vector, DomainError> {
        self(x)
    }
}

/// Analytical Jacobian of a [`VectorFunction`].
///
/// Must share the function's domain and return an `n x n` matrix whose
/// entry `(i, j)` is `∂f_i/∂x_j`.
pub trait JacobianProvider {
    /// Evaluate the Jacobian at `x`.
    fn jacobian(&self, x: &Vector) -> Result<Matrix, DomainError>;
}

impl<J> JacobianProvider for J
where
    J: Fn(&Vector) -> Result<Matrix, DomainError>,
{
    #[inline]
    fn jacobian(&self, x: &Vector) -> Result<Matrix, DomainError> {
        self(x)
    }
}
