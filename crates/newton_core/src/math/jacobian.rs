//! Forward finite-difference Jacobian estimation.
//!
//! For a function `f: R^n → R^n` and a point `x`, column `i` of the
//! estimate is
//!
//! ```text
//! J[:, i] = (f(x + dx·e_i) - f(x)) / dx
//! ```
//!
//! which costs one baseline evaluation plus one evaluation per coordinate.
//! The step `dx` is used as given (no scaling by `|x_i|`), so the result is
//! reproducible bit for bit for identical `f`, `x` and `dx`.

use crate::traits::VectorFunction;
use crate::types::{ConfigurationError, Matrix, SolverError, Vector};

/// Default finite-difference step.
pub const DEFAULT_STEP: f64 = 1e-6;

/// Estimate the Jacobian of `f` at `x` with forward differences of size `dx`.
///
/// # Arguments
///
/// * `f` - Function to differentiate
/// * `x` - Evaluation point (dimension `n >= 1`)
/// * `dx` - Step size (non-zero, finite)
///
/// # Returns
///
/// * `Ok(J)` - `n x n` matrix with `J[(i, j)] ≈ ∂f_i/∂x_j`
/// * `Err(SolverError::Domain)` - `f` is undefined at `x` or a perturbed point
/// * `Err(SolverError::Configuration)` - `dx` is zero or non-finite
/// * `Err(SolverError::DimensionMismatch)` - `f(x)` has a different length than `x`
///
/// # Example
///
/// ```
/// use newton_core::math::jacobian::approximate_jacobian;
/// use newton_core::types::{DomainError, Vector};
///
/// // f(x) = [x0 + 2 x1, 3 x0 + 4 x1]
/// let f = |x: &Vector| -> Result<Vector, DomainError> {
///     Ok(Vector::from_vec(vec![x[0] + 2.0 * x[1], 3.0 * x[0] + 4.0 * x[1]]))
/// };
///
/// let j = approximate_jacobian(&f, &Vector::from_vec(vec![5.0, 6.0]), 1e-6).unwrap();
/// assert!((j[(0, 1)] - 2.0).abs() < 1e-6);
/// assert!((j[(1, 0)] - 3.0).abs() < 1e-6);
/// ```
pub fn approximate_jacobian<F>(f: &F, x: &Vector, dx: f64) -> Result<Matrix, SolverError>
where
    F: VectorFunction + ?Sized,
{
    check_point(x)?;
    check_step(dx)?;
    let fx = f.evaluate(x)?;
    forward_difference(f, x, &fx, dx)
}

/// Estimate the Jacobian reusing an already evaluated `fx = f(x)`.
///
/// Saves the baseline evaluation when the caller has just computed the
/// residual, as the Newton loop does.
pub fn approximate_jacobian_with<F>(
    f: &F,
    x: &Vector,
    fx: &Vector,
    dx: f64,
) -> Result<Matrix, SolverError>
where
    F: VectorFunction + ?Sized,
{
    check_point(x)?;
    check_step(dx)?;
    forward_difference(f, x, fx, dx)
}

fn forward_difference<F>(f: &F, x: &Vector, fx: &Vector, dx: f64) -> Result<Matrix, SolverError>
where
    F: VectorFunction + ?Sized,
{
    let n = x.len();
    if fx.len() != n {
        return Err(SolverError::length_mismatch(n, fx.len()));
    }

    let mut jacobian = Matrix::zeros(n, n);
    let mut x_plus = x.clone();

    for i in 0..n {
        x_plus[i] = x[i] + dx;
        let f_plus = f.evaluate(&x_plus)?;
        if f_plus.len() != n {
            return Err(SolverError::length_mismatch(n, f_plus.len()));
        }

        jacobian.set_column(i, &((f_plus - fx) / dx));

        x_plus[i] = x[i];
    }

    Ok(jacobian)
}

fn check_point(x: &Vector) -> Result<(), SolverError> {
    if x.is_empty() {
        return Err(SolverError::InvalidInput("Empty point vector".to_string()));
    }
    Ok(())
}

fn check_step(dx: f64) -> Result<(), ConfigurationError> {
    if dx == 0.0 || !dx.is_finite() {
        return Err(ConfigurationError::InvalidStep(dx));
    }
    Ok(())
}

/// Zero-state finite-difference Jacobian estimator.
///
/// Holds only the step size; every call is independent. Used by the
/// solver when no analytical Jacobian is supplied.
///
/// # Example
///
/// ```
/// use newton_core::math::jacobian::JacobianEstimator;
/// use newton_core::types::{scalar, DomainError, Vector};
///
/// let estimator = JacobianEstimator::new(1e-3);
/// let f = |x: &Vector| -> Result<Vector, DomainError> { Ok(x.map(|v| 3.0 * v + 5.0)) };
///
/// let j = estimator.approximate(&f, &scalar(2.0)).unwrap();
/// assert_eq!(j.shape(), (1, 1));
/// assert!((j[(0, 0)] - 3.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JacobianEstimator {
    step: f64,
}

impl JacobianEstimator {
    /// Create an estimator with step `dx`.
    ///
    /// The step is validated when the estimator is used.
    pub fn new(step: f64) -> Self {
        Self { step }
    }

    /// Finite-difference step size.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Estimate the Jacobian of `f` at `x`.
    pub fn approximate<F>(&self, f: &F, x: &Vector) -> Result<Matrix, SolverError>
    where
        F: VectorFunction + ?Sized,
    {
        approximate_jacobian(f, x, self.step)
    }

    /// Estimate the Jacobian of `f` at `x` given `fx = f(x)`.
    pub fn approximate_with<F>(&self, f: &F, x: &Vector, fx: &Vector) -> Result<Matrix, SolverError>
    where
        F: VectorFunction + ?Sized,
    {
        approximate_jacobian_with(f, x, fx, self.step)
    }
}

impl Default for JacobianEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}
