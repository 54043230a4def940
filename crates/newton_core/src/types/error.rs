//! Error types for structured error handling.
//!
//! This module provides:
//! - `DomainError`: A caller-supplied function was evaluated outside its domain
//! - `ConfigurationError`: Malformed construction inputs (solver settings, function coefficients)
//! - `SolverError`: Failures of the Newton iteration, carrying the two above unchanged

use thiserror::Error;

/// A function was evaluated at a point outside its valid domain.
///
/// Raised by caller-supplied functions (for example a logarithm of a
/// non-positive value) and propagated through the Jacobian estimator and
/// the solver without being reinterpreted.
///
/// # Examples
/// ```
/// use newton_core::types::DomainError;
///
/// let err = DomainError::new(&[2.0], "log argument must be positive");
/// assert_eq!(
///     format!("{}", err),
///     "Point out of the function domain at x = [2.0]: log argument must be positive"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("Point out of the function domain at x = {point:?}: {reason}")]
pub struct DomainError {
    /// Coordinates of the offending point
    pub point: Vec<f64>,
    /// Why the point is rejected
    pub reason: String,
}

impl DomainError {
    /// Create a domain error for the given point.
    pub fn new(point: &[f64], reason: impl Into<String>) -> Self {
        Self {
            point: point.to_vec(),
            reason: reason.into(),
        }
    }
}

/// Malformed construction inputs.
///
/// # Variants
/// - `InvalidTolerance`: Tolerance not positive and finite
/// - `ZeroIterations`: Iteration budget of zero
/// - `InvalidStep`: Finite-difference step zero or non-finite
/// - `InvalidRadius`: Divergence radius not positive
/// - `EmptyCoefficients`: Polynomial without coefficients
/// - `EquationCount`: Wrong number of equations in a coefficient table
/// - `CoefficientCount`: Wrong number of coefficients in one equation
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigurationError {
    /// Tolerance must be strictly positive and finite.
    #[error("Invalid tolerance: {0} (must be positive and finite)")]
    InvalidTolerance(f64),

    /// At least one iteration is required.
    #[error("Invalid max_iterations: must be > 0")]
    ZeroIterations,

    /// Finite-difference step must be non-zero and finite.
    #[error("Invalid finite-difference step: {0} (must be non-zero and finite)")]
    InvalidStep(f64),

    /// Divergence radius must be strictly positive.
    #[error("Invalid divergence radius: {0} (must be positive)")]
    InvalidRadius(f64),

    /// A polynomial needs at least one coefficient.
    #[error("Polynomial requires at least one coefficient")]
    EmptyCoefficients,

    /// Coefficient table describes the wrong number of equations.
    #[error("The number of coefficients is incorrect: expected {expected} equations, got {actual}")]
    EquationCount {
        /// Required number of equations
        expected: usize,
        /// Number of equations supplied
        actual: usize,
    },

    /// One equation has the wrong number of coefficients.
    #[error("Equation {row} has {actual} coefficients, expected {expected}")]
    CoefficientCount {
        /// Zero-based equation index
        row: usize,
        /// Required number of coefficients
        expected: usize,
        /// Number of coefficients supplied
        actual: usize,
    },
}

/// Newton solver errors.
///
/// Function domain failures and configuration failures are wrapped
/// unchanged, so callers can tell a failure of their own function apart
/// from a failure of the iteration.
///
/// # Examples
/// ```
/// use newton_core::types::SolverError;
///
/// let err = SolverError::NonConvergence { iterations: 20, residual_norm: 0.5 };
/// assert!(format!("{}", err).contains("20 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// The function was evaluated outside its domain.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Residual norm left the divergence radius.
    #[error("Iteration is out of the radius at iteration {iteration}: |f(x)| = {residual_norm} > {radius}")]
    Divergence {
        /// Iteration at which the residual was checked
        iteration: usize,
        /// Euclidean norm of the residual
        residual_norm: f64,
        /// Configured divergence radius
        radius: f64,
    },

    /// Jacobian too ill-conditioned to trust the linear solve.
    #[error("Jacobian is singular or ill-conditioned: condition number {condition_number} exceeds {limit}")]
    SingularJacobian {
        /// Estimated 2-norm condition number (infinite when singular)
        condition_number: f64,
        /// Policy limit that was exceeded
        limit: f64,
    },

    /// Iteration budget exhausted before reaching the tolerance.
    #[error("Failed to converge after {iterations} iterations (|f(x)| = {residual_norm})")]
    NonConvergence {
        /// Number of iterations attempted
        iterations: usize,
        /// Residual norm at the last checked iterate
        residual_norm: f64,
    },

    /// Malformed construction input.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A function or Jacobian returned a result of the wrong size.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension (length, or `n x n` for matrices)
        expected: String,
        /// Dimension actually produced
        actual: String,
    },

    /// Invalid input that is neither a domain nor a configuration problem.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SolverError {
    /// Create a dimension mismatch error for vector lengths.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a dimension mismatch error for matrix shapes.
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Returns `true` when the failure came from the caller's function.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, SolverError::Domain(_))
    }
}
