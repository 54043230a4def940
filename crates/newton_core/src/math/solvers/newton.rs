//! Multivariate Newton-Raphson root-finding solver.

use std::fmt;

use super::SolverConfig;
use crate::math::conditioning::{condition_number, CONDITION_NUMBER_LIMIT};
use crate::math::jacobian::JacobianEstimator;
use crate::traits::{JacobianProvider, VectorFunction};
use crate::types::{ConfigurationError, DomainError, Matrix, SolverError, Vector};

/// Function-pointer Jacobian provider.
///
/// Default type parameter of [`NewtonSolver`]; solvers built with
/// [`NewtonSolver::new`] never call it.
pub type AnalyticalFn = fn(&Vector) -> Result<Matrix, DomainError>;

/// How the solver obtains the Jacobian, fixed at construction.
pub enum JacobianStrategy<J> {
    /// Caller-supplied analytical Jacobian.
    Analytical(J),
    /// Forward finite differences with the configured step.
    ForwardDifference(JacobianEstimator),
}

impl<J> JacobianStrategy<J> {
    /// Returns `true` for the analytical variant.
    pub fn is_analytical(&self) -> bool {
        matches!(self, JacobianStrategy::Analytical(_))
    }
}

impl<J: JacobianProvider> JacobianStrategy<J> {
    /// Jacobian of `f` at `x`, given `fx = f(x)`.
    fn evaluate<F>(&self, f: &F, x: &Vector, fx: &Vector) -> Result<Matrix, SolverError>
    where
        F: VectorFunction + ?Sized,
    {
        match self {
            JacobianStrategy::Analytical(provider) => Ok(provider.jacobian(x)?),
            JacobianStrategy::ForwardDifference(estimator) => estimator.approximate_with(f, x, fx),
        }
    }
}

impl<J: Clone> Clone for JacobianStrategy<J> {
    fn clone(&self) -> Self {
        match self {
            JacobianStrategy::Analytical(provider) => JacobianStrategy::Analytical(provider.clone()),
            JacobianStrategy::ForwardDifference(estimator) => {
                JacobianStrategy::ForwardDifference(*estimator)
            }
        }
    }
}

impl<J> fmt::Debug for JacobianStrategy<J> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JacobianStrategy::Analytical(_) => f.write_str("Analytical"),
            JacobianStrategy::ForwardDifference(estimator) => f
                .debug_tuple("ForwardDifference")
                .field(&estimator.step())
                .finish(),
        }
    }
}

/// Outcome of a successful solve.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonResult {
    /// Point with `‖f(root)‖₂ < tolerance`.
    pub root: Vector,
    /// `f(root)`.
    pub residual: Vector,
    /// Euclidean norm of `residual`.
    pub residual_norm: f64,
    /// Newton steps taken (0 when the initial guess already converged).
    pub iterations: usize,
}

/// Newton-Raphson solver for `f(x) = 0` with `f: R^n → R^n`.
///
/// Each iteration solves the linear system `J(x) · h = f(x)` and moves to
/// `x - h`. The Jacobian comes from a supplied analytical provider or from
/// forward finite differences, chosen once at construction.
///
/// # Type Parameters
///
/// * `F` - The function, any [`VectorFunction`] (closures included)
/// * `J` - Analytical Jacobian provider; defaults to [`AnalyticalFn`] for
///   solvers that estimate the Jacobian
///
/// # Failure Modes
///
/// - Residual norm above the divergence radius: `SolverError::Divergence`
/// - Jacobian condition number above 1e10: `SolverError::SingularJacobian`
/// - Iteration budget exhausted: `SolverError::NonConvergence`
/// - Function undefined at an iterate: `SolverError::Domain`, unchanged
///
/// # Example
///
/// ```
/// use newton_core::math::solvers::{NewtonSolver, SolverConfig};
/// use newton_core::types::{scalar, DomainError, Vector};
///
/// let f = |x: &Vector| -> Result<Vector, DomainError> { Ok(x.map(|v| 3.0 * v + 6.0)) };
/// let config = SolverConfig::new(1e-15, 200);
/// let solver = NewtonSolver::new(f, config).unwrap();
///
/// let root = solver.solve(&scalar(-1.0)).unwrap();
/// assert_eq!(root[0], -2.0);
/// ```
#[derive(Clone)]
pub struct NewtonSolver<F, J = AnalyticalFn> {
    function: F,
    jacobian: JacobianStrategy<J>,
    config: SolverConfig,
}

impl<F: VectorFunction> NewtonSolver<F> {
    /// Create a solver that estimates the Jacobian by finite differences.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field of `config`.
    pub fn new(function: F, config: SolverConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self {
            function,
            jacobian: JacobianStrategy::ForwardDifference(JacobianEstimator::new(config.step)),
            config,
        })
    }

    /// Create a finite-difference solver with default configuration.
    pub fn with_defaults(function: F) -> Self {
        let config = SolverConfig::default();
        Self {
            function,
            jacobian: JacobianStrategy::ForwardDifference(JacobianEstimator::new(config.step)),
            config,
        }
    }
}

impl<F, J> NewtonSolver<F, J>
where
    F: VectorFunction,
    J: JacobianProvider,
{
    /// Create a solver that uses an analytical Jacobian.
    ///
    /// The configured `step` is kept but unused.
    ///
    /// # Example
    ///
    /// ```
    /// use newton_core::math::solvers::{NewtonSolver, SolverConfig};
    /// use newton_core::types::{scalar, DomainError, Matrix, Vector};
    ///
    /// // x² - 2 = 0
    /// let f = |x: &Vector| -> Result<Vector, DomainError> { Ok(x.map(|v| v * v - 2.0)) };
    /// let df = |x: &Vector| -> Result<Matrix, DomainError> {
    ///     Ok(Matrix::from_diagonal(&x.map(|v| 2.0 * v)))
    /// };
    ///
    /// let solver = NewtonSolver::with_jacobian(f, df, SolverConfig::new(1e-12, 50)).unwrap();
    /// let root = solver.solve(&scalar(1.0)).unwrap();
    /// assert!((root[0] - std::f64::consts::SQRT_2).abs() < 1e-12);
    /// ```
    pub fn with_jacobian(
        function: F,
        jacobian: J,
        config: SolverConfig,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self {
            function,
            jacobian: JacobianStrategy::Analytical(jacobian),
            config,
        })
    }

    /// Find a root starting from `x0`.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `‖f(x)‖₂ < tolerance`
    /// * `Err(SolverError::Divergence)` - Residual norm exceeded the radius
    /// * `Err(SolverError::SingularJacobian)` - Jacobian too ill-conditioned
    /// * `Err(SolverError::NonConvergence)` - Iteration budget exhausted
    /// * `Err(SolverError::Domain)` - Function undefined at an iterate
    pub fn solve(&self, x0: &Vector) -> Result<Vector, SolverError> {
        self.solve_detailed(x0).map(|result| result.root)
    }

    /// Find a root starting from `x0`, reporting residual and step count.
    pub fn solve_detailed(&self, x0: &Vector) -> Result<NewtonResult, SolverError> {
        if x0.is_empty() {
            return Err(SolverError::InvalidInput(
                "Empty initial guess".to_string(),
            ));
        }

        let mut x = x0.clone();
        let mut residual_norm = f64::NAN;

        for iteration in 0..self.config.max_iterations {
            let fx = self.residual(&x)?;
            residual_norm = fx.norm();

            // Check for convergence
            if residual_norm < self.config.tolerance {
                return Ok(NewtonResult {
                    root: x,
                    residual: fx,
                    residual_norm,
                    iterations: iteration,
                });
            }

            // NaN and infinite residuals count as divergence
            if !(residual_norm <= self.config.radius) || !residual_norm.is_finite() {
                return Err(SolverError::Divergence {
                    iteration,
                    residual_norm,
                    radius: self.config.radius,
                });
            }

            x = self.newton_update(&x, &fx)?;
        }

        Err(SolverError::NonConvergence {
            iterations: self.config.max_iterations,
            residual_norm,
        })
    }

    /// Take a single Newton step from `x`.
    ///
    /// If `fx` is provided it is taken as `f(x)`; otherwise `f` is evaluated.
    ///
    /// # Errors
    ///
    /// * `SolverError::SingularJacobian` - Condition number above 1e10
    /// * `SolverError::Domain` - Function or Jacobian undefined at `x`
    /// * `SolverError::DimensionMismatch` - `fx` or the Jacobian has the wrong size
    pub fn step(&self, x: &Vector, fx: Option<&Vector>) -> Result<Vector, SolverError> {
        if x.is_empty() {
            return Err(SolverError::InvalidInput("Empty point vector".to_string()));
        }

        match fx {
            Some(fx) => {
                if fx.len() != x.len() {
                    return Err(SolverError::length_mismatch(x.len(), fx.len()));
                }
                self.newton_update(x, fx)
            }
            None => {
                let fx = self.residual(x)?;
                self.newton_update(x, &fx)
            }
        }
    }

    /// Jacobian at `x` as the solver sees it (analytical or estimated).
    pub fn jacobian_at(&self, x: &Vector) -> Result<Matrix, SolverError> {
        let fx = self.residual(x)?;
        self.jacobian_with(x, &fx)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns the Jacobian strategy chosen at construction.
    pub fn strategy(&self) -> &JacobianStrategy<J> {
        &self.jacobian
    }

    /// Returns `true` when an analytical Jacobian was supplied.
    pub fn uses_analytical_jacobian(&self) -> bool {
        self.jacobian.is_analytical()
    }

    /// Returns a reference to the function being solved.
    pub fn function(&self) -> &F {
        &self.function
    }

    fn residual(&self, x: &Vector) -> Result<Vector, SolverError> {
        let fx = self.function.evaluate(x)?;
        if fx.len() != x.len() {
            return Err(SolverError::length_mismatch(x.len(), fx.len()));
        }
        Ok(fx)
    }

    fn jacobian_with(&self, x: &Vector, fx: &Vector) -> Result<Matrix, SolverError> {
        let n = x.len();
        let jacobian = self.jacobian.evaluate(&self.function, x, fx)?;
        if jacobian.shape() != (n, n) {
            return Err(SolverError::shape_mismatch((n, n), jacobian.shape()));
        }
        Ok(jacobian)
    }

    fn newton_update(&self, x: &Vector, fx: &Vector) -> Result<Vector, SolverError> {
        let jacobian = self.jacobian_with(x, fx)?;

        let condition_number = condition_number(&jacobian);
        if condition_number > CONDITION_NUMBER_LIMIT {
            return Err(SolverError::SingularJacobian {
                condition_number,
                limit: CONDITION_NUMBER_LIMIT,
            });
        }

        // Solve J · h = f(x)
        let h = jacobian
            .lu()
            .solve(fx)
            .ok_or(SolverError::SingularJacobian {
                condition_number: f64::INFINITY,
                limit: CONDITION_NUMBER_LIMIT,
            })?;

        Ok(x - h)
    }
}

impl<F, J> fmt::Debug for NewtonSolver<F, J> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewtonSolver")
            .field("jacobian", &self.jacobian)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
