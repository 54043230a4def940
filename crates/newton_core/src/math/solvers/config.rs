//! Solver configuration types.

use crate::types::ConfigurationError;

/// Configuration for the Newton solver.
///
/// Immutable once handed to a solver: the solver keeps its own copy and
/// exposes it read-only.
///
/// # Example
///
/// ```
/// use newton_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config = SolverConfig::default();
/// assert_eq!(config.tolerance, 1e-6);
/// assert_eq!(config.max_iterations, 20);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-15,
///     max_iterations: 200,
///     ..SolverConfig::default()
/// };
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Convergence tolerance on the residual.
    ///
    /// The solver stops when `‖f(x)‖₂ < tolerance`.
    pub tolerance: f64,

    /// Maximum number of iterations before giving up.
    ///
    /// If the solver doesn't converge within this limit,
    /// it returns `SolverError::NonConvergence`.
    pub max_iterations: usize,

    /// Forward finite-difference step used when no analytical Jacobian
    /// is supplied.
    pub step: f64,

    /// Divergence radius.
    ///
    /// An iterate whose residual norm exceeds this value is treated as
    /// diverging and the solve fails with `SolverError::Divergence`.
    pub radius: f64,
}

impl Default for SolverConfig {
    /// Create a default configuration.
    ///
    /// Default values:
    /// - `tolerance`: 1e-6
    /// - `max_iterations`: 20
    /// - `step`: 1e-6
    /// - `radius`: 10.0
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 20,
            step: 1e-6,
            radius: 10.0,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with specified tolerance and iteration limit.
    ///
    /// Step and radius keep their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use newton_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// assert_eq!(config.radius, 10.0);
    /// ```
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
            ..Self::default()
        }
    }

    /// Create a configuration builder for fluent construction.
    pub fn builder() -> SolverConfigBuilder {
        SolverConfigBuilder::new()
    }

    /// Create a configuration with high precision settings.
    ///
    /// Uses tighter tolerance (1e-14) and more iterations (200).
    pub fn high_precision() -> Self {
        Self {
            tolerance: 1e-14,
            max_iterations: 200,
            ..Self::default()
        }
    }

    /// Create a configuration optimised for fast convergence.
    ///
    /// Uses relaxed tolerance (1e-4) and fewer iterations (10).
    pub fn fast() -> Self {
        Self {
            tolerance: 1e-4,
            max_iterations: 10,
            ..Self::default()
        }
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the maximum iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the finite-difference step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the divergence radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Check every field.
    ///
    /// # Errors
    ///
    /// - `InvalidTolerance` if `tolerance` is not positive and finite
    /// - `ZeroIterations` if `max_iterations == 0`
    /// - `InvalidStep` if `step` is zero or non-finite
    /// - `InvalidRadius` if `radius` is not positive (`f64::INFINITY` is allowed)
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(ConfigurationError::InvalidTolerance(self.tolerance));
        }
        if self.max_iterations == 0 {
            return Err(ConfigurationError::ZeroIterations);
        }
        if self.step == 0.0 || !self.step.is_finite() {
            return Err(ConfigurationError::InvalidStep(self.step));
        }
        if !(self.radius > 0.0) {
            return Err(ConfigurationError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}

/// Builder for `SolverConfig`.
///
/// # Example
///
/// ```
/// use newton_core::math::solvers::SolverConfig;
///
/// let config = SolverConfig::builder()
///     .tolerance(1e-15)
///     .max_iterations(100)
///     .radius(0.1)
///     .build()
///     .unwrap();
/// assert_eq!(config.radius, 0.1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverConfigBuilder {
    config: SolverConfig,
}

impl SolverConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the convergence tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Set the maximum iterations.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Set the finite-difference step.
    pub fn step(mut self, step: f64) -> Self {
        self.config.step = step;
        self
    }

    /// Set the divergence radius.
    pub fn radius(mut self, radius: f64) -> Self {
        self.config.radius = radius;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<SolverConfig, ConfigurationError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Default Configuration Tests
    // ========================================

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert!((config.tolerance - 1e-6).abs() < 1e-20);
        assert_eq!(config.max_iterations, 20);
        assert!((config.step - 1e-6).abs() < 1e-20);
        assert!((config.radius - 10.0).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_config() {
        let config = SolverConfig::new(1e-12, 200);
        assert!((config.tolerance - 1e-12).abs() < 1e-25);
        assert_eq!(config.max_iterations, 200);
        assert_eq!(config.step, SolverConfig::default().step);
    }

    #[test]
    fn test_high_precision_config() {
        let config = SolverConfig::high_precision();
        assert!(config.tolerance < 1e-12);
        assert!(config.max_iterations >= 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fast_config() {
        let config = SolverConfig::fast();
        assert!(config.tolerance > 1e-6);
        assert!(config.max_iterations <= 20);
        assert!(config.validate().is_ok());
    }

    // ========================================
    // Validation Tests
    // ========================================

    #[test]
    fn test_zero_tolerance_rejected() {
        let config = SolverConfig::default().with_tolerance(0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::InvalidTolerance(0.0))
        );
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let config = SolverConfig::default().with_tolerance(-1e-10);
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidTolerance(_))
        ));
    }

    #[test]
    fn test_nan_tolerance_rejected() {
        let config = SolverConfig::default().with_tolerance(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = SolverConfig::default().with_max_iterations(0);
        assert_eq!(config.validate(), Err(ConfigurationError::ZeroIterations));
    }

    #[test]
    fn test_zero_step_rejected() {
        let config = SolverConfig::default().with_step(0.0);
        assert_eq!(config.validate(), Err(ConfigurationError::InvalidStep(0.0)));
    }

    #[test]
    fn test_negative_step_allowed() {
        let config = SolverConfig::default().with_step(-1e-6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_radius_validation() {
        assert_eq!(
            SolverConfig::default().with_radius(0.0).validate(),
            Err(ConfigurationError::InvalidRadius(0.0))
        );
        assert!(SolverConfig::default()
            .with_radius(f64::NAN)
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .with_radius(f64::INFINITY)
            .validate()
            .is_ok());
    }

    // ========================================
    // Builder Tests
    // ========================================

    #[test]
    fn test_builder_default() {
        let config = SolverConfig::builder().build().unwrap();
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn test_builder_chained() {
        let config = SolverConfig::builder()
            .tolerance(1e-15)
            .max_iterations(200)
            .step(1e-9)
            .radius(0.1)
            .build()
            .unwrap();

        assert!((config.tolerance - 1e-15).abs() < 1e-25);
        assert_eq!(config.max_iterations, 200);
        assert!((config.step - 1e-9).abs() < 1e-20);
        assert!((config.radius - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_builder_rejects_invalid() {
        let result = SolverConfig::builder().max_iterations(0).build();
        assert_eq!(result, Err(ConfigurationError::ZeroIterations));
    }

    // ========================================
    // Clone/Copy/Debug Tests
    // ========================================

    #[test]
    fn test_config_copy() {
        let config1 = SolverConfig::default();
        let config2 = config1; // Copy semantics
        assert_eq!(config1, config2);
    }

    #[test]
    fn test_config_debug() {
        let config = SolverConfig::default();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("SolverConfig"));
        assert!(debug_str.contains("tolerance"));
        assert!(debug_str.contains("radius"));
    }
}
