//! Functions selectable from the command line.

use std::fmt;

use newton_core::traits::{JacobianProvider, VectorFunction};
use newton_core::types::{ConfigurationError, DomainError, Matrix, Vector};
use newton_functions::{LogPolynomial, Polynomial, Polynomial2D};

/// Function family chosen by CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// `p(x)` elementwise
    Polynomial,
    /// `ln(p(x))` elementwise
    LogPolynomial,
    /// Two affine equations, coefficients given row by row
    System,
}

impl FunctionKind {
    /// Pick the family from the `--log` and `--system` flags.
    pub fn from_flags(log: bool, system: bool) -> Self {
        match (log, system) {
            (_, true) => FunctionKind::System,
            (true, false) => FunctionKind::LogPolynomial,
            (false, false) => FunctionKind::Polynomial,
        }
    }
}

/// A concrete function built from a flat coefficient list.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetFunction {
    /// See [`Polynomial`]
    Polynomial(Polynomial),
    /// See [`LogPolynomial`]
    LogPolynomial(LogPolynomial),
    /// See [`Polynomial2D`]
    System(Polynomial2D),
}

impl TargetFunction {
    /// Build the function of `kind` from `coefficients`.
    ///
    /// For [`FunctionKind::System`] the list is split into rows of three.
    pub fn build(kind: FunctionKind, coefficients: &[f64]) -> Result<Self, ConfigurationError> {
        Ok(match kind {
            FunctionKind::Polynomial => {
                TargetFunction::Polynomial(Polynomial::new(coefficients.to_vec())?)
            }
            FunctionKind::LogPolynomial => {
                TargetFunction::LogPolynomial(LogPolynomial::new(coefficients.to_vec())?)
            }
            FunctionKind::System => {
                let rows: Vec<Vec<f64>> = coefficients.chunks(3).map(<[f64]>::to_vec).collect();
                TargetFunction::System(Polynomial2D::new(&rows)?)
            }
        })
    }
}

impl VectorFunction for TargetFunction {
    fn evaluate(&self, x: &Vector) -> Result<Vector, DomainError> {
        match self {
            TargetFunction::Polynomial(p) => p.evaluate(x),
            TargetFunction::LogPolynomial(p) => p.evaluate(x),
            TargetFunction::System(p) => p.evaluate(x),
        }
    }
}

impl JacobianProvider for TargetFunction {
    fn jacobian(&self, x: &Vector) -> Result<Matrix, DomainError> {
        match self {
            TargetFunction::Polynomial(p) => p.jacobian(x),
            TargetFunction::LogPolynomial(p) => p.jacobian(x),
            TargetFunction::System(p) => p.jacobian(x),
        }
    }
}

impl fmt::Display for TargetFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetFunction::Polynomial(p) => fmt::Display::fmt(p, f),
            TargetFunction::LogPolynomial(p) => fmt::Display::fmt(p, f),
            TargetFunction::System(p) => fmt::Display::fmt(p, f),
        }
    }
}
