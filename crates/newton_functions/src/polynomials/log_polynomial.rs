//! Logarithm of a polynomial.

use std::fmt;

use newton_core::traits::{JacobianProvider, VectorFunction};
use newton_core::types::{ConfigurationError, DomainError, Matrix, Vector};

use super::Polynomial;

/// `x ↦ ln(p(x))`, applied elementwise.
///
/// Defined only where `p(xᵢ) > 0` for every component; anywhere else both
/// evaluation and the Jacobian fail with [`DomainError`]. The Jacobian is
/// `diag(p'(xᵢ) / p(xᵢ))`.
///
/// # Example
///
/// ```
/// use newton_core::traits::VectorFunction;
/// use newton_core::types::scalar;
/// use newton_functions::LogPolynomial;
///
/// // ln(x² - 2x - 6)
/// let f = LogPolynomial::new(vec![1.0, -2.0, -6.0]).unwrap();
/// assert!(f.evaluate(&scalar(-2.0)).is_ok());
/// assert!(f.evaluate(&scalar(2.0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
pub struct LogPolynomial {
    polynomial: Polynomial,
}

impl LogPolynomial {
    /// Create `ln(p(x))` from the coefficients of `p`, highest degree first.
    pub fn new(coefficients: Vec<f64>) -> Result<Self, ConfigurationError> {
        Ok(Self {
            polynomial: Polynomial::new(coefficients)?,
        })
    }

    /// The inner polynomial `p`.
    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    /// Evaluate `ln(p(x))` at a single point.
    ///
    /// # Errors
    ///
    /// `DomainError` if `p(x) <= 0`.
    pub fn value(&self, x: f64) -> Result<f64, DomainError> {
        Ok(self.inner(x, &[x])?.ln())
    }

    /// `p(xᵢ)`, rejecting the whole `point` when it is not positive.
    fn inner(&self, xi: f64, point: &[f64]) -> Result<f64, DomainError> {
        let p = self.polynomial.value(xi);
        if !(p > 0.0) {
            return Err(DomainError::new(
                point,
                format!("logarithm argument p({}) = {} is not positive", xi, p),
            ));
        }
        Ok(p)
    }
}

impl TryFrom<Vec<f64>> for LogPolynomial {
    type Error = ConfigurationError;

    fn try_from(coefficients: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(coefficients)
    }
}

impl From<LogPolynomial> for Vec<f64> {
    fn from(f: LogPolynomial) -> Self {
        f.polynomial.into()
    }
}

impl VectorFunction for LogPolynomial {
    fn evaluate(&self, x: &Vector) -> Result<Vector, DomainError> {
        let mut out = Vector::zeros(x.len());
        for (i, &xi) in x.iter().enumerate() {
            out[i] = self.inner(xi, x.as_slice())?.ln();
        }
        Ok(out)
    }
}

impl JacobianProvider for LogPolynomial {
    fn jacobian(&self, x: &Vector) -> Result<Matrix, DomainError> {
        let mut diagonal = Vector::zeros(x.len());
        for (i, &xi) in x.iter().enumerate() {
            diagonal[i] = self.polynomial.slope(xi) / self.inner(xi, x.as_slice())?;
        }
        Ok(Matrix::from_diagonal(&diagonal))
    }
}

impl fmt::Display for LogPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_coefficients(f, "LogPolynomial", self.polynomial.coefficients())
    }
}
