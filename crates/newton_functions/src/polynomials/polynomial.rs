//! Univariate polynomial applied elementwise.

use std::fmt;

use newton_core::traits::{Float, JacobianProvider, VectorFunction};
use newton_core::types::{ConfigurationError, DomainError, Matrix, Vector};

/// Polynomial `p(x) = c₀xᵐ + c₁xᵐ⁻¹ + ... + cₘ`.
///
/// As a [`VectorFunction`] it maps `x ↦ (p(x₀), ..., p(xₙ₋₁))`; for `n = 1`
/// this is the ordinary scalar polynomial. The analytical Jacobian is the
/// diagonal matrix of `p'(xᵢ)`.
///
/// # Example
///
/// ```
/// use newton_functions::Polynomial;
///
/// // p(x) = x² + 2x + 3
/// let p = Polynomial::new(vec![1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(p.value(5.0), 38.0);
/// assert_eq!(p.slope(5.0), 12.0);
/// assert_eq!(p.to_string(), "Polynomial(1, 2, 3)");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Create a polynomial from coefficients, highest degree first.
    ///
    /// # Errors
    ///
    /// `ConfigurationError::EmptyCoefficients` if `coefficients` is empty.
    pub fn new(coefficients: Vec<f64>) -> Result<Self, ConfigurationError> {
        if coefficients.is_empty() {
            return Err(ConfigurationError::EmptyCoefficients);
        }
        Ok(Self { coefficients })
    }

    /// Coefficients, highest degree first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Nominal degree (number of coefficients minus one).
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluate `p(x)` by Horner's scheme.
    pub fn value<T: Float>(&self, x: T) -> T {
        horner(&self.coefficients, x)
    }

    /// Evaluate `p'(x)`.
    pub fn slope<T: Float>(&self, x: T) -> T {
        let m = self.degree();
        if m == 0 {
            return T::zero();
        }
        let mut acc = constant::<T>(self.coefficients[0] * m as f64);
        for (i, &c) in self.coefficients[1..m].iter().enumerate() {
            acc = x * acc + constant(c * (m - 1 - i) as f64);
        }
        acc
    }

    /// The derivative polynomial `p'`.
    ///
    /// The derivative of a constant is the zero polynomial `[0]`.
    pub fn derivative(&self) -> Polynomial {
        let m = self.degree();
        if m == 0 {
            return Polynomial {
                coefficients: vec![0.0],
            };
        }
        let coefficients = self.coefficients[..m]
            .iter()
            .enumerate()
            .map(|(i, &c)| c * (m - i) as f64)
            .collect();
        Polynomial { coefficients }
    }
}

impl TryFrom<Vec<f64>> for Polynomial {
    type Error = ConfigurationError;

    fn try_from(coefficients: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(coefficients)
    }
}

impl From<Polynomial> for Vec<f64> {
    fn from(polynomial: Polynomial) -> Self {
        polynomial.coefficients
    }
}

impl VectorFunction for Polynomial {
    fn evaluate(&self, x: &Vector) -> Result<Vector, DomainError> {
        Ok(x.map(|v| self.value(v)))
    }
}

impl JacobianProvider for Polynomial {
    fn jacobian(&self, x: &Vector) -> Result<Matrix, DomainError> {
        Ok(Matrix::from_diagonal(&x.map(|v| self.slope(v))))
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_coefficients(f, "Polynomial", &self.coefficients)
    }
}

#[inline]
fn constant<T: Float>(c: f64) -> T {
    T::from(c).unwrap_or_else(T::nan)
}

/// Horner evaluation seeded with the leading coefficient.
fn horner<T: Float>(coefficients: &[f64], x: T) -> T {
    let (&first, rest) = match coefficients.split_first() {
        Some(split) => split,
        None => return T::zero(),
    };
    rest.iter()
        .fold(constant(first), |acc, &c| x * acc + constant(c))
}
