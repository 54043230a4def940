//! Two affine equations in two unknowns.

use std::fmt;

use newton_core::traits::{JacobianProvider, VectorFunction};
use newton_core::types::{ConfigurationError, DomainError, Matrix, Vector};

const EQUATIONS: usize = 2;
const COEFFICIENTS: usize = 3;

/// The system
///
/// ```text
/// f₀(x) = a₀·x₀ + b₀·x₁ + c₀
/// f₁(x) = a₁·x₀ + b₁·x₁ + c₁
/// ```
///
/// built from rows `[aᵢ, bᵢ, cᵢ]`. Its Jacobian is the constant block
/// `[[a₀, b₀], [a₁, b₁]]`.
///
/// # Example
///
/// ```
/// use newton_core::traits::VectorFunction;
/// use newton_core::types::Vector;
/// use newton_functions::Polynomial2D;
///
/// let p = Polynomial2D::new(&[vec![2.0, 3.0, 1.0], vec![-2.0, 1.0, 0.0]]).unwrap();
/// let y = p.evaluate(&Vector::from_vec(vec![1.0, 0.0])).unwrap();
/// assert_eq!(y, Vector::from_vec(vec![3.0, -2.0]));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial2D {
    rows: [[f64; COEFFICIENTS]; EQUATIONS],
}

impl Polynomial2D {
    /// Create the system from a coefficient table.
    ///
    /// # Errors
    ///
    /// - `EquationCount` unless there are exactly two rows
    /// - `CoefficientCount` unless every row has exactly three entries
    pub fn new(rows: &[Vec<f64>]) -> Result<Self, ConfigurationError> {
        if rows.len() != EQUATIONS {
            return Err(ConfigurationError::EquationCount {
                expected: EQUATIONS,
                actual: rows.len(),
            });
        }

        let mut table = [[0.0; COEFFICIENTS]; EQUATIONS];
        for (row, (target, source)) in table.iter_mut().zip(rows).enumerate() {
            if source.len() != COEFFICIENTS {
                return Err(ConfigurationError::CoefficientCount {
                    row,
                    expected: COEFFICIENTS,
                    actual: source.len(),
                });
            }
            target.copy_from_slice(source);
        }

        Ok(Self { rows: table })
    }

    /// Create the system from a fixed-size table.
    pub fn from_rows(rows: [[f64; COEFFICIENTS]; EQUATIONS]) -> Self {
        Self { rows }
    }

    /// Coefficient rows `[aᵢ, bᵢ, cᵢ]`.
    pub fn rows(&self) -> &[[f64; COEFFICIENTS]; EQUATIONS] {
        &self.rows
    }

    /// The constant Jacobian `[[a₀, b₀], [a₁, b₁]]`.
    pub fn linear_part(&self) -> Matrix {
        Matrix::from_fn(EQUATIONS, EQUATIONS, |i, j| self.rows[i][j])
    }

    fn check_point(x: &Vector) -> Result<(), DomainError> {
        if x.len() != EQUATIONS {
            return Err(DomainError::new(
                x.as_slice(),
                format!("expected a point in R^2, got dimension {}", x.len()),
            ));
        }
        Ok(())
    }
}

impl VectorFunction for Polynomial2D {
    fn evaluate(&self, x: &Vector) -> Result<Vector, DomainError> {
        Self::check_point(x)?;
        Ok(Vector::from_iterator(
            EQUATIONS,
            self.rows.iter().map(|[a, b, c]| a * x[0] + b * x[1] + c),
        ))
    }
}

impl JacobianProvider for Polynomial2D {
    fn jacobian(&self, x: &Vector) -> Result<Matrix, DomainError> {
        Self::check_point(x)?;
        Ok(self.linear_part())
    }
}

impl fmt::Display for Polynomial2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = &self.rows;
        f.write_str("Polynomial2D[")?;
        super::fmt_coefficients(f, "", first)?;
        f.write_str(", ")?;
        super::fmt_coefficients(f, "", second)?;
        f.write_str("]")
    }
}
