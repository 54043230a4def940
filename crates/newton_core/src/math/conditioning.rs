//! Matrix conditioning checks.

use crate::types::Matrix;

/// Largest condition number for which a Newton step is trusted.
pub const CONDITION_NUMBER_LIMIT: f64 = 1e10;

/// Iteration cap for the SVD sweep; a failed decomposition counts as singular.
const SVD_MAX_ITERATIONS: usize = 1000;

/// 2-norm condition number `σ_max / σ_min` of `matrix`.
///
/// Returns `f64::INFINITY` for an empty or exactly singular matrix, for
/// matrices with non-finite entries, and when the SVD does not converge.
///
/// # Example
///
/// ```
/// use newton_core::math::conditioning::condition_number;
/// use newton_core::types::Matrix;
///
/// let diag = Matrix::from_row_slice(2, 2, &[4.0, 0.0, 0.0, 0.5]);
/// assert!((condition_number(&diag) - 8.0).abs() < 1e-12);
///
/// let singular = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
/// assert!(condition_number(&singular) > 1e15);
/// ```
pub fn condition_number(matrix: &Matrix) -> f64 {
    if matrix.is_empty() || matrix.iter().any(|v| !v.is_finite()) {
        return f64::INFINITY;
    }

    let Some(svd) = matrix
        .clone()
        .try_svd(false, false, f64::EPSILON, SVD_MAX_ITERATIONS)
    else {
        return f64::INFINITY;
    };

    let sigma_max = svd.singular_values.max();
    let sigma_min = svd.singular_values.min();

    if sigma_min == 0.0 {
        f64::INFINITY
    } else {
        sigma_max / sigma_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_is_perfectly_conditioned() {
        assert_relative_eq!(condition_number(&Matrix::identity(3, 3)), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scalar_nonzero_is_one() {
        let m = Matrix::from_element(1, 1, -0.25);
        assert_relative_eq!(condition_number(&m), 1.0, epsilon = 1e-12);
        assert!(condition_number(&m) <= CONDITION_NUMBER_LIMIT);
    }

    #[test]
    fn test_scalar_zero_is_singular() {
        let m = Matrix::zeros(1, 1);
        assert_eq!(condition_number(&m), f64::INFINITY);
        assert!(condition_number(&m) > CONDITION_NUMBER_LIMIT);
    }

    #[test]
    fn test_known_2x2() {
        // [[1, 2], [3, 4]] has cond_2 ≈ 14.933
        let m = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_relative_eq!(condition_number(&m), 14.933034373659268, epsilon = 1e-9);
    }

    #[test]
    fn test_nearly_singular_exceeds_limit() {
        let m = Matrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0 + 1e-12]);
        assert!(condition_number(&m) > CONDITION_NUMBER_LIMIT);
    }

    #[test]
    fn test_non_finite_entries() {
        let m = Matrix::from_row_slice(2, 2, &[1.0, f64::NAN, 0.0, 1.0]);
        assert_eq!(condition_number(&m), f64::INFINITY);

        let m = Matrix::from_row_slice(1, 1, &[f64::INFINITY]);
        assert!(condition_number(&m) > CONDITION_NUMBER_LIMIT);
    }

    #[test]
    fn test_empty_matrix() {
        assert_eq!(condition_number(&Matrix::zeros(0, 0)), f64::INFINITY);
    }
}
