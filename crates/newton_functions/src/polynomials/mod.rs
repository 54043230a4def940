//! Polynomial function families.
//!
//! Coefficients are listed highest degree first, so `[1, 2, 3]` is
//! `x² + 2x + 3`.

mod log_polynomial;
mod polynomial;
mod polynomial_2d;

pub use log_polynomial::LogPolynomial;
pub use polynomial::Polynomial;
pub use polynomial_2d::Polynomial2D;

use std::fmt;

/// Write `Name(c0, c1, ...)`.
pub(crate) fn fmt_coefficients(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    coefficients: &[f64],
) -> fmt::Result {
    write!(f, "{}(", name)?;
    for (i, c) in coefficients.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", c)?;
    }
    f.write_str(")")
}
