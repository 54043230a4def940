//! Jacobian command implementation
//!
//! Evaluates the analytical Jacobian and the forward-difference estimate at
//! a point so the two can be compared.

use newton_core::math::jacobian::JacobianEstimator;
use newton_core::traits::JacobianProvider;
use newton_core::types::{Matrix, SolverError, Vector};
use tracing::info;

use crate::cli::JacobianArgs;
use crate::function::TargetFunction;
use crate::Result;

/// Both Jacobians at one point
#[derive(Debug, Clone, PartialEq)]
pub struct JacobianReport {
    /// Closed-form Jacobian
    pub analytical: Matrix,
    /// Forward-difference estimate
    pub estimated: Matrix,
    /// Step used for the estimate
    pub step: f64,
}

impl JacobianReport {
    /// Largest absolute entrywise difference between the two Jacobians
    pub fn max_abs_difference(&self) -> f64 {
        (&self.analytical - &self.estimated).abs().max()
    }
}

/// Run the jacobian command; `default_step` applies when `--step` is absent
pub fn run(args: &JacobianArgs, default_step: f64) -> Result<JacobianReport> {
    let function = TargetFunction::build(args.function.kind(), &args.function.coeffs)?;
    let x = Vector::from_column_slice(&args.x);
    let step = args.step.unwrap_or(default_step);

    info!("Jacobian of {} at {:?} (dx = {:e})", function, args.x, step);

    let estimated = JacobianEstimator::new(step).approximate(&function, &x)?;
    let analytical = function.jacobian(&x).map_err(SolverError::from)?;

    let report = JacobianReport {
        analytical,
        estimated,
        step,
    };
    info!("Max abs difference: {:e}", report.max_abs_difference());

    Ok(report)
}

/// Render a report for the terminal
pub fn format_report(report: &JacobianReport) -> String {
    format!(
        "analytical:{}estimated (dx = {:e}):{}max |difference| = {:e}",
        report.analytical,
        report.step,
        report.estimated,
        report.max_abs_difference()
    )
}
