//! Solve command implementation
//!
//! Runs the Newton solver on a polynomial family selected by flags.

use newton_core::math::solvers::{NewtonResult, NewtonSolver, SolverConfig};
use newton_core::types::Vector;
use tracing::{debug, info, warn};

use crate::cli::SolveArgs;
use crate::function::TargetFunction;
use crate::Result;

/// Run the solve command with the effective solver configuration
pub fn run(args: &SolveArgs, config: &SolverConfig) -> Result<NewtonResult> {
    let function = TargetFunction::build(args.function.kind(), &args.function.coeffs)?;
    let x0 = Vector::from_column_slice(&args.x0);

    info!("Solving {} = 0", function);
    info!("  Initial guess: {:?}", args.x0);
    info!(
        "  Jacobian: {}",
        if args.analytical { "analytical" } else { "finite difference" }
    );
    debug!("  Solver config: {:?}", config);

    let outcome = if args.analytical {
        NewtonSolver::with_jacobian(function.clone(), function, *config)?.solve_detailed(&x0)
    } else {
        NewtonSolver::new(function, *config)?.solve_detailed(&x0)
    };

    match &outcome {
        Ok(result) => info!(
            "Converged after {} iterations (|f(x)| = {:e})",
            result.iterations, result.residual_norm
        ),
        Err(e) => warn!("Solve failed: {}", e),
    }

    Ok(outcome?)
}

/// Render a solve result for the terminal
pub fn format_result(result: &NewtonResult) -> String {
    let root: Vec<String> = result.root.iter().map(|v| format!("{}", v)).collect();
    format!(
        "root = [{}]\n|f(root)| = {:e}\niterations = {}",
        root.join(", "),
        result.residual_norm,
        result.iterations
    )
}
