//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use newton_core::math::solvers::SolverConfig;

use crate::function::FunctionKind;

/// Newton-Raphson root finder
#[derive(Debug, Parser)]
#[command(name = "newton")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "newton.toml")]
    pub config: PathBuf,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find a root of a polynomial function
    Solve(SolveArgs),

    /// Compare analytical and finite-difference Jacobians at a point
    Jacobian(JacobianArgs),

    /// Print the effective configuration
    Check,
}

/// Function selection shared by all commands
#[derive(Debug, Clone, Args)]
pub struct FunctionArgs {
    /// Coefficients, highest degree first (e.g. 1,2,-3 for x² + 2x - 3)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub coeffs: Vec<f64>,

    /// Solve ln(p(x)) instead of p(x)
    #[arg(long, conflicts_with = "system")]
    pub log: bool,

    /// Treat the coefficients as two rows [a, b, c] of a·x0 + b·x1 + c
    #[arg(long)]
    pub system: bool,
}

impl FunctionArgs {
    /// Function family selected by the flags.
    pub fn kind(&self) -> FunctionKind {
        FunctionKind::from_flags(self.log, self.system)
    }
}

/// Solver settings that override the configuration file
#[derive(Debug, Clone, Default, Args)]
pub struct SolverOverrides {
    /// Convergence tolerance on ‖f(x)‖₂
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Maximum number of Newton steps
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Finite-difference step
    #[arg(long, allow_hyphen_values = true)]
    pub step: Option<f64>,

    /// Divergence radius
    #[arg(long)]
    pub radius: Option<f64>,
}

impl SolverOverrides {
    /// Apply the flags that were given on top of `config`.
    pub fn apply(&self, mut config: SolverConfig) -> SolverConfig {
        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(step) = self.step {
            config.step = step;
        }
        if let Some(radius) = self.radius {
            config.radius = radius;
        }
        config
    }
}

/// Arguments of `newton solve`
#[derive(Debug, Clone, Args)]
pub struct SolveArgs {
    /// Function to solve
    #[command(flatten)]
    pub function: FunctionArgs,

    /// Initial guess, one value per dimension
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub x0: Vec<f64>,

    /// Use the analytical Jacobian instead of finite differences
    #[arg(long)]
    pub analytical: bool,

    /// Solver settings
    #[command(flatten)]
    pub solver: SolverOverrides,
}

/// Arguments of `newton jacobian`
#[derive(Debug, Clone, Args)]
pub struct JacobianArgs {
    /// Function to differentiate
    #[command(flatten)]
    pub function: FunctionArgs,

    /// Evaluation point, one value per dimension
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub x: Vec<f64>,

    /// Finite-difference step (defaults to the configured step)
    #[arg(long, allow_hyphen_values = true)]
    pub step: Option<f64>,
}
