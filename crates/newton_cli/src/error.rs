//! Error types for the newton CLI.

use newton_core::types::{ConfigurationError, SolverError};
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// The Newton iteration failed
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    /// Solver settings or function coefficients were rejected
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The configuration file could not be loaded or validated
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
