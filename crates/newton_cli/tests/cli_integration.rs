//! Integration tests for configuration loading and command dispatch.

use std::io::Write;

use approx::assert_relative_eq;
use clap::Parser;
use newton_cli::cli::{Cli, Commands};
use newton_cli::commands;
use newton_cli::config::{CliConfig, ConfigError};
use newton_cli::CliError;
use newton_core::types::SolverError;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ========================================
// Configuration Loading
// ========================================

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
log_level = "debug"

[solver]
tolerance = 1e-12
max_iterations = 100
step = 1e-8
radius = 50.0
"#,
    );

    let config = CliConfig::load(file.path()).unwrap();
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.solver.tolerance, 1e-12);
    assert_eq!(config.solver.max_iterations, 100);
    assert_eq!(config.solver.step, 1e-8);
    assert_eq!(config.solver.radius, 50.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let config = CliConfig::load_or_default(&path).unwrap();
    assert_eq!(config, CliConfig::default());

    assert!(matches!(CliConfig::load(&path), Err(ConfigError::Io { .. })));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("[solver\ntolerance = ");
    let result = CliConfig::load_or_default(file.path());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_invalid_values_fail_validation() {
    let file = write_config("[solver]\nradius = -1.0\n");
    let config = CliConfig::load(file.path()).unwrap();

    match config.validate() {
        Err(ConfigError::Validation(errors)) => {
            assert!(errors.iter().any(|e| e.contains("radius")));
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn test_layered_file_env_and_flags() {
    let file = write_config("[solver]\nradius = -1.0\nmax_iterations = 5\n");
    let config = CliConfig::load_or_default(file.path())
        .unwrap()
        .with_overrides_from(|key| (key == "NEWTON_MAX_ITERATIONS").then(|| "40".to_string()));
    assert_eq!(config.solver.max_iterations, 40);
    assert!(config.validate().is_err());

    // Flags are applied last and can repair an invalid file value
    let cli = Cli::try_parse_from([
        "newton", "solve", "--coeffs", "1,0,-4", "--x0", "3", "--radius", "100",
    ])
    .unwrap();
    let Commands::Solve(args) = cli.command else {
        panic!("Expected solve command");
    };
    let config = CliConfig {
        solver: args.solver.apply(config.solver),
        ..config
    };
    assert!(config.validate().is_ok());
    assert_eq!(config.solver.radius, 100.0);
    assert_eq!(config.solver.max_iterations, 40);

    let result = commands::solve::run(&args, &config.solver).unwrap();
    assert_relative_eq!(result.root[0], 2.0, epsilon = 1e-6);
}

// ========================================
// Command Dispatch
// ========================================

#[test]
fn test_solve_from_command_line() {
    let cli = Cli::try_parse_from([
        "newton",
        "solve",
        "--coeffs",
        "1,-2,-6",
        "--log",
        "--x0",
        "-2",
        "--analytical",
        "--tolerance",
        "1e-12",
        "--max-iterations",
        "100",
    ])
    .unwrap();

    let Commands::Solve(args) = cli.command else {
        panic!("Expected solve command");
    };
    let solver_config = args.solver.apply(CliConfig::default().solver);
    let result = commands::solve::run(&args, &solver_config).unwrap();

    assert_relative_eq!(result.root[0], 1.0 - 8.0_f64.sqrt(), epsilon = 1e-10);
}

#[test]
fn test_solve_without_real_root() {
    let cli = Cli::try_parse_from([
        "newton",
        "solve",
        "--coeffs",
        "1,2,3",
        "--x0",
        "0.5",
        "--analytical",
        "--radius",
        "inf",
        "--max-iterations",
        "100",
        "--tolerance",
        "1e-15",
    ])
    .unwrap();

    let Commands::Solve(args) = cli.command else {
        panic!("Expected solve command");
    };
    let solver_config = args.solver.apply(CliConfig::default().solver);
    let err = commands::solve::run(&args, &solver_config).unwrap_err();

    assert!(matches!(
        err,
        CliError::Solver(SolverError::SingularJacobian { .. } | SolverError::NonConvergence { .. })
    ));
}

#[test]
fn test_jacobian_from_command_line() {
    let cli = Cli::try_parse_from([
        "newton", "jacobian", "--coeffs", "2,3,1,-2,1,0", "--system", "--x", "1,0",
    ])
    .unwrap();

    let Commands::Jacobian(args) = cli.command else {
        panic!("Expected jacobian command");
    };
    let report = commands::jacobian::run(&args, 1e-6).unwrap();

    assert_eq!(report.analytical.shape(), (2, 2));
    assert!(report.max_abs_difference() < 1e-6);
}

#[test]
fn test_check_renders_loaded_config() {
    let file = write_config("log_level = \"warn\"\n[solver]\nmax_iterations = 7\n");
    let config = CliConfig::load(file.path()).unwrap();

    let text = commands::check::run(&config).unwrap();
    assert!(text.contains("log_level = \"warn\""));
    assert!(text.contains("max_iterations = 7"));
}
