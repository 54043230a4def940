//! Newton CLI - Root finding from the command line
//!
//! # Commands
//!
//! - `newton solve` - Find a root of a polynomial function
//! - `newton jacobian` - Compare analytical and estimated Jacobians
//! - `newton check` - Check the effective configuration

use anyhow::{Context, Result};
use clap::Parser;
use newton_cli::cli::{Cli, Commands};
use newton_cli::commands;
use newton_cli::config::CliConfig;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?
        .with_env_override();

    // Initialise tracing; RUST_LOG wins over the configured level
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!("Configuration: {:?}", config);

    match cli.command {
        Commands::Solve(args) => {
            // Command-line flags override file and environment settings
            let config = CliConfig {
                solver: args.solver.apply(config.solver),
                ..config
            };
            config.validate()?;
            let result = commands::solve::run(&args, &config.solver)?;
            println!("{}", commands::solve::format_result(&result));
        }
        Commands::Jacobian(args) => {
            config.validate()?;
            let report = commands::jacobian::run(&args, config.solver.step)?;
            println!("{}", commands::jacobian::format_report(&report));
        }
        Commands::Check => {
            println!("{}", commands::check::run(&config)?);
        }
    }

    Ok(())
}
