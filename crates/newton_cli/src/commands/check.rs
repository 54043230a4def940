//! Check command implementation

use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Validate the effective configuration and render it as TOML
pub fn run(config: &CliConfig) -> Result<String> {
    config.validate()?;
    info!("Configuration OK");
    Ok(config.to_toml()?)
}
