//! CLI configuration management.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `NEWTON_*` environment variables, then command-line flags.
//!
//! ```toml
//! log_level = "debug"
//!
//! [solver]
//! tolerance = 1e-12
//! max_iterations = 100
//! ```

use std::path::Path;

use newton_core::math::solvers::SolverConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Environment variable overriding `log_level`.
pub const ENV_LOG_LEVEL: &str = "NEWTON_LOG_LEVEL";
/// Environment variable overriding `solver.tolerance`.
pub const ENV_TOLERANCE: &str = "NEWTON_TOLERANCE";
/// Environment variable overriding `solver.max_iterations`.
pub const ENV_MAX_ITERATIONS: &str = "NEWTON_MAX_ITERATIONS";
/// Environment variable overriding `solver.step`.
pub const ENV_STEP: &str = "NEWTON_STEP";
/// Environment variable overriding `solver.radius`.
pub const ENV_RADIUS: &str = "NEWTON_RADIUS";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("Failed to read {path}: {message}")]
    Io {
        /// File that could not be read
        path: String,
        /// Underlying error message
        message: String,
    },

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Configuration could not be rendered back to TOML
    #[error("Failed to render configuration: {0}")]
    Render(String),
}

/// Effective CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Newton solver settings
    #[serde(default)]
    pub solver: SolverConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            solver: SolverConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Render(e.to_string()))
    }

    /// Apply `NEWTON_*` environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`.
    ///
    /// Values that fail to parse are skipped with a warning.
    pub fn with_overrides_from<L>(mut self, lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }

        if let Some(value) = parse_var(&lookup, ENV_TOLERANCE) {
            self.solver.tolerance = value;
        }
        if let Some(value) = parse_var(&lookup, ENV_MAX_ITERATIONS) {
            self.solver.max_iterations = value;
        }
        if let Some(value) = parse_var(&lookup, ENV_STEP) {
            self.solver.step = value;
        }
        if let Some(value) = parse_var(&lookup, ENV_RADIUS) {
            self.solver.radius = value;
        }

        self
    }

    /// Validate the configuration, collecting every problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if let Err(e) = self.solver.validate() {
            errors.push(format!("solver: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

fn parse_var<L, T>(lookup: &L, key: &str) -> Option<T>
where
    L: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid number", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.solver, SolverConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = CliConfig::from_toml("[solver]\ntolerance = 1e-12\n").unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.solver.tolerance, 1e-12);
        assert_eq!(config.solver.max_iterations, 20);
        assert_eq!(config.solver.radius, 10.0);
    }

    #[test]
    fn test_from_toml_empty() {
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_from_toml_parse_error() {
        let result = CliConfig::from_toml("[solver]\nmax_iterations = \"many\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CliConfig {
            log_level: "warn".to_string(),
            solver: SolverConfig::new(1e-12, 100).with_radius(0.5),
        };
        let text = config.to_toml().unwrap();
        assert!(text.contains("[solver]"));
        assert_eq!(CliConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_overrides() {
        let lookup = lookup_from(&[
            (ENV_LOG_LEVEL, "debug"),
            (ENV_TOLERANCE, "1e-9"),
            (ENV_MAX_ITERATIONS, "50"),
            (ENV_STEP, "1e-8"),
            (ENV_RADIUS, "inf"),
        ]);
        let config = CliConfig::default().with_overrides_from(lookup);

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.solver.tolerance, 1e-9);
        assert_eq!(config.solver.max_iterations, 50);
        assert_eq!(config.solver.step, 1e-8);
        assert_eq!(config.solver.radius, f64::INFINITY);
    }

    #[test]
    fn test_unparsable_override_ignored() {
        let lookup = lookup_from(&[(ENV_MAX_ITERATIONS, "lots")]);
        let config = CliConfig::default().with_overrides_from(lookup);
        assert_eq!(config.solver.max_iterations, 20);
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO", "DEBUG"] {
            let config = CliConfig {
                log_level: level.to_string(),
                ..CliConfig::default()
            };
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }

    #[test]
    fn test_validate_multiple_errors() {
        let config = CliConfig {
            log_level: "loud".to_string(),
            solver: SolverConfig::default().with_max_iterations(0),
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("log_level"));
                assert!(errors[1].contains("max_iterations"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = format!("{}", error);
        assert!(display.contains("Error 1"));
        assert!(display.contains("Error 2"));
    }
}
