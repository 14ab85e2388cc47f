//! Configuration module for the forward-return analysis.
//!
//! Provides configuration loading, validation, and environment variable
//! interpolation for the analysis binary and library callers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ath_returns::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//!
//! println!("tolerance: {} days", config.analysis.tolerance_days);
//! ```

mod analysis;
mod data;
mod observability;
mod output;
mod parallel;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use analysis::AnalysisConfig;
pub use data::{DataConfig, DataFormat};
pub use observability::{LoggingConfig, ObservabilityConfig};
pub use output::OutputConfig;
pub use parallel::ParallelConfig;

/// Largest scale `rust_decimal` can represent.
const MAX_PERCENT_SCALE: u32 = 28;

/// Longest accepted match window, in days.
const MAX_TOLERANCE_DAYS: u32 = 366;

/// Longest accepted horizon, in years.
const MAX_HORIZON_YEARS: u32 = 1_000;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Price input.
    pub data: DataConfig,
    /// Analysis settings.
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Parallel execution settings.
    #[serde(default)]
    pub parallel: ParallelConfig,
    /// Report output.
    #[serde(default)]
    pub output: OutputConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map(|m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.data.path.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "data.path must not be empty".to_string(),
        ));
    }

    let horizons = &config.analysis.horizons;
    if horizons.is_empty() {
        return Err(ConfigError::ValidationError(
            "analysis.horizons must list at least one horizon".to_string(),
        ));
    }

    if horizons.iter().any(|h| h.as_years() == 0) {
        return Err(ConfigError::ValidationError(
            "analysis.horizons must be positive".to_string(),
        ));
    }

    if horizons.iter().any(|h| h.as_years() > MAX_HORIZON_YEARS) {
        return Err(ConfigError::ValidationError(format!(
            "analysis.horizons must be at most {MAX_HORIZON_YEARS} years"
        )));
    }

    let distinct: HashSet<_> = horizons.iter().collect();
    if distinct.len() != horizons.len() {
        return Err(ConfigError::ValidationError(
            "analysis.horizons must not repeat".to_string(),
        ));
    }

    if config.analysis.tolerance_days > MAX_TOLERANCE_DAYS {
        return Err(ConfigError::ValidationError(format!(
            "analysis.tolerance_days must be at most {MAX_TOLERANCE_DAYS}"
        )));
    }

    if config.analysis.percent_scale > MAX_PERCENT_SCALE {
        return Err(ConfigError::ValidationError(format!(
            "analysis.percent_scale must be at most {MAX_PERCENT_SCALE}"
        )));
    }

    let output_paths = [&config.output.report_path, &config.output.rows_path];
    if output_paths
        .iter()
        .any(|p| p.as_deref().is_some_and(|path| path.trim().is_empty()))
    {
        return Err(ConfigError::ValidationError(
            "output paths must not be empty when set".to_string(),
        ));
    }

    let valid_formats = ["json", "pretty", "compact"];
    if !valid_formats.contains(&config.observability.logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {valid_formats:?}"
        )));
    }

    Ok(())
}
