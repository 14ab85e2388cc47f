//! ATH Returns Binary
//!
//! Loads a close series, computes forward returns and writes the report.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin ath-returns -- config.yaml
//! ```
//!
//! # Environment Variables
//!
//! - `ATH_RETURNS_CONFIG`: Config path when no argument is given
//!   (default: config.yaml)
//! - `RUST_LOG`: Overrides the configured log level

use anyhow::Context;
use ath_returns::config::{Config, load_config};
use ath_returns::report::{render_summary, rows_to_csv};
use ath_returns::telemetry::init_tracing;
use ath_returns::{data, run_pipeline};
use tracing::info;

/// Config path used when neither an argument nor the env var is set.
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("ATH_RETURNS_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = load_config(Some(&config_path))
        .with_context(|| format!("loading configuration from {config_path}"))?;

    init_tracing(&config.observability.logging)?;
    info!(config = %config_path, "Starting ATH returns analysis");

    run(&config)
}

fn run(config: &Config) -> anyhow::Result<()> {
    let source = data::from_config(&config.data);
    let output = run_pipeline(source.as_ref(), &config.analysis, &config.parallel)
        .with_context(|| format!("analysing {}", config.data.path))?;

    let json = output
        .report
        .to_json(config.output.pretty)
        .context("serializing report")?;

    match &config.output.report_path {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing report to {path}"))?;
            info!(path = %path, "Report written");
        }
        None => println!("{json}"),
    }

    if let Some(path) = &config.output.rows_path {
        std::fs::write(path, rows_to_csv(&output.table))
            .with_context(|| format!("writing rows to {path}"))?;
        info!(path = %path, rows = output.table.len(), "Row table written");
    }

    info!("Summary\n{}", render_summary(&output.report));
    Ok(())
}
