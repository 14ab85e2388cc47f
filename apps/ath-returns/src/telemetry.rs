//! Tracing setup.
//!
//! Installs a `tracing-subscriber` fmt subscriber configured from
//! [`LoggingConfig`]. `RUST_LOG` takes precedence over the configured
//! level when set.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ath_returns::config::LoggingConfig;
//! use ath_returns::telemetry::init_tracing;
//!
//! init_tracing(&LoggingConfig::default())?;
//! ```

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::config::LoggingConfig;

/// Level used when the configured one does not parse.
const FALLBACK_LEVEL: &str = "info";

/// Subscriber installation failed.
#[derive(Debug, Error)]
#[error("Failed to initialize tracing: {0}")]
pub struct TelemetryError(String);

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns [`TelemetryError`] if a global subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(&config.level));
    let span_events = if config.include_spans {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(span_events)
        .with_writer(std::io::stderr);

    let result = match config.format.as_str() {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.pretty().try_init(),
    };

    result.map_err(|e| TelemetryError(e.to_string()))
}

fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("debug").to_string(), "debug");
        assert_eq!(level_filter("ath_returns=trace").to_string(), "ath_returns=trace");
    }

    #[test]
    fn test_invalid_level_falls_back() {
        assert_eq!(level_filter("ath_returns=loud").to_string(), FALLBACK_LEVEL);
    }
}
