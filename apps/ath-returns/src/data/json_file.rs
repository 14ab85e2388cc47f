//! JSON price file adapter.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use super::error::DataSourceError;
use super::source::{Observation, PriceDataSource};

#[derive(Debug, Deserialize)]
struct JsonRow {
    date: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    close: Decimal,
}

/// Reads closes from a JSON array of `{"date": "YYYY-MM-DD", "close": "<decimal>"}`.
#[derive(Debug, Clone)]
pub struct JsonFileDataSource {
    path: PathBuf,
}

impl JsonFileDataSource {
    /// Source reading `path`.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse observations from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError::Json`] for malformed input.
    pub fn parse(contents: &str) -> Result<Vec<Observation>, DataSourceError> {
        let rows: Vec<JsonRow> = serde_json::from_str(contents)?;
        Ok(rows.into_iter().map(|r| (r.date, r.close)).collect())
    }
}

impl PriceDataSource for JsonFileDataSource {
    fn load(&self) -> Result<Vec<Observation>, DataSourceError> {
        let contents = std::fs::read_to_string(&self.path)?;
        let observations = Self::parse(&contents)?;

        debug!(
            source = self.name(),
            path = %self.path.display(),
            rows = observations.len(),
            "Loaded price observations"
        );

        Ok(observations)
    }

    fn name(&self) -> &'static str {
        "JsonFile"
    }
}
