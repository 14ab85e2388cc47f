//! Price input configuration.

use serde::{Deserialize, Serialize};

/// Input file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DataFormat {
    /// Delimited text with a header row.
    #[default]
    Csv,
    /// JSON array of `{date, close}` objects.
    Json,
}

/// Data source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the price file.
    pub path: String,
    /// File format.
    #[serde(default)]
    pub format: DataFormat,
    /// CSV column holding the trade date.
    #[serde(default = "default_date_column")]
    pub date_column: String,
    /// CSV column holding the close price.
    #[serde(default = "default_close_column")]
    pub close_column: String,
}

impl DataConfig {
    /// CSV input at `path` with default column names.
    #[must_use]
    pub fn csv(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            format: DataFormat::Csv,
            date_column: default_date_column(),
            close_column: default_close_column(),
        }
    }
}

fn default_date_column() -> String {
    "date".to_string()
}

fn default_close_column() -> String {
    "close".to_string()
}
