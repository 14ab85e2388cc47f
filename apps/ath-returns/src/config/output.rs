//! Report output configuration.

use serde::{Deserialize, Serialize};

use super::observability::default_true;

/// Where the binary writes its results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JSON report path; stdout when unset.
    #[serde(default)]
    pub report_path: Option<String>,
    /// Optional CSV export of every row.
    #[serde(default)]
    pub rows_path: Option<String>,
    /// Pretty-print the JSON report.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: None,
            rows_path: None,
            pretty: true,
        }
    }
}
