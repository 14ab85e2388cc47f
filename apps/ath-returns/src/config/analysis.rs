//! Forward-return analysis settings.

use serde::{Deserialize, Serialize};

use crate::aggregate::MedianConvention;
use crate::returns::{
    DEFAULT_PERCENT_SCALE, DEFAULT_TOLERANCE_DAYS, FirstRecordPolicy, Horizon,
};

/// Analysis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Forward horizons in years.
    #[serde(default = "default_horizons")]
    pub horizons: Vec<Horizon>,
    /// Trailing match window in calendar days.
    #[serde(default = "default_tolerance_days")]
    pub tolerance_days: u32,
    /// Decimal places kept on percent gains.
    #[serde(default = "default_percent_scale")]
    pub percent_scale: u32,
    /// New-high flag for the first record.
    #[serde(default)]
    pub first_record: FirstRecordPolicy,
    /// Median definition for segment summaries.
    #[serde(default)]
    pub median: MedianConvention,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            horizons: default_horizons(),
            tolerance_days: default_tolerance_days(),
            percent_scale: default_percent_scale(),
            first_record: FirstRecordPolicy::default(),
            median: MedianConvention::default(),
        }
    }
}

fn default_horizons() -> Vec<Horizon> {
    Horizon::STANDARD.to_vec()
}

const fn default_tolerance_days() -> u32 {
    DEFAULT_TOLERANCE_DAYS
}

const fn default_percent_scale() -> u32 {
    DEFAULT_PERCENT_SCALE
}
