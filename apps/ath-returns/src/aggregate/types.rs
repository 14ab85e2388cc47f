//! Aggregate result types.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::returns::{AnnotatedRecord, Horizon};

/// Which source days an aggregate covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// Every trading day.
    All,
    /// Days that closed at a new all-time high.
    NewHigh,
}

impl Segment {
    /// Both segments, in report order.
    pub const ALL_SEGMENTS: [Self; 2] = [Self::All, Self::NewHigh];

    /// Whether `record` belongs to this segment.
    #[must_use]
    pub const fn includes(self, record: &AnnotatedRecord) -> bool {
        match self {
            Self::All => true,
            Self::NewHigh => record.is_new_high,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::NewHigh => write!(f, "new_high"),
        }
    }
}

/// Median definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MedianConvention {
    /// Middle value, or the mean of the two middle values for even N.
    #[default]
    Exact,
    /// Largest value with percent rank <= 0.5 (lower middle for even N).
    LowerMiddle,
}

/// Descriptive statistics of one segment and horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentSummary {
    /// Segment.
    pub segment: Segment,
    /// Horizon.
    pub horizon: Horizon,
    /// Source days in the segment.
    pub trade_count: u64,
    /// Days with a computed gain.
    pub sample_count: u64,
    /// Mean percent gain.
    pub mean: Option<Decimal>,
    /// Median percent gain.
    pub median: Option<Decimal>,
    /// Smallest percent gain.
    pub min: Option<Decimal>,
    /// Largest percent gain.
    pub max: Option<Decimal>,
    /// Share of samples with a positive gain (0.6 = 60%).
    pub positive_share: Option<Decimal>,
}

/// Mean gains of both segments for one year and horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearHorizonStats {
    /// Horizon.
    pub horizon: Horizon,
    /// Mean percent gain over every day of the year.
    pub all_mean: Option<Decimal>,
    /// Mean percent gain over the year's new-high days.
    pub new_high_mean: Option<Decimal>,
}

/// Per-calendar-year rollup keyed by source trade date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyRollup {
    /// Calendar year.
    pub year: i32,
    /// Trading days in the year.
    pub trade_count: u64,
    /// New-high days in the year.
    pub new_high_count: u64,
    /// Per-horizon means, in horizon order.
    pub horizons: Vec<YearHorizonStats>,
}
