//! Report assembly and serialization.
//!
//! [`AnalysisReport`] is the serializable end product of a run: series
//! facts, the per-horizon bounds, every segment summary and the yearly
//! rollup. The row table itself is exported separately as CSV.

mod csv_export;
mod format;
mod text;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use csv_export::rows_to_csv;
pub use format::{format_decimal, format_optional_pct, format_pct};
pub use text::render_summary;

use crate::aggregate::{Aggregator, MedianConvention, SegmentSummary, YearlyRollup};
use crate::returns::{Horizon, ReturnTable, SeriesBounds};

/// Facts about the analysed series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Number of trading days.
    pub count: u64,
    /// First trade date.
    pub first_date: Option<NaiveDate>,
    /// Last trade date.
    pub last_date: Option<NaiveDate>,
    /// Days that closed at a new all-time high.
    pub new_high_count: u64,
}

/// Full analysis result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Series facts.
    pub series: SeriesSummary,
    /// Horizons evaluated.
    pub horizons: Vec<Horizon>,
    /// Latest trusted source date per horizon.
    pub bounds: SeriesBounds,
    /// Median convention used in `segments`.
    pub median_convention: MedianConvention,
    /// One summary per segment and horizon, segment-major.
    pub segments: Vec<SegmentSummary>,
    /// Per-calendar-year rollup.
    pub yearly: Vec<YearlyRollup>,
}

impl AnalysisReport {
    /// Aggregate `table` into a report.
    #[must_use]
    pub fn build(table: &ReturnTable, median_convention: MedianConvention) -> Self {
        let rows = table.rows();
        let aggregator = Aggregator::new(table, median_convention);

        let series = SeriesSummary {
            count: rows.len() as u64,
            first_date: rows.first().map(|r| r.record.trade_date),
            last_date: rows.last().map(|r| r.record.trade_date),
            new_high_count: rows.iter().filter(|r| r.record.is_new_high).count() as u64,
        };

        Self {
            series,
            horizons: table.horizons().to_vec(),
            bounds: table.bounds().clone(),
            median_convention,
            segments: aggregator.segment_summaries(),
            yearly: aggregator.yearly_rollup(),
        }
    }

    /// Serialize to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
