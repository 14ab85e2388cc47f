//! Descriptive aggregation over a [`crate::returns::ReturnTable`].
//!
//! Implements the segment comparisons the analysis is built for:
//! - Segment means (all days vs. new-high days)
//! - Segment medians (exact or lower-middle convention)
//! - Percent-rank percentiles
//! - Per-calendar-year rollups
//!
//! Every aggregate over an empty sample is `None`.

mod aggregator;
mod math;
mod types;

pub use aggregator::Aggregator;
pub use math::{mean, median, percentile};
pub use types::{MedianConvention, Segment, SegmentSummary, YearHorizonStats, YearlyRollup};
