//! Segment and yearly aggregation over a return table.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use super::math::{mean, median, percentile};
use super::types::{MedianConvention, Segment, SegmentSummary, YearHorizonStats, YearlyRollup};
use crate::returns::{Horizon, ReturnRow, ReturnTable};

/// Read-only aggregator over a [`ReturnTable`].
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    table: &'a ReturnTable,
    median_convention: MedianConvention,
}

impl<'a> Aggregator<'a> {
    /// Create an aggregator using `median_convention` for medians.
    #[must_use]
    pub const fn new(table: &'a ReturnTable, median_convention: MedianConvention) -> Self {
        Self {
            table,
            median_convention,
        }
    }

    /// Non-null percent gains of `segment` for `horizon`, in date order.
    #[must_use]
    pub fn gains(&self, segment: Segment, horizon: Horizon) -> Vec<Decimal> {
        segment_gains(self.table.rows().iter(), segment, horizon)
    }

    /// Mean percent gain of `segment` for `horizon`.
    #[must_use]
    pub fn segment_average(&self, segment: Segment, horizon: Horizon) -> Option<Decimal> {
        mean(&self.gains(segment, horizon))
    }

    /// Median percent gain of `segment` for `horizon`.
    #[must_use]
    pub fn median(&self, segment: Segment, horizon: Horizon) -> Option<Decimal> {
        median(&self.gains(segment, horizon), self.median_convention)
    }

    /// Percent-rank cutoff percentile (`p` in `[0, 1]`).
    #[must_use]
    pub fn percentile(&self, segment: Segment, horizon: Horizon, p: Decimal) -> Option<Decimal> {
        percentile(&self.gains(segment, horizon), p)
    }

    /// Descriptive statistics of `segment` for `horizon`.
    #[must_use]
    pub fn segment_summary(&self, segment: Segment, horizon: Horizon) -> SegmentSummary {
        let gains = self.gains(segment, horizon);
        let trade_count = self
            .table
            .rows()
            .iter()
            .filter(|r| segment.includes(&r.record))
            .count() as u64;

        let positive_share = if gains.is_empty() {
            None
        } else {
            let positive = gains.iter().filter(|g| **g > Decimal::ZERO).count();
            Some(Decimal::from(positive as u64) / Decimal::from(gains.len() as u64))
        };

        SegmentSummary {
            segment,
            horizon,
            trade_count,
            sample_count: gains.len() as u64,
            mean: mean(&gains),
            median: median(&gains, self.median_convention),
            min: gains.iter().min().copied(),
            max: gains.iter().max().copied(),
            positive_share,
        }
    }

    /// Summaries for every segment and horizon, segment-major.
    #[must_use]
    pub fn segment_summaries(&self) -> Vec<SegmentSummary> {
        Segment::ALL_SEGMENTS
            .iter()
            .flat_map(|&segment| {
                self.table
                    .horizons()
                    .iter()
                    .map(move |&horizon| self.segment_summary(segment, horizon))
            })
            .collect()
    }

    /// Per-calendar-year counts and mean gains, ascending by year.
    #[must_use]
    pub fn yearly_rollup(&self) -> Vec<YearlyRollup> {
        let mut by_year: BTreeMap<i32, Vec<&ReturnRow>> = BTreeMap::new();
        for row in self.table.rows() {
            by_year
                .entry(row.record.trade_date.year())
                .or_default()
                .push(row);
        }

        by_year
            .into_iter()
            .map(|(year, rows)| {
                let horizons = self
                    .table
                    .horizons()
                    .iter()
                    .map(|&horizon| YearHorizonStats {
                        horizon,
                        all_mean: mean(&segment_gains(
                            rows.iter().copied(),
                            Segment::All,
                            horizon,
                        )),
                        new_high_mean: mean(&segment_gains(
                            rows.iter().copied(),
                            Segment::NewHigh,
                            horizon,
                        )),
                    })
                    .collect();

                YearlyRollup {
                    year,
                    trade_count: rows.len() as u64,
                    new_high_count: rows.iter().filter(|r| r.record.is_new_high).count() as u64,
                    horizons,
                }
            })
            .collect()
    }
}

fn segment_gains<'r>(
    rows: impl Iterator<Item = &'r ReturnRow>,
    segment: Segment,
    horizon: Horizon,
) -> Vec<Decimal> {
    rows.filter(|r| segment.includes(&r.record))
        .filter_map(|r| r.gain_percent(horizon))
        .collect()
}
