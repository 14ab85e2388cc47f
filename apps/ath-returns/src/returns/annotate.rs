//! Running all-time-high annotation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::AnnotatedRecord;
use crate::series::PriceSeries;

/// How the first record of a series is flagged.
///
/// The first close has no earlier high to beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FirstRecordPolicy {
    /// First record is never a new high.
    #[default]
    NotNewHigh,
    /// First record counts as a new high (absent prior high compares unequal).
    NewHigh,
}

/// Single forward pass computing running highs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningHighAnnotator {
    first_record: FirstRecordPolicy,
}

impl RunningHighAnnotator {
    /// Create an annotator.
    #[must_use]
    pub const fn new(first_record: FirstRecordPolicy) -> Self {
        Self { first_record }
    }

    /// Annotate every record, preserving length and order.
    #[must_use]
    pub fn annotate(&self, series: &PriceSeries) -> Vec<AnnotatedRecord> {
        let mut running: Option<Decimal> = None;

        series
            .iter()
            .map(|record| {
                let high = running.map_or(record.close_price, |m| m.max(record.close_price));
                let is_new_high = match running {
                    Some(previous) => high != previous,
                    None => self.first_record == FirstRecordPolicy::NewHigh,
                };
                running = Some(high);

                AnnotatedRecord {
                    trade_date: record.trade_date,
                    close_price: record.close_price,
                    running_high: high,
                    is_new_high,
                }
            })
            .collect()
    }
}
