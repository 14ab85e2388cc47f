//! Core types produced by the forward-return pipeline.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::horizon::{Horizon, SeriesBounds};
use crate::series::PriceRecord;

/// A close annotated with its running all-time high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    /// Trading date.
    pub trade_date: NaiveDate,
    /// Closing price.
    pub close_price: Decimal,
    /// Highest close on or before `trade_date`.
    pub running_high: Decimal,
    /// Whether `running_high` strictly rose on this day.
    pub is_new_high: bool,
}

impl AnnotatedRecord {
    /// The underlying `(date, close)` pair.
    #[must_use]
    pub const fn price_record(&self) -> PriceRecord {
        PriceRecord::new(self.trade_date, self.close_price)
    }
}

/// Result of looking up the forward close for one source date and horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorizonMatch {
    /// Horizon searched.
    pub horizon: Horizon,
    /// `source date + horizon`; `None` only on calendar overflow.
    pub target_date: Option<NaiveDate>,
    /// Latest record in the trailing window ending at `target_date`.
    pub matched: Option<AnnotatedRecord>,
}

/// Why a [`ReturnOutcome`] does or does not carry values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// A forward close was matched and gains computed.
    Computed,
    /// Source date is later than the horizon's bound; no search was made.
    BeyondHorizonBound,
    /// No record fell inside the tolerance window.
    NoMatchInWindow,
    /// A forward close was matched but the percent gain is not
    /// representable as a `Decimal`.
    PercentOverflow,
}

/// Forward return of one source record over one horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnOutcome {
    /// Horizon.
    pub horizon: Horizon,
    /// Outcome status.
    pub status: OutcomeStatus,
    /// Target date searched, if a search was made.
    pub target_date: Option<NaiveDate>,
    /// Date of the matched forward close.
    pub matched_date: Option<NaiveDate>,
    /// Matched forward close.
    pub close_price: Option<Decimal>,
    /// `close_price - source close`.
    pub gain_dollars: Option<Decimal>,
    /// Fractional gain (0.10 = 10%), rounded.
    pub gain_percent: Option<Decimal>,
}

impl ReturnOutcome {
    /// Outcome for a source too close to the end of the data.
    #[must_use]
    pub const fn beyond_bound(horizon: Horizon) -> Self {
        Self {
            horizon,
            status: OutcomeStatus::BeyondHorizonBound,
            target_date: None,
            matched_date: None,
            close_price: None,
            gain_dollars: None,
            gain_percent: None,
        }
    }

    /// Outcome for a search that found nothing in the window.
    #[must_use]
    pub const fn unmatched(horizon: Horizon, target_date: Option<NaiveDate>) -> Self {
        Self {
            horizon,
            status: OutcomeStatus::NoMatchInWindow,
            target_date,
            matched_date: None,
            close_price: None,
            gain_dollars: None,
            gain_percent: None,
        }
    }

    /// Whether gains were computed.
    #[must_use]
    pub fn is_computed(&self) -> bool {
        self.status == OutcomeStatus::Computed
    }
}

/// One source record with its outcome for every configured horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnRow {
    /// Source record.
    pub record: AnnotatedRecord,
    /// Outcomes in horizon order.
    pub outcomes: Vec<ReturnOutcome>,
}

impl ReturnRow {
    /// Outcome for `horizon`.
    #[must_use]
    pub fn outcome(&self, horizon: Horizon) -> Option<&ReturnOutcome> {
        self.outcomes.iter().find(|o| o.horizon == horizon)
    }

    /// Rounded percent gain for `horizon`, if computed.
    #[must_use]
    pub fn gain_percent(&self, horizon: Horizon) -> Option<Decimal> {
        self.outcome(horizon).and_then(|o| o.gain_percent)
    }
}

/// Full pipeline output: one row per source record, in date order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnTable {
    horizons: Vec<Horizon>,
    bounds: SeriesBounds,
    rows: Vec<ReturnRow>,
}

impl ReturnTable {
    /// Assemble a table.
    #[must_use]
    pub const fn new(horizons: Vec<Horizon>, bounds: SeriesBounds, rows: Vec<ReturnRow>) -> Self {
        Self {
            horizons,
            bounds,
            rows,
        }
    }

    /// Horizons evaluated, in output order.
    #[must_use]
    pub fn horizons(&self) -> &[Horizon] {
        &self.horizons
    }

    /// Bounds used to null out edge rows.
    #[must_use]
    pub const fn bounds(&self) -> &SeriesBounds {
        &self.bounds
    }

    /// Rows in ascending date order.
    #[must_use]
    pub fn rows(&self) -> &[ReturnRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
