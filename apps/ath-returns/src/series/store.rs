//! Validated, date-sorted close series.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::error::SeriesError;
use super::record::PriceRecord;

/// Immutable close series sorted ascending by trade date.
///
/// Dates are unique and prices are strictly positive. Calendar gaps
/// (weekends, holidays, missing sessions) are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSeries {
    records: Vec<PriceRecord>,
}

impl PriceSeries {
    /// Build a series from `(date, close)` observations in any order.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptySeries`] for empty input,
    /// [`SeriesError::InvalidPrice`] for a close `<= 0` and
    /// [`SeriesError::DuplicateDate`] when a date repeats.
    pub fn from_observations<I>(observations: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = (NaiveDate, Decimal)>,
    {
        let records: Vec<PriceRecord> = observations
            .into_iter()
            .map(|(date, price)| PriceRecord::new(date, price))
            .collect();
        Self::from_records(records)
    }

    /// Build a series from records in any order.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_observations`].
    pub fn from_records(mut records: Vec<PriceRecord>) -> Result<Self, SeriesError> {
        if records.is_empty() {
            warn!("Rejected empty price series");
            return Err(SeriesError::EmptySeries);
        }

        if let Some(bad) = records.iter().find(|r| r.close_price <= Decimal::ZERO) {
            warn!(
                date = %bad.trade_date,
                price = %bad.close_price,
                "Rejected non-positive close price"
            );
            return Err(SeriesError::InvalidPrice {
                date: bad.trade_date,
                price: bad.close_price,
            });
        }

        records.sort_by_key(|r| r.trade_date);

        if let Some(pair) = records
            .windows(2)
            .find(|w| w[0].trade_date == w[1].trade_date)
        {
            warn!(date = %pair[0].trade_date, "Rejected duplicate trade date");
            return Err(SeriesError::DuplicateDate {
                date: pair[0].trade_date,
            });
        }

        debug!(
            count = records.len(),
            first = %records[0].trade_date,
            last = %records[records.len() - 1].trade_date,
            "Price series loaded"
        );

        Ok(Self { records })
    }

    /// Number of records.
    #[must_use]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Records in ascending date order.
    #[must_use]
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    /// Record at `index` in date order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PriceRecord> {
        self.records.get(index)
    }

    /// Iterate records in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &PriceRecord> {
        self.records.iter()
    }

    /// Earliest trade date.
    #[must_use]
    pub fn first_date(&self) -> NaiveDate {
        self.records[0].trade_date
    }

    /// Latest trade date.
    #[must_use]
    pub fn last_date(&self) -> NaiveDate {
        self.records[self.records.len() - 1].trade_date
    }
}
