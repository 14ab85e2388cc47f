//! Series ingestion errors.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building a [`super::PriceSeries`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// The same trade date appeared more than once.
    #[error("Duplicate trade date: {date}")]
    DuplicateDate {
        /// The repeated date.
        date: NaiveDate,
    },

    /// A close price was zero or negative.
    #[error("Invalid close price {price} on {date}: must be positive")]
    InvalidPrice {
        /// Date of the offending record.
        date: NaiveDate,
        /// The rejected price.
        price: Decimal,
    },

    /// No records were supplied.
    #[error("Price series is empty")]
    EmptySeries,
}
