//! A single daily close.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One trading day's close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Trading date.
    pub trade_date: NaiveDate,
    /// Closing price (always positive once stored).
    pub close_price: Decimal,
}

impl PriceRecord {
    /// Create a new record.
    #[must_use]
    pub const fn new(trade_date: NaiveDate, close_price: Decimal) -> Self {
        Self {
            trade_date,
            close_price,
        }
    }
}
