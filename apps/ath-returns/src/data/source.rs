//! Data source trait and the in-memory implementation.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::DataSourceError;

/// A raw `(trade date, close)` pair, not yet validated.
pub type Observation = (NaiveDate, Decimal);

/// Data source trait for loading close prices.
pub trait PriceDataSource: Send + Sync {
    /// Load every observation the source holds, in source order.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be read or parsed.
    fn load(&self) -> Result<Vec<Observation>, DataSourceError>;

    /// Get the name of this data source.
    fn name(&self) -> &'static str;
}

/// In-memory data source for tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSource {
    observations: Vec<Observation>,
}

impl InMemoryDataSource {
    /// Create a source over `observations`.
    #[must_use]
    pub const fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Append one observation.
    pub fn push(&mut self, date: NaiveDate, close: Decimal) {
        self.observations.push((date, close));
    }
}

impl PriceDataSource for InMemoryDataSource {
    fn load(&self) -> Result<Vec<Observation>, DataSourceError> {
        Ok(self.observations.clone())
    }

    fn name(&self) -> &'static str {
        "InMemory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_in_memory_round_trips_order() {
        let d1 = NaiveDate::from_ymd_opt(2020, 1, 3).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();

        let mut source = InMemoryDataSource::default();
        source.push(d1, dec!(101));
        source.push(d2, dec!(100));

        let loaded = source.load().unwrap();
        assert_eq!(loaded, vec![(d1, dec!(101)), (d2, dec!(100))]);
        assert_eq!(source.name(), "InMemory");
    }
}
