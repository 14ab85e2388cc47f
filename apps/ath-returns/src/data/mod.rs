//! Price data sources.
//!
//! Adapters that produce raw `(date, close)` observations for
//! [`crate::series::PriceSeries`]. Validation (ordering, duplicates,
//! positive prices) happens in the store, not here.

mod csv_file;
mod error;
mod json_file;
mod source;

pub use csv_file::CsvFileDataSource;
pub use error::DataSourceError;
pub use json_file::JsonFileDataSource;
pub use source::{InMemoryDataSource, Observation, PriceDataSource};

use crate::config::{DataConfig, DataFormat};

/// Build the data source described by `config`.
#[must_use]
pub fn from_config(config: &DataConfig) -> Box<dyn PriceDataSource> {
    match config.format {
        DataFormat::Csv => Box::new(
            CsvFileDataSource::new(&config.path)
                .with_columns(&config.date_column, &config.close_column),
        ),
        DataFormat::Json => Box::new(JsonFileDataSource::new(&config.path)),
    }
}
