//! CSV price file adapter.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use tracing::debug;

use super::error::DataSourceError;
use super::source::{Observation, PriceDataSource};

/// Date format accepted in price files.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reads closes from a CSV file with a header row.
///
/// Extra columns are ignored and blank lines are skipped.
#[derive(Debug, Clone)]
pub struct CsvFileDataSource {
    path: PathBuf,
    date_column: String,
    close_column: String,
}

impl CsvFileDataSource {
    /// Source reading `date` and `close` columns from `path`.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            date_column: "date".to_string(),
            close_column: "close".to_string(),
        }
    }

    /// Override the header names of the date and close columns.
    #[must_use]
    pub fn with_columns(mut self, date_column: &str, close_column: &str) -> Self {
        self.date_column = date_column.to_string();
        self.close_column = close_column.to_string();
        self
    }

    /// Path being read.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_from<R: Read>(&self, reader: R) -> Result<Vec<Observation>, DataSourceError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = rdr.headers().map_err(csv_error)?.clone();
        let date_idx = column_index(&headers, &self.date_column)?;
        let close_idx = column_index(&headers, &self.close_column)?;

        let mut observations = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(csv_error)?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            let line = record.position().map_or(0, |p| p.line() as usize);
            observations.push(parse_row(&record, line, date_idx, close_idx)?);
        }

        Ok(observations)
    }
}

impl PriceDataSource for CsvFileDataSource {
    fn load(&self) -> Result<Vec<Observation>, DataSourceError> {
        let file = std::fs::File::open(&self.path)?;
        let observations = self.read_from(file)?;

        debug!(
            source = self.name(),
            path = %self.path.display(),
            rows = observations.len(),
            "Loaded price observations"
        );

        Ok(observations)
    }

    fn name(&self) -> &'static str {
        "CsvFile"
    }
}

fn column_index(headers: &StringRecord, column: &str) -> Result<usize, DataSourceError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| DataSourceError::MissingColumn(column.to_string()))
}

fn parse_row(
    record: &StringRecord,
    line: usize,
    date_idx: usize,
    close_idx: usize,
) -> Result<Observation, DataSourceError> {
    let field = |idx: usize, name: &str| {
        record
            .get(idx)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| DataSourceError::Parse {
                line,
                message: format!("missing {name} value"),
            })
    };

    let raw_date = field(date_idx, "date")?;
    let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT).map_err(|e| {
        DataSourceError::Parse {
            line,
            message: format!("invalid date '{raw_date}': {e}"),
        }
    })?;

    let raw_close = field(close_idx, "close")?;
    let close = Decimal::from_str(raw_close).map_err(|e| DataSourceError::Parse {
        line,
        message: format!("invalid close '{raw_close}': {e}"),
    })?;

    Ok((date, close))
}

fn csv_error(err: csv::Error) -> DataSourceError {
    let line = err.position().map_or(0, |p| p.line() as usize);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => DataSourceError::Io(io),
        _ => DataSourceError::Parse { line, message },
    }
}
