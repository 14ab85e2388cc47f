//! Crate-level error type.

use thiserror::Error;

use crate::data::DataSourceError;
use crate::returns::EngineError;
use crate::series::SeriesError;

/// Any error that aborts an analysis run once a config is loaded.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Price data could not be loaded.
    #[error("Data source error: {0}")]
    DataSource(#[from] DataSourceError),

    /// Price data failed validation.
    #[error("Invalid price series: {0}")]
    Series(#[from] SeriesError),

    /// The engine failed to run.
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}
