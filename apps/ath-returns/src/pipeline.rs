//! End-to-end analysis run: load, validate, compute, aggregate.

use tracing::info;

use crate::config::{AnalysisConfig, ParallelConfig};
use crate::data::PriceDataSource;
use crate::error::AnalysisError;
use crate::report::AnalysisReport;
use crate::returns::{ForwardReturnEngine, ReturnTable};
use crate::series::PriceSeries;

/// Output of [`run_pipeline`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutput {
    /// Per-day forward returns.
    pub table: ReturnTable,
    /// Aggregated report.
    pub report: AnalysisReport,
}

/// Load `source`, build the series and compute the table and report.
///
/// # Errors
///
/// Returns [`AnalysisError`] if loading, validation or the engine fails.
pub fn run_pipeline(
    source: &dyn PriceDataSource,
    analysis: &AnalysisConfig,
    parallel: &ParallelConfig,
) -> Result<AnalysisOutput, AnalysisError> {
    let observations = source.load()?;
    info!(
        source = source.name(),
        observations = observations.len(),
        "Price data loaded"
    );

    let series = PriceSeries::from_observations(observations)?;
    let table = ForwardReturnEngine::new(analysis.clone())
        .with_parallel(parallel.clone())
        .run(&series)?;
    let report = AnalysisReport::build(&table, analysis.median);

    Ok(AnalysisOutput { table, report })
}
