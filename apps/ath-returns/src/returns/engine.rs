//! Forward-return pipeline runner using Rayon.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{Level, debug, info, span};

use super::annotate::RunningHighAnnotator;
use super::calculator::ReturnCalculator;
use super::error::EngineError;
use super::horizon::SeriesBounds;
use super::matcher::ForwardDateMatcher;
use super::types::{AnnotatedRecord, ReturnRow, ReturnTable};
use crate::config::{AnalysisConfig, ParallelConfig};
use crate::series::PriceSeries;

/// Runs annotation, matching and return calculation over a series.
#[derive(Debug, Clone, Default)]
pub struct ForwardReturnEngine {
    analysis: AnalysisConfig,
    parallel: ParallelConfig,
}

impl ForwardReturnEngine {
    /// Create an engine with default parallel settings.
    #[must_use]
    pub fn new(analysis: AnalysisConfig) -> Self {
        Self {
            analysis,
            parallel: ParallelConfig::default(),
        }
    }

    /// Override parallel execution settings.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Analysis settings in use.
    #[must_use]
    pub const fn analysis(&self) -> &AnalysisConfig {
        &self.analysis
    }

    /// Compute the return table for `series`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ThreadPool`] if a dedicated pool was
    /// requested and could not be built.
    #[allow(clippy::cast_possible_truncation)]
    pub fn run(&self, series: &PriceSeries) -> Result<ReturnTable, EngineError> {
        let span = span!(Level::INFO, "forward_returns", rows = series.count());
        let _enter = span.enter();
        let start = Instant::now();

        let horizons = &self.analysis.horizons;
        let annotated = RunningHighAnnotator::new(self.analysis.first_record).annotate(series);
        let bounds = SeriesBounds::new(series.last_date(), horizons);
        let matcher = ForwardDateMatcher::new(&annotated, self.analysis.tolerance_days);
        let calculator = ReturnCalculator::new(self.analysis.percent_scale);

        debug!(
            last_date = %bounds.last_date,
            bounds = ?bounds.bounds,
            "Series bounds computed"
        );

        let evaluate_row = |record: &AnnotatedRecord| ReturnRow {
            record: *record,
            outcomes: horizons
                .iter()
                .map(|&h| calculator.evaluate(record, h, &bounds, &matcher))
                .collect(),
        };

        let rows: Vec<ReturnRow> = if annotated.len() >= self.parallel.min_parallel_rows {
            self.run_parallel(&annotated, &evaluate_row)?
        } else {
            annotated.iter().map(evaluate_row).collect()
        };

        let new_highs = rows.iter().filter(|r| r.record.is_new_high).count();
        let computed = rows
            .iter()
            .flat_map(|r| r.outcomes.iter())
            .filter(|o| o.is_computed())
            .count();

        info!(
            rows = rows.len(),
            new_highs,
            computed_outcomes = computed,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Forward returns computed"
        );

        Ok(ReturnTable::new(horizons.clone(), bounds, rows))
    }

    fn run_parallel<F>(
        &self,
        records: &[AnnotatedRecord],
        evaluate_row: &F,
    ) -> Result<Vec<ReturnRow>, EngineError>
    where
        F: Fn(&AnnotatedRecord) -> ReturnRow + Sync,
    {
        if self.parallel.max_threads == 0 {
            return Ok(records.par_iter().map(evaluate_row).collect());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.parallel.max_threads)
            .build()
            .map_err(|e| EngineError::ThreadPool {
                message: e.to_string(),
            })?;

        Ok(pool.install(|| records.par_iter().map(evaluate_row).collect()))
    }
}
