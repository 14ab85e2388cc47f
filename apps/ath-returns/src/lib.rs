// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::option_if_let_else,
        clippy::default_trait_access,
        clippy::items_after_statements,
        clippy::or_fun_call
    )
)]

//! ATH Returns - forward returns after all-time-high closes
//!
//! Measures whether buying on a day that closed at a new all-time high
//! performed differently from buying on any day, over 1, 3 and 5 year
//! holding periods.
//!
//! # Pipeline
//!
//! - `series`: validated, date-sorted close series
//! - `returns`: running-high annotation, forward-date matching and gain
//!   calculation ([`ForwardReturnEngine`])
//! - `aggregate`: segment means and medians, percentiles, yearly rollups
//! - `report`: JSON report, CSV row export, text summary
//!
//! # Ambient
//!
//! - `config`: YAML configuration with environment interpolation
//! - `data`: CSV / JSON / in-memory price sources
//! - `telemetry`: tracing subscriber setup
//! - `pipeline`: load, validate, compute and aggregate in one call

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod aggregate;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod returns;
pub mod series;
pub mod telemetry;

pub use aggregate::{Aggregator, MedianConvention, Segment};
pub use config::{Config, load_config};
pub use data::{CsvFileDataSource, InMemoryDataSource, JsonFileDataSource, PriceDataSource};
pub use error::AnalysisError;
pub use pipeline::{AnalysisOutput, run_pipeline};
pub use report::AnalysisReport;
pub use returns::{ForwardReturnEngine, Horizon, ReturnTable};
pub use series::{PriceRecord, PriceSeries};
