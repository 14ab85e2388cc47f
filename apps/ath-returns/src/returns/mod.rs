//! Forward-return attribution.
//!
//! Turns a [`crate::series::PriceSeries`] into a [`ReturnTable`]:
//!
//! 1. [`RunningHighAnnotator`] tags each close with its running all-time
//!    high and whether that day set a new one.
//! 2. [`SeriesBounds`] records, per horizon, the latest source date whose
//!    forward window still lies inside the data.
//! 3. [`ForwardDateMatcher`] finds the latest close in the trailing
//!    tolerance window ending at `date + horizon`.
//! 4. [`ReturnCalculator`] turns a match into dollar and percent gains.
//!
//! [`ForwardReturnEngine`] runs the stages in order.

mod annotate;
mod calculator;
mod engine;
mod error;
mod horizon;
mod matcher;
mod types;

pub use annotate::{FirstRecordPolicy, RunningHighAnnotator};
pub use calculator::{DEFAULT_PERCENT_SCALE, ReturnCalculator};
pub use engine::ForwardReturnEngine;
pub use error::EngineError;
pub use horizon::{Horizon, HorizonBound, SeriesBounds};
pub use matcher::{DEFAULT_TOLERANCE_DAYS, ForwardDateMatcher};
pub use types::{AnnotatedRecord, HorizonMatch, OutcomeStatus, ReturnOutcome, ReturnRow, ReturnTable};
