//! Price series store.
//!
//! Holds the validated `(date, close)` series that every downstream stage
//! reads from. Input may arrive in any order; the store sorts it ascending
//! by date and rejects:
//!
//! - empty input
//! - duplicate trade dates
//! - zero or negative closes

mod error;
mod record;
mod store;

pub use error::SeriesError;
pub use record::PriceRecord;
pub use store::PriceSeries;
