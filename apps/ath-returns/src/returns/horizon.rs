//! Forward horizons and the per-horizon trust bounds of a series.

use std::fmt;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A forward offset in whole calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Horizon(u32);

impl Horizon {
    /// One year forward.
    pub const ONE_YEAR: Self = Self(1);
    /// Three years forward.
    pub const THREE_YEARS: Self = Self(3);
    /// Five years forward.
    pub const FIVE_YEARS: Self = Self(5);
    /// The 1y / 3y / 5y set used by default.
    pub const STANDARD: [Self; 3] = [Self::ONE_YEAR, Self::THREE_YEARS, Self::FIVE_YEARS];

    /// Horizon of `years` calendar years.
    #[must_use]
    pub const fn years(years: u32) -> Self {
        Self(years)
    }

    /// Number of years.
    #[must_use]
    pub const fn as_years(self) -> u32 {
        self.0
    }

    fn months(self) -> Option<Months> {
        self.0.checked_mul(12).map(Months::new)
    }

    /// `date` plus this horizon.
    ///
    /// Same month and day; Feb 29 lands on Feb 28 when the target year is
    /// not a leap year. `None` only on calendar overflow.
    #[must_use]
    pub fn forward_from(self, date: NaiveDate) -> Option<NaiveDate> {
        date.checked_add_months(self.months()?)
    }

    /// `date` minus this horizon, clamped the same way as
    /// [`Self::forward_from`].
    #[must_use]
    pub fn back_from(self, date: NaiveDate) -> Option<NaiveDate> {
        date.checked_sub_months(self.months()?)
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y", self.0)
    }
}

/// Latest source date that may be attributed a return for one horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorizonBound {
    /// Horizon.
    pub horizon: Horizon,
    /// `last_date - horizon`; `None` if that underflows the calendar.
    pub max_source_date: Option<NaiveDate>,
}

/// Per-horizon bounds derived once from the last date of a series.
///
/// A source date later than its horizon's bound is too close to the end
/// of the data for a forward match to be trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesBounds {
    /// Latest trade date in the series.
    pub last_date: NaiveDate,
    /// One bound per horizon, in horizon order.
    pub bounds: Vec<HorizonBound>,
}

impl SeriesBounds {
    /// Compute bounds for `horizons` relative to `last_date`.
    #[must_use]
    pub fn new(last_date: NaiveDate, horizons: &[Horizon]) -> Self {
        let bounds = horizons
            .iter()
            .map(|&horizon| HorizonBound {
                horizon,
                max_source_date: horizon.back_from(last_date),
            })
            .collect();
        Self { last_date, bounds }
    }

    /// Bound for `horizon`.
    #[must_use]
    pub fn bound(&self, horizon: Horizon) -> Option<NaiveDate> {
        self.bounds
            .iter()
            .find(|b| b.horizon == horizon)
            .map_or_else(|| horizon.back_from(self.last_date), |b| b.max_source_date)
    }

    /// Whether `source_date` has enough data after it for `horizon`.
    #[must_use]
    pub fn allows(&self, source_date: NaiveDate, horizon: Horizon) -> bool {
        self.bound(horizon).is_some_and(|b| source_date <= b)
    }
}
