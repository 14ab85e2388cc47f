//! Forward-date matching by binary search.
//!
//! For a source date `d` and horizon `h` the target is `d + h`. The match
//! is the record with the latest trade date in `[target - tolerance,
//! target]`. Records are sorted and dates unique, so one
//! `partition_point` lookup finds the only candidate: the last record on
//! or before the target. It matches if it is not older than the window
//! start.

use chrono::{Days, NaiveDate};

use super::horizon::Horizon;
use super::types::{AnnotatedRecord, HorizonMatch};

/// Default trailing tolerance in calendar days.
pub const DEFAULT_TOLERANCE_DAYS: u32 = 10;

/// Looks up forward closes in an annotated, date-sorted series.
#[derive(Debug, Clone, Copy)]
pub struct ForwardDateMatcher<'a> {
    records: &'a [AnnotatedRecord],
    tolerance_days: u32,
}

impl<'a> ForwardDateMatcher<'a> {
    /// Create a matcher over `records`, which must be sorted ascending by
    /// date with no duplicates.
    #[must_use]
    pub fn new(records: &'a [AnnotatedRecord], tolerance_days: u32) -> Self {
        debug_assert!(
            records.windows(2).all(|w| w[0].trade_date < w[1].trade_date),
            "records must be strictly ascending by date"
        );
        Self {
            records,
            tolerance_days,
        }
    }

    /// Tolerance window length in days.
    #[must_use]
    pub const fn tolerance_days(&self) -> u32 {
        self.tolerance_days
    }

    /// Match `source_date + horizon`.
    #[must_use]
    pub fn find(&self, source_date: NaiveDate, horizon: Horizon) -> HorizonMatch {
        let target_date = horizon.forward_from(source_date);
        HorizonMatch {
            horizon,
            target_date,
            matched: target_date.and_then(|t| self.latest_in_window(t)),
        }
    }

    /// Latest record with `target - tolerance <= date <= target`.
    #[must_use]
    pub fn latest_in_window(&self, target: NaiveDate) -> Option<AnnotatedRecord> {
        let end = self.records.partition_point(|r| r.trade_date <= target);
        let candidate = self.records[..end].last()?;

        let window_start = target
            .checked_sub_days(Days::new(u64::from(self.tolerance_days)))
            .unwrap_or(NaiveDate::MIN);

        (candidate.trade_date >= window_start).then_some(*candidate)
    }

    /// Match every record in the series for `horizon`, in series order.
    #[must_use]
    pub fn match_all(&self, horizon: Horizon) -> Vec<HorizonMatch> {
        self.records
            .iter()
            .map(|r| self.find(r.trade_date, horizon))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(trade_date: NaiveDate, close: Decimal) -> AnnotatedRecord {
        AnnotatedRecord {
            trade_date,
            close_price: close,
            running_high: close,
            is_new_high: false,
        }
    }

    fn records(dates: &[NaiveDate]) -> Vec<AnnotatedRecord> {
        dates.iter().map(|d| record(*d, dec!(100))).collect()
    }

    #[test_case(date(2020, 12, 31), Some(date(2020, 12, 31)) ; "exact target date")]
    #[test_case(date(2021, 1, 4), Some(date(2020, 12, 31)) ; "latest before target")]
    #[test_case(date(2021, 1, 10), Some(date(2020, 12, 31)) ; "window start inclusive")]
    #[test_case(date(2021, 1, 11), None ; "one day past tolerance")]
    #[test_case(date(2020, 12, 20), None ; "nothing on or before target")]
    #[test_case(date(2021, 1, 25), Some(date(2021, 1, 22)) ; "later record wins")]
    fn test_latest_in_window(target: NaiveDate, expected: Option<NaiveDate>) {
        let recs = records(&[date(2020, 12, 31), date(2021, 1, 22)]);
        let matcher = ForwardDateMatcher::new(&recs, DEFAULT_TOLERANCE_DAYS);

        assert_eq!(
            matcher.latest_in_window(target).map(|r| r.trade_date),
            expected
        );
    }

    #[test]
    fn test_record_after_target_is_not_matched() {
        // The only forward close is one day past 2021-01-01.
        let recs = records(&[date(2020, 1, 1), date(2021, 1, 2)]);
        let matcher = ForwardDateMatcher::new(&recs, DEFAULT_TOLERANCE_DAYS);

        let m = matcher.find(date(2020, 1, 1), Horizon::ONE_YEAR);
        assert_eq!(m.target_date, Some(date(2021, 1, 1)));
        assert!(m.matched.is_none());
    }

    #[test]
    fn test_weekend_gap_is_bridged() {
        // 2023-06-10 is a Saturday; Friday's close is used.
        let recs = records(&[date(2022, 6, 10), date(2023, 6, 9), date(2023, 6, 12)]);
        let matcher = ForwardDateMatcher::new(&recs, DEFAULT_TOLERANCE_DAYS);

        let m = matcher.find(date(2022, 6, 10), Horizon::ONE_YEAR);
        assert_eq!(m.matched.map(|r| r.trade_date), Some(date(2023, 6, 9)));
    }

    #[test]
    fn test_custom_tolerance() {
        let recs = records(&[date(2020, 1, 1), date(2020, 12, 29)]);
        let tight = ForwardDateMatcher::new(&recs, 2);
        let loose = ForwardDateMatcher::new(&recs, 3);

        assert!(tight.find(date(2020, 1, 1), Horizon::ONE_YEAR).matched.is_none());
        assert!(loose.find(date(2020, 1, 1), Horizon::ONE_YEAR).matched.is_some());
    }

    #[test]
    fn test_match_all_preserves_order() {
        let recs = records(&[date(2020, 1, 2), date(2020, 6, 1), date(2021, 1, 2)]);
        let matcher = ForwardDateMatcher::new(&recs, DEFAULT_TOLERANCE_DAYS);

        let all = matcher.match_all(Horizon::ONE_YEAR);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].matched.map(|r| r.trade_date), Some(date(2021, 1, 2)));
        assert!(all[1].matched.is_none());
        assert!(all[2].matched.is_none());
    }

    fn brute_force(recs: &[AnnotatedRecord], target: NaiveDate, tol: u32) -> Option<NaiveDate> {
        let start = target - Days::new(u64::from(tol));
        recs.iter()
            .map(|r| r.trade_date)
            .filter(|d| *d >= start && *d <= target)
            .max()
    }

    proptest! {
        #[test]
        fn prop_matches_latest_date_in_window(
            offsets in prop::collection::btree_set(0u64..3_000, 1..150),
            horizon_years in 1u32..6,
            tol in 0u32..15,
        ) {
            let base = date(2000, 1, 1);
            let recs: Vec<AnnotatedRecord> = offsets
                .iter()
                .map(|o| record(base + Days::new(*o), dec!(1)))
                .collect();
            let matcher = ForwardDateMatcher::new(&recs, tol);
            let horizon = Horizon::years(horizon_years);

            for m in matcher.match_all(horizon) {
                let target = m.target_date.unwrap();
                let expected = brute_force(&recs, target, tol);
                prop_assert_eq!(m.matched.map(|r| r.trade_date), expected);
                if let Some(found) = m.matched {
                    prop_assert!(found.trade_date <= target);
                    prop_assert!(found.trade_date >= target - Days::new(u64::from(tol)));
                }
            }
        }
    }
}
