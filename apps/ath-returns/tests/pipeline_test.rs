//! End-to-end tests for the forward-return pipeline.
//!
//! Covers file ingestion through report output, the edge cases around the
//! end of the data, and segment aggregation over a generated series.

// Allow unwrap in tests - tests should panic on unexpected errors
#![allow(clippy::unwrap_used)]

use std::io::Write;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use ath_returns::aggregate::{Aggregator, MedianConvention, Segment, mean};
use ath_returns::config::{AnalysisConfig, ParallelConfig, load_config_from_string};
use ath_returns::data::{self, InMemoryDataSource, Observation};
use ath_returns::report::{AnalysisReport, rows_to_csv};
use ath_returns::returns::{ForwardReturnEngine, Horizon, OutcomeStatus, ReturnTable};
use ath_returns::series::PriceSeries;
use ath_returns::run_pipeline;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn run(observations: Vec<Observation>) -> ReturnTable {
    let series = PriceSeries::from_observations(observations).unwrap();
    ForwardReturnEngine::default().run(&series).unwrap()
}

/// Weekday closes with a saw-tooth over an up-drift, so new highs come
/// in bursts separated by drawdowns.
fn generated_series(days: u64) -> Vec<Observation> {
    let start = date(1995, 1, 2);
    (0..days)
        .filter_map(|i| {
            let d = start + Days::new(i);
            if matches!(d.weekday(), Weekday::Sat | Weekday::Sun) {
                return None;
            }
            let drift = Decimal::from(i) / dec!(4);
            let wave = Decimal::from((i * 13) % 97);
            Some((d, dec!(500) + drift + wave))
        })
        .collect()
}

// =============================================================================
// Matching window at the edges of the data
// =============================================================================

/// The forward close one day after the target is deliberately left
/// unmatched: the window trails the target, so a later close never stands
/// in for it and the outcome is `NoMatchInWindow`, not a 0.10 gain.
#[test]
fn record_after_target_is_not_a_match() {
    let table = run(vec![
        (date(2020, 1, 1), dec!(100)),
        (date(2021, 1, 2), dec!(110)),
    ]);

    let first = &table.rows()[0];
    let one_year = first.outcome(Horizon::ONE_YEAR).unwrap();

    assert_eq!(one_year.status, OutcomeStatus::NoMatchInWindow);
    assert_eq!(one_year.target_date, Some(date(2021, 1, 1)));
    assert!(one_year.close_price.is_none());
    assert!(one_year.gain_percent.is_none());
}

#[test]
fn record_inside_trailing_window_is_matched() {
    let table = run(vec![
        (date(2020, 1, 1), dec!(100)),
        (date(2020, 12, 31), dec!(110)),
        (date(2021, 1, 5), dec!(112)),
    ]);

    let one_year = table.rows()[0].outcome(Horizon::ONE_YEAR).unwrap();

    assert_eq!(one_year.status, OutcomeStatus::Computed);
    assert_eq!(one_year.matched_date, Some(date(2020, 12, 31)));
    assert_eq!(one_year.close_price, Some(dec!(110)));
    assert_eq!(one_year.gain_dollars, Some(dec!(10)));
    assert_eq!(one_year.gain_percent, Some(dec!(0.10)));
}

#[test]
fn source_past_bound_is_null_without_search() {
    let table = run(vec![
        (date(2015, 8, 26), dec!(2000)),
        (date(2020, 8, 20), dec!(3385)),
        (date(2020, 8, 26), dec!(3478)),
    ]);

    assert_eq!(table.bounds().bound(Horizon::FIVE_YEARS), Some(date(2015, 8, 26)));

    let late = table.rows()[1].outcome(Horizon::FIVE_YEARS).unwrap();
    assert_eq!(late.status, OutcomeStatus::BeyondHorizonBound);
    assert!(late.target_date.is_none());
    assert!(late.matched_date.is_none());
    assert!(late.gain_dollars.is_none());

    // Exactly on the bound is still attributed.
    let early = table.rows()[0].outcome(Horizon::FIVE_YEARS).unwrap();
    assert_eq!(early.status, OutcomeStatus::Computed);
    assert_eq!(early.matched_date, Some(date(2020, 8, 26)));
}

#[test]
fn tiny_close_yields_null_percent_instead_of_failing() {
    let table = run(vec![
        (date(2020, 1, 2), dec!(0.0000000000000000000000000001)),
        (date(2021, 1, 2), dec!(100)),
    ]);

    let one_year = table.rows()[0].outcome(Horizon::ONE_YEAR).unwrap();
    assert_eq!(one_year.status, OutcomeStatus::PercentOverflow);
    assert_eq!(one_year.matched_date, Some(date(2021, 1, 2)));
    assert!(one_year.gain_percent.is_none());

    let agg = Aggregator::new(&table, MedianConvention::Exact);
    assert_eq!(agg.segment_average(Segment::All, Horizon::ONE_YEAR), None);
}

#[test]
fn horizon_past_calendar_range_is_null() {
    let analysis = AnalysisConfig {
        horizons: vec![Horizon::years(400_000_000)],
        ..AnalysisConfig::default()
    };
    let series = PriceSeries::from_observations(vec![
        (date(2020, 1, 2), dec!(100)),
        (date(2021, 1, 4), dec!(110)),
    ])
    .unwrap();

    let table = ForwardReturnEngine::new(analysis).run(&series).unwrap();

    assert_eq!(table.bounds().bound(Horizon::years(400_000_000)), None);
    for row in table.rows() {
        let outcome = row.outcome(Horizon::years(400_000_000)).unwrap();
        assert_eq!(outcome.status, OutcomeStatus::BeyondHorizonBound);
    }
}

#[test]
fn single_record_series_is_all_null() {
    let table = run(vec![(date(2020, 3, 2), dec!(2954.22))]);

    assert_eq!(table.len(), 1);
    let row = &table.rows()[0];
    assert!(!row.record.is_new_high);
    assert_eq!(row.record.running_high, dec!(2954.22));
    for outcome in &row.outcomes {
        assert_eq!(outcome.status, OutcomeStatus::BeyondHorizonBound);
        assert!(outcome.gain_percent.is_none());
    }
}

// =============================================================================
// Whole-series properties
// =============================================================================

#[test]
fn rerun_is_identical() {
    let observations = generated_series(4_000);

    let first = run(observations.clone());
    let second = run(observations);

    assert_eq!(first, second);
    assert_eq!(
        AnalysisReport::build(&first, MedianConvention::Exact),
        AnalysisReport::build(&second, MedianConvention::Exact)
    );
    assert_eq!(rows_to_csv(&first), rows_to_csv(&second));
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let series = PriceSeries::from_observations(generated_series(3_000)).unwrap();

    let sequential = ForwardReturnEngine::default()
        .with_parallel(ParallelConfig {
            max_threads: 1,
            min_parallel_rows: usize::MAX,
        })
        .run(&series)
        .unwrap();
    let parallel = ForwardReturnEngine::default()
        .with_parallel(ParallelConfig {
            max_threads: 4,
            min_parallel_rows: 0,
        })
        .run(&series)
        .unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn new_high_segment_only_uses_new_high_days() {
    let table = run(generated_series(3_000));
    let aggregator = Aggregator::new(&table, MedianConvention::Exact);

    for &horizon in table.horizons() {
        let expected: Vec<Decimal> = table
            .rows()
            .iter()
            .filter(|r| r.record.is_new_high)
            .filter_map(|r| r.gain_percent(horizon))
            .collect();

        assert_eq!(aggregator.gains(Segment::NewHigh, horizon), expected);
        assert_eq!(
            aggregator.segment_average(Segment::NewHigh, horizon),
            mean(&expected)
        );
    }

    let summary = aggregator.segment_summary(Segment::NewHigh, Horizon::ONE_YEAR);
    let new_high_days = table.rows().iter().filter(|r| r.record.is_new_high).count();
    assert_eq!(summary.trade_count, new_high_days as u64);
    assert!(summary.sample_count > 0);
}

#[test]
fn running_high_never_falls() {
    let table = run(generated_series(2_000));

    for pair in table.rows().windows(2) {
        let (prev, cur) = (&pair[0].record, &pair[1].record);
        assert!(cur.running_high >= prev.running_high);
        assert_eq!(cur.is_new_high, cur.running_high > prev.running_high);
    }
}

#[test]
fn yearly_rollup_counts_add_up() {
    let table = run(generated_series(2_000));
    let rollup = Aggregator::new(&table, MedianConvention::Exact).yearly_rollup();

    let total: u64 = rollup.iter().map(|y| y.trade_count).sum();
    let new_highs: u64 = rollup.iter().map(|y| y.new_high_count).sum();

    assert_eq!(total, table.len() as u64);
    assert_eq!(
        new_highs,
        table.rows().iter().filter(|r| r.record.is_new_high).count() as u64
    );
    assert!(rollup.windows(2).all(|w| w[0].year < w[1].year));
}

// =============================================================================
// File ingestion through report
// =============================================================================

#[test]
fn csv_file_to_report() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "date,close").unwrap();
    for (d, close) in generated_series(1_500) {
        writeln!(file, "{d},{close}").unwrap();
    }

    let yaml = format!(
        "data:\n  path: \"${{ATH_RETURNS_TEST_UNSET_PATH:-{}}}\"\nanalysis:\n  horizons: [1, 2]\n",
        file.path().display()
    );
    let config = load_config_from_string(&yaml).unwrap();

    let source = data::from_config(&config.data);
    let output = run_pipeline(source.as_ref(), &config.analysis, &config.parallel).unwrap();

    assert_eq!(output.table.horizons(), &[Horizon::years(1), Horizon::years(2)]);
    assert_eq!(output.report.segments.len(), 4);
    assert_eq!(output.report.series.count, output.table.len() as u64);

    let json = output.report.to_json(true).unwrap();
    let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, output.report);
}

#[test]
fn json_file_matches_in_memory_source() {
    let observations = generated_series(800);

    let rows: Vec<serde_json::Value> = observations
        .iter()
        .map(|(d, close)| serde_json::json!({ "date": d.to_string(), "close": close.to_string() }))
        .collect();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&rows).unwrap().as_bytes())
        .unwrap();

    let analysis = AnalysisConfig::default();
    let parallel = ParallelConfig::default();

    let from_file = run_pipeline(
        &data::JsonFileDataSource::new(file.path()),
        &analysis,
        &parallel,
    )
    .unwrap();
    let from_memory =
        run_pipeline(&InMemoryDataSource::new(observations), &analysis, &parallel).unwrap();

    assert_eq!(from_file, from_memory);
}
