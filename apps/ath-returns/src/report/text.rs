//! Plain-text report summary.

use std::fmt::Write;

use super::AnalysisReport;
use super::format::format_optional_pct;

/// Render a human-readable summary of `report`.
#[must_use]
pub fn render_summary(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let series = &report.series;

    match (series.first_date, series.last_date) {
        (Some(first), Some(last)) => {
            let _ = writeln!(
                out,
                "{} closes from {first} to {last}, {} new all-time highs",
                series.count, series.new_high_count
            );
        }
        _ => {
            let _ = writeln!(out, "Empty series");
        }
    }

    let _ = writeln!(
        out,
        "{:<9} {:>4} {:>7} {:>9} {:>9} {:>9}",
        "segment", "hzn", "n", "mean", "median", "positive"
    );
    for s in &report.segments {
        let _ = writeln!(
            out,
            "{:<9} {:>4} {:>7} {:>9} {:>9} {:>9}",
            s.segment.to_string(),
            s.horizon.to_string(),
            s.sample_count,
            format_optional_pct(s.mean),
            format_optional_pct(s.median),
            format_optional_pct(s.positive_share),
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::MedianConvention;
    use crate::returns::ForwardReturnEngine;
    use crate::series::PriceSeries;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_summary() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        let series = PriceSeries::from_observations(vec![
            (d(2020, 1, 2), dec!(100)),
            (d(2021, 1, 4), dec!(110)),
        ])
        .unwrap();
        let table = ForwardReturnEngine::default().run(&series).unwrap();
        let report = AnalysisReport::build(&table, MedianConvention::Exact);

        let text = render_summary(&report);

        assert!(text.starts_with("2 closes from 2020-01-02 to 2021-01-04, 1 new all-time highs"));
        assert!(text.contains("new_high"));
        assert!(text.contains("N/A"));
        assert_eq!(text.lines().count(), 2 + report.segments.len());
    }
}
