//! Row table CSV export.

use std::fmt::{Display, Write};

use crate::returns::{OutcomeStatus, ReturnTable};

/// Export every row of `table` as CSV.
///
/// One line per source day; each horizon contributes a status, matched
/// date, close, dollar gain and percent gain column. Null values are
/// empty fields.
#[must_use]
pub fn rows_to_csv(table: &ReturnTable) -> String {
    let mut csv = String::from("trade_date,close_price,running_high,is_new_high");
    for h in table.horizons() {
        let _ = write!(
            csv,
            ",{h}_status,{h}_matched_date,{h}_close,{h}_gain_dollars,{h}_gain_percent"
        );
    }
    csv.push('\n');

    for row in table.rows() {
        let r = &row.record;
        let _ = write!(
            csv,
            "{},{},{},{}",
            r.trade_date, r.close_price, r.running_high, r.is_new_high
        );
        for o in &row.outcomes {
            let _ = write!(
                csv,
                ",{},{},{},{},{}",
                status_label(o.status),
                optional(o.matched_date),
                optional(o.close_price),
                optional(o.gain_dollars),
                optional(o.gain_percent),
            );
        }
        csv.push('\n');
    }

    csv
}

const fn status_label(status: OutcomeStatus) -> &'static str {
    match status {
        OutcomeStatus::Computed => "computed",
        OutcomeStatus::BeyondHorizonBound => "beyond_horizon_bound",
        OutcomeStatus::NoMatchInWindow => "no_match_in_window",
        OutcomeStatus::PercentOverflow => "percent_overflow",
    }
}

fn optional<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
