//! Formatting helpers for the text summary.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const HUNDRED: Decimal = dec!(100);

/// Format a fractional gain as a percentage string.
#[must_use]
pub fn format_pct(value: Decimal) -> String {
    format!("{:.2}%", value * HUNDRED)
}

/// Format a decimal with 2 decimal places.
#[must_use]
pub fn format_decimal(value: Decimal) -> String {
    format!("{value:.2}")
}

/// Format an optional fractional gain, `N/A` when absent.
#[must_use]
pub fn format_optional_pct(value: Option<Decimal>) -> String {
    value.map_or_else(|| "N/A".to_string(), format_pct)
}
