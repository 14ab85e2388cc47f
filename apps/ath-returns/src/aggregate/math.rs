//! Statistical math utilities for gain aggregation.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::types::MedianConvention;

/// Calculate mean of a slice of decimals.
pub fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let sum: Decimal = values.iter().sum();
    Some(sum / Decimal::from(values.len() as u64))
}

/// Calculate the median of a slice of decimals.
pub fn median(values: &[Decimal], convention: MedianConvention) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let sorted = sorted(values);
    let n = sorted.len();

    match convention {
        MedianConvention::LowerMiddle => Some(sorted[(n - 1) / 2]),
        MedianConvention::Exact if n % 2 == 1 => Some(sorted[n / 2]),
        MedianConvention::Exact => Some((sorted[n / 2 - 1] + sorted[n / 2]) / Decimal::TWO),
    }
}

/// Percent-rank cutoff percentile.
///
/// Returns the largest value whose percent rank `(rank - 1) / (N - 1)` is
/// at most `p`. Tied values share the rank of their first occurrence, so
/// this is the sorted value at index `floor(p * (N - 1))`. `None` for an
/// empty slice or `p` outside `[0, 1]`.
pub fn percentile(values: &[Decimal], p: Decimal) -> Option<Decimal> {
    if values.is_empty() || p < Decimal::ZERO || p > Decimal::ONE {
        return None;
    }
    let sorted = sorted(values);
    let last = sorted.len() - 1;
    let index = (p * Decimal::from(last as u64)).floor().to_usize()?;
    sorted.get(index.min(last)).copied()
}

fn sorted(values: &[Decimal]) -> Vec<Decimal> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}
