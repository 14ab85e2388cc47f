//! Dollar and percent gains for one source record and horizon.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use super::horizon::{Horizon, SeriesBounds};
use super::matcher::ForwardDateMatcher;
use super::types::{AnnotatedRecord, HorizonMatch, OutcomeStatus, ReturnOutcome};

/// Decimal places kept on `gain_percent`.
pub const DEFAULT_PERCENT_SCALE: u32 = 4;

/// Computes [`ReturnOutcome`]s.
///
/// Percent gains are rounded half away from zero.
#[derive(Debug, Clone, Copy)]
pub struct ReturnCalculator {
    percent_scale: u32,
}

impl Default for ReturnCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_PERCENT_SCALE)
    }
}

impl ReturnCalculator {
    /// Create a calculator rounding percent gains to `percent_scale` places.
    #[must_use]
    pub const fn new(percent_scale: u32) -> Self {
        Self { percent_scale }
    }

    /// Outcome for `source` given an already computed match.
    ///
    /// The bound check wins over the match: a source past its horizon's
    /// bound is null even if a forward close exists.
    #[must_use]
    pub fn calculate(
        &self,
        source: &AnnotatedRecord,
        bounds: &SeriesBounds,
        horizon_match: &HorizonMatch,
    ) -> ReturnOutcome {
        let horizon = horizon_match.horizon;
        if !bounds.allows(source.trade_date, horizon) {
            return ReturnOutcome::beyond_bound(horizon);
        }

        let Some(matched) = horizon_match.matched else {
            return ReturnOutcome::unmatched(horizon, horizon_match.target_date);
        };

        let gain_dollars = matched.close_price.checked_sub(source.close_price);
        let gain_percent = gain_dollars.and_then(|g| self.percent(g, source.close_price));
        let status = if gain_percent.is_some() {
            OutcomeStatus::Computed
        } else {
            warn!(
                source_date = %source.trade_date,
                source_close = %source.close_price,
                matched_close = %matched.close_price,
                horizon = %horizon,
                "Percent gain overflowed"
            );
            OutcomeStatus::PercentOverflow
        };

        ReturnOutcome {
            horizon,
            status,
            target_date: horizon_match.target_date,
            matched_date: Some(matched.trade_date),
            close_price: Some(matched.close_price),
            gain_dollars,
            gain_percent,
        }
    }

    /// Outcome for `source`, searching only when the bound allows it.
    #[must_use]
    pub fn evaluate(
        &self,
        source: &AnnotatedRecord,
        horizon: Horizon,
        bounds: &SeriesBounds,
        matcher: &ForwardDateMatcher<'_>,
    ) -> ReturnOutcome {
        if !bounds.allows(source.trade_date, horizon) {
            return ReturnOutcome::beyond_bound(horizon);
        }
        self.calculate(source, bounds, &matcher.find(source.trade_date, horizon))
    }

    /// `None` when the quotient exceeds the `Decimal` range.
    fn percent(&self, gain: Decimal, base: Decimal) -> Option<Decimal> {
        gain.checked_div(base).map(|ratio| {
            ratio.round_dp_with_strategy(self.percent_scale, RoundingStrategy::MidpointAwayFromZero)
        })
    }
}
