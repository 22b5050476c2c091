//! Observation transforms
//!
//! All functions take observations ordered newest first.

use crate::fred::Observation;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Maximum number of points in a chart series
pub const CHART_POINTS: usize = 12;

/// Latest value, or zero when there is none
pub fn latest_price(newest_first: &[Observation]) -> Decimal {
    newest_first
        .first()
        .map(|o| o.value)
        .unwrap_or(Decimal::ZERO)
}

/// Percent change from the previous observation to the latest one
///
/// Rounded to 2 decimal places. Zero when fewer than two observations
/// exist or the previous value is zero.
pub fn percent_change(newest_first: &[Observation]) -> Decimal {
    let [latest, previous, ..] = newest_first else {
        return Decimal::ZERO;
    };
    if previous.value.is_zero() {
        return Decimal::ZERO;
    }

    latest
        .value
        .checked_sub(previous.value)
        .and_then(|delta| delta.checked_div(previous.value))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|pct| pct.round_dp(2))
        .unwrap_or(Decimal::ZERO)
}

/// The most recent `CHART_POINTS` values, oldest to newest
pub fn chart_series(newest_first: &[Observation]) -> Vec<f64> {
    newest_first
        .iter()
        .take(CHART_POINTS)
        .rev()
        .map(|o| o.value.to_f64().unwrap_or_default())
        .collect()
}
