//! Forward projection of a series from a per-period rate schedule.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{DeckError, DeckResult};

/// Projects forward values by compounding `last_value` through
/// `rate_schedule`.
///
/// Each rate is a percentage change for one period, applied in order:
/// `next = round(previous * (1 + rate / 100))`, and the rounded value is
/// carried into the following period so projected values stay on the same
/// integer grid as the source data. Rounding is round-half-to-even
/// (`f64::round_ties_even`).
///
/// An empty schedule yields an empty projection. The function is
/// deterministic and side-effect free.
#[must_use]
pub fn project(last_value: f64, rate_schedule: &[f64]) -> Vec<f64> {
    let mut projected = Vec::with_capacity(rate_schedule.len());
    let mut carry = last_value;
    for rate in rate_schedule {
        carry = (carry * (1.0 + rate / 100.0)).round_ties_even();
        projected.push(carry);
    }
    projected
}

/// [`project`] with an exact decimal rate schedule, converted to `f64`
/// at this boundary.
pub fn project_decimal_rates(last_value: f64, rate_schedule: &[Decimal]) -> DeckResult<Vec<f64>> {
    let rates = rate_schedule
        .iter()
        .map(|rate| decimal_to_f64(*rate, "rate_schedule"))
        .collect::<DeckResult<Vec<f64>>>()?;
    Ok(project(last_value, &rates))
}

pub(crate) fn decimal_to_f64(value: Decimal, field_name: &str) -> DeckResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| DeckError::InvalidData(format!("{field_name} cannot be represented as f64")))
}
