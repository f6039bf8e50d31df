//! Transforms over cumulative per-day series.
//!
//! All functions accept empty input (an unknown country upstream) and never
//! index past the end of a series.

use crate::error::StatsError;

/// Drops everything before the first non-zero entry. All-zero input yields
/// an empty series.
pub fn from_first_event(series: &[i64]) -> Vec<i64> {
    series
        .iter()
        .position(|&v| v != 0)
        .map(|start| series[start..].to_vec())
        .unwrap_or_default()
}

/// `s[i] - s[i-1]` for i > 0, saturating at the `i64` bounds; the first
/// element is kept as-is.
pub fn per_day(series: &[i64]) -> Vec<i64> {
    if series.len() < 2 {
        return series.to_vec();
    }
    std::iter::once(series[0])
        .chain(series.windows(2).map(|w| w[1].saturating_sub(w[0])))
        .collect()
}

/// Day-over-day growth in percent, `(s[i] - s[i-1]) * 100 / s[i-1]`,
/// truncated toward zero.
///
/// Computed from the first non-zero entry on, since earlier days have no
/// base to grow from; the result has one entry per day after that first
/// event. A zero base later on (an upstream correction back to 0) is an
/// `ArithmeticDomain` error.
pub fn percent_per_day(series: &[i64]) -> Result<Vec<i64>, StatsError> {
    let trimmed = from_first_event(series);
    trimmed
        .windows(2)
        .enumerate()
        .map(|(day, w)| {
            let (previous, current) = (w[0], w[1]);
            if previous == 0 {
                return Err(StatsError::ArithmeticDomain(format!(
                    "zero base on day {} after first event",
                    day
                )));
            }
            current
                .checked_sub(previous)
                .and_then(|delta| delta.checked_mul(100))
                .map(|scaled| scaled / previous)
                .ok_or_else(|| StatsError::ArithmeticDomain("percentage overflows".to_string()))
        })
        .collect()
}
