//! Summary statistics over a list of numbers.
//!
//! Every function rejects an empty input instead of returning a sentinel.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    #[error("At least one number is required.")]
    EmptyInput,

    #[error("Numbers must be finite, got {0}.")]
    NonFiniteValue(f64),

    #[error("Count must be at least 1.")]
    ZeroCount,

    #[error("Quantile must be between 0 and 100, got {0}.")]
    QuantileOutOfRange(f64),
}

/// The `n` smallest values, ascending.
pub fn smallest_n(values: &[f64], n: usize) -> Result<Vec<f64>, StatsError> {
    check_count(n)?;
    let sorted = sorted_copy(values)?;
    let take = n.min(sorted.len());
    Ok(sorted[..take].to_vec())
}

/// The `n` largest values, ascending.
pub fn largest_n(values: &[f64], n: usize) -> Result<Vec<f64>, StatsError> {
    check_count(n)?;
    let sorted = sorted_copy(values)?;
    let skip = sorted.len().saturating_sub(n);
    Ok(sorted[skip..].to_vec())
}

pub fn average(values: &[f64]) -> Result<f64, StatsError> {
    check_values(values)?;
    let len = values.len() as f64;

    let sum = values.iter().sum::<f64>();
    if sum.is_finite() {
        return Ok(sum / len);
    }

    // The plain sum overflowed; scaling each term first keeps it in range.
    Ok(values.iter().map(|value| value / len).sum())
}

/// Middle value; the mean of the two middle values for an even count.
pub fn median(values: &[f64]) -> Result<f64, StatsError> {
    let sorted = sorted_copy(values)?;
    let mid = sorted.len() / 2;

    if sorted.len() % 2 == 0 {
        Ok(sorted[mid - 1] / 2.0 + sorted[mid] / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Nearest-rank percentile: always one of the input values.
///
/// Picks the element at 1-based rank `ceil(q / 100 * N)` of the ascending
/// sort, clamped to `[1, N]`.
pub fn percentile(values: &[f64], q: f64) -> Result<f64, StatsError> {
    if !(0.0..=100.0).contains(&q) {
        return Err(StatsError::QuantileOutOfRange(q));
    }

    let sorted = sorted_copy(values)?;
    let len = sorted.len();

    let rank = nearest_rank(q, len).clamp(1, len);

    Ok(sorted[rank - 1])
}

/// Relative distance within which `q * N / 100` counts as a whole rank.
const RANK_EPSILON: f64 = 1e-12;

fn nearest_rank(q: f64, len: usize) -> usize {
    let exact = q * len as f64 / 100.0;
    let whole = exact.round();

    // Fractional quantiles like 64.4 carry rounding error that can lift an
    // integral rank just past the integer, which `ceil` would bump by one.
    if (exact - whole).abs() <= RANK_EPSILON * whole.max(1.0) {
        return whole as usize;
    }

    exact.ceil() as usize
}

fn check_count(n: usize) -> Result<(), StatsError> {
    if n == 0 {
        return Err(StatsError::ZeroCount);
    }

    Ok(())
}

fn check_values(values: &[f64]) -> Result<(), StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    if let Some(bad) = values.iter().find(|value| !value.is_finite()) {
        return Err(StatsError::NonFiniteValue(*bad));
    }

    Ok(())
}

fn sorted_copy(values: &[f64]) -> Result<Vec<f64>, StatsError> {
    check_values(values)?;
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}
