//! Elementwise aggregation of aligned series.
//!
//! Every operation here insists on equal lengths. Zipping mismatched series
//! would silently drop the tail of the longer one, so a mismatch is reported
//! as [`Error::LengthMismatch`] instead.

use crate::errors::{Error, Result};

/// Check that `series` has exactly one sample per axis point.
pub fn ensure_aligned(axis: &[f64], series: &[f64]) -> Result<()> {
    if axis.len() == series.len() {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            expected: axis.len(),
            found: series.len(),
        })
    }
}

/// Per-index arithmetic mean of `inputs`.
pub fn elementwise_average(inputs: &[&[f64]]) -> Result<Vec<f64>> {
    let (first, rest) = inputs.split_first().ok_or(Error::NoSeries)?;
    for series in rest {
        ensure_aligned(first, series)?;
    }

    Ok((0..first.len())
        .map(|i| running_mean(inputs.iter().map(|s| s[i])))
        .collect())
}

/// Per-index `numerator[i] / denominator[i]`.
pub fn elementwise_ratio(numerator: &[f64], denominator: &[f64]) -> Result<Vec<f64>> {
    ensure_aligned(numerator, denominator)?;
    numerator
        .iter()
        .zip(denominator)
        .enumerate()
        .map(|(index, (n, d))| {
            if *d == 0.0 {
                Err(Error::DivisionByZero { index })
            } else {
                Ok(n / d)
            }
        })
        .collect()
}

/// Arithmetic mean of all samples.
pub fn scalar_mean(series: &[f64]) -> Result<f64> {
    if series.is_empty() {
        return Err(Error::NoSeries);
    }
    Ok(running_mean(series.iter().copied()))
}

/// Incremental mean; a constant input yields that constant exactly.
fn running_mean(samples: impl Iterator<Item = f64>) -> f64 {
    let mut mean = 0.0;
    for (k, x) in samples.enumerate() {
        mean += (x - mean) / (k + 1) as f64;
    }
    mean
}
