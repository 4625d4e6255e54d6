//! Summary statistics across trajectory repetitions.

use mda_core::errors::{ErrorInfo, MdaError};
use serde::{Deserialize, Serialize};

/// Mean and spread of a derived quantity over repeated trajectories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Sample mean.
    pub mean: f64,
    /// Sample standard deviation (Bessel-corrected).
    pub std_dev: f64,
    /// Standard error of the mean.
    pub std_err: f64,
    /// Sample variance (Bessel-corrected).
    pub variance: f64,
    /// Number of samples the statistics were computed over.
    pub count: usize,
}

/// Computes the sample mean.
///
/// Defined for a single sample, unlike the variance-class statistics.
pub fn mean(values: &[f64]) -> Result<f64, MdaError> {
    if values.is_empty() {
        return Err(MdaError::InsufficientSamples(ErrorInfo::new(
            "empty-sample",
            "the mean of an empty sample is undefined",
        )));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Computes mean, standard deviation, standard error, and variance.
///
/// Fails with [`MdaError::InsufficientSamples`] when fewer than two values
/// are supplied, since the Bessel-corrected variance divides by N - 1.
pub fn summarize(values: &[f64]) -> Result<SummaryStats, MdaError> {
    let n = values.len();
    if n < 2 {
        return Err(MdaError::InsufficientSamples(
            ErrorInfo::new(
                "too-few-repetitions",
                "variance-class statistics need at least two samples",
            )
            .with_context("samples", n.to_string()),
        ));
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values
        .iter()
        .map(|value| {
            let delta = value - mean;
            delta * delta
        })
        .sum::<f64>()
        / (n - 1) as f64;
    let std_dev = variance.sqrt();
    let std_err = std_dev / (n as f64).sqrt();
    Ok(SummaryStats {
        mean,
        std_dev,
        std_err,
        variance,
        count: n,
    })
}
