//! Closed-form ordinary least squares.

use mda_core::errors::{ErrorInfo, MdaError};
use serde::{Deserialize, Serialize};

/// Intercept and slope of a linear regression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Value of the fitted line at x = 0.
    pub intercept: f64,
    /// Slope of the fitted line.
    pub slope: f64,
}

impl FitResult {
    /// Evaluates the fitted line at the given abscissa.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

fn degenerate(code: &str, message: &str, n: usize) -> MdaError {
    MdaError::DegenerateInput(
        ErrorInfo::new(code, message).with_context("samples", n.to_string()),
    )
}

/// Fits `y = intercept + slope * x` by minimising the sum of squared
/// residuals.
///
/// Uses the closed form slope = Cov(x, y) / Var(x) and
/// intercept = mean(y) - slope * mean(x). Fails with
/// [`MdaError::DegenerateInput`] when fewer than two samples are supplied,
/// the lengths differ, or the independent variable is constant.
pub fn fit(x: &[f64], y: &[f64]) -> Result<FitResult, MdaError> {
    if x.len() != y.len() {
        return Err(MdaError::DegenerateInput(
            ErrorInfo::new("length-mismatch", "x and y must have equal length")
                .with_context("x_len", x.len().to_string())
                .with_context("y_len", y.len().to_string()),
        ));
    }
    let n = x.len();
    if n < 2 {
        return Err(degenerate(
            "too-few-samples",
            "a linear fit needs at least two samples",
            n,
        ));
    }

    let inv_n = 1.0 / n as f64;
    let mean_x = x.iter().sum::<f64>() * inv_n;
    let mean_y = y.iter().sum::<f64>() * inv_n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        sxx += dx * dx;
        sxy += dx * (yi - mean_y);
    }

    if sxx == 0.0 {
        return Err(degenerate(
            "constant-x",
            "the independent variable is constant",
            n,
        ));
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    Ok(FitResult { intercept, slope })
}

/// Fits a series against its own step index 0..N-1.
///
/// This is the common case for per-picosecond samples, where the step index
/// doubles as elapsed time.
pub fn fit_indexed(y: &[f64]) -> Result<FitResult, MdaError> {
    let x: Vec<f64> = (0..y.len()).map(|idx| idx as f64).collect();
    fit(&x, y)
}
