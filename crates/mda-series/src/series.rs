use mda_core::errors::{ErrorInfo, MdaError};
use serde::{Deserialize, Serialize};

/// An ordered sequence of scalar samples.
///
/// Samples are indexed either by their synthetic step (0..N-1) or by an
/// explicit, strictly increasing time axis in picoseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSeries {
    values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    times: Option<Vec<f64>>,
}

impl SampleSeries {
    /// Wraps step-indexed samples: the index doubles as elapsed time.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            values,
            times: None,
        }
    }

    /// Wraps samples with an explicit time axis.
    ///
    /// Fails with [`MdaError::ShapeMismatch`] when the axis length differs
    /// from the sample count, and with [`MdaError::MalformedInput`] when the
    /// axis is not strictly increasing.
    pub fn with_times(values: Vec<f64>, times: Vec<f64>) -> Result<Self, MdaError> {
        if values.len() != times.len() {
            return Err(MdaError::ShapeMismatch(
                ErrorInfo::new("time-axis-length", "time axis and samples differ in length")
                    .with_context("samples", values.len().to_string())
                    .with_context("times", times.len().to_string()),
            ));
        }
        if times.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(MdaError::MalformedInput(ErrorInfo::new(
                "non-increasing-times",
                "the time axis must be strictly increasing",
            )));
        }
        Ok(Self {
            values,
            times: Some(times),
        })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The recorded samples.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The explicit time axis, when one was supplied.
    pub fn times(&self) -> Option<&[f64]> {
        self.times.as_deref()
    }

    /// The independent variable to regress against: the explicit time axis
    /// when present, the step index otherwise.
    pub fn time_axis(&self) -> Vec<f64> {
        match &self.times {
            Some(times) => times.clone(),
            None => (0..self.values.len()).map(|idx| idx as f64).collect(),
        }
    }

    /// The final sample, if any.
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }
}
