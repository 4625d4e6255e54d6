//! Per-element displacement aggregation.

use indexmap::IndexMap;
use mda_core::errors::{ErrorInfo, MdaError};
use serde::{Deserialize, Serialize};

use crate::series::SampleSeries;

/// Share of the final total displacement contributed by one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementContribution {
    /// Element tag.
    pub element: String,
    /// Percentage of the final total displacement, or `None` when the final
    /// total is zero and the share is undefined.
    pub percent: Option<f64>,
}

/// Per-element sample series of one trajectory plus their derived total.
///
/// Immutable once built; the element order is the configured reporting
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryData {
    elements: IndexMap<String, SampleSeries>,
    total: SampleSeries,
}

impl TrajectoryData {
    /// Builds the trajectory from its per-element series and derives the
    /// total series `total[t] = sum over elements of series_e[t]`.
    ///
    /// Fails with [`MdaError::ShapeMismatch`] when the element series
    /// lengths differ or no usable series is supplied.
    pub fn from_elements(elements: IndexMap<String, SampleSeries>) -> Result<Self, MdaError> {
        let Some(first) = elements.values().next() else {
            return Err(MdaError::ShapeMismatch(ErrorInfo::new(
                "no-element-series",
                "a trajectory needs at least one element series",
            )));
        };
        let len = first.len();
        if len == 0 {
            return Err(MdaError::ShapeMismatch(ErrorInfo::new(
                "empty-element-series",
                "element series must not be empty",
            )));
        }
        for (element, series) in &elements {
            if series.len() != len {
                return Err(MdaError::ShapeMismatch(
                    ErrorInfo::new("unequal-series", "element series differ in length")
                        .with_context("element", element.clone())
                        .with_context("expected", len.to_string())
                        .with_context("actual", series.len().to_string()),
                ));
            }
        }

        let mut sums = vec![0.0; len];
        for series in elements.values() {
            for (slot, value) in sums.iter_mut().zip(series.values()) {
                *slot += value;
            }
        }

        // The total inherits an explicit time axis only when every element
        // agrees on it.
        let shared_times = first.times().filter(|times| {
            elements
                .values()
                .all(|series| series.times() == Some(*times))
        });
        let total = match shared_times {
            Some(times) => SampleSeries::with_times(sums, times.to_vec())?,
            None => SampleSeries::from_values(sums),
        };

        Ok(Self { elements, total })
    }

    /// The per-element series in reporting order.
    pub fn elements(&self) -> &IndexMap<String, SampleSeries> {
        &self.elements
    }

    /// One element's series.
    pub fn element(&self, element: &str) -> Option<&SampleSeries> {
        self.elements.get(element)
    }

    /// The derived total series.
    pub fn total(&self) -> &SampleSeries {
        &self.total
    }

    /// Percentage contribution of each element to the final total
    /// displacement, in reporting order.
    ///
    /// Shares are undefined (reported as `None`) when the final total is
    /// zero.
    pub fn contributions(&self) -> Vec<ElementContribution> {
        let total_last = self.total.last().unwrap_or(0.0);
        self.elements
            .iter()
            .map(|(element, series)| {
                let percent = if total_last == 0.0 {
                    None
                } else {
                    series.last().map(|last| last / total_last * 100.0)
                };
                ElementContribution {
                    element: element.clone(),
                    percent,
                }
            })
            .collect()
    }
}
