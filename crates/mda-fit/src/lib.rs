#![deny(missing_docs)]
#![doc = "Ordinary least squares fitting and summary statistics for the MDA pipeline."]

mod ols;
mod stats;

pub use ols::{fit, fit_indexed, FitResult};
pub use stats::{mean, summarize, SummaryStats};
