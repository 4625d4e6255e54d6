#![deny(missing_docs)]
#![doc = "Time-series loading and per-element displacement aggregation for the MDA pipeline."]

mod aggregate;
pub mod loader;
mod series;

pub use aggregate::{ElementContribution, TrajectoryData};
pub use loader::{accumulate_squared_displacements, load_series, read_series, LoadOptions};
pub use series::SampleSeries;
