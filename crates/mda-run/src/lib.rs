#![deny(missing_docs)]
#![doc = "Batch orchestration, reports, and exports for the MDA diffusion pipeline."]

pub mod convergence;
pub mod energy;
pub mod export;
pub mod hash;
pub mod manifest;
pub mod provider;
pub mod report;
pub mod runner;

pub use convergence::convergence_table;
pub use energy::energy_drift;
pub use manifest::{RunManifest, SystemOutcome};
pub use provider::{FileSeriesProvider, SeriesProvider};
pub use report::{
    ContributionSummary, ConvergencePoint, ConvergenceReport, EnergyDriftPoint, EnergyDriftReport,
    RunReport, SystemReport, TemperatureEstimate, TrajectoryFailure, TrajectoryReport,
};
pub use runner::{analyze_run, analyze_system, PipelineOptions};
