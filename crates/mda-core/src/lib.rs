#![deny(missing_docs)]
#![doc = "Core error, identifier, and configuration types for the MDA diffusion pipeline."]

pub mod config;
pub mod errors;
mod types;

pub use config::{AnalysisConfig, SystemConfig, BOLTZMANN_EV, DEFAULT_SLOPE_FLOOR};
pub use errors::{ErrorInfo, MdaError};
pub use types::TrajectoryKey;
