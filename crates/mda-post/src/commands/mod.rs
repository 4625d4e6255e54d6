pub mod arrhenius;
pub mod contributions;
pub mod convergence;
pub mod doctor;
pub mod energy;
pub mod expected;
pub mod sd;

use std::error::Error;
use std::fs;
use std::path::Path;

use mda_core::AnalysisConfig;

/// Loads and validates the YAML run configuration.
pub(crate) fn load_config(path: &Path) -> Result<AnalysisConfig, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let config: AnalysisConfig = serde_yaml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}
