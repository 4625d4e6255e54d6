//! Run manifests for reproducibility.

use std::fs;
use std::path::Path;

use chrono::Utc;
use mda_core::errors::{ErrorInfo, MdaError};
use mda_core::AnalysisConfig;
use serde::{Deserialize, Serialize};

use crate::hash::stable_hash_string;
use crate::report::RunReport;

/// Per-system outcome counters recorded in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemOutcome {
    /// System name.
    pub name: String,
    /// Trajectories that produced estimates.
    pub processed: usize,
    /// Trajectories excluded by failures.
    pub failed: usize,
    /// Displacement fits whose slope was floored.
    pub clamped_fits: usize,
}

/// Structured manifest describing a completed analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    /// RFC 3339 timestamp of manifest creation.
    pub created_at: String,
    /// Canonical hash of the configuration.
    pub config_hash: String,
    /// Configuration used for the run.
    pub config: AnalysisConfig,
    /// Outcome counters, one per system.
    pub systems: Vec<SystemOutcome>,
}

impl RunManifest {
    /// Builds a manifest from the configuration and the finished report.
    pub fn new(config: &AnalysisConfig, report: &RunReport) -> Result<Self, MdaError> {
        let systems = report
            .systems
            .iter()
            .map(|system| SystemOutcome {
                name: system.system.clone(),
                processed: system.trajectories.len(),
                failed: system.failures.len(),
                clamped_fits: system.clamped_fits,
            })
            .collect();
        Ok(Self {
            created_at: Utc::now().to_rfc3339(),
            config_hash: stable_hash_string(config)?,
            config: config.clone(),
            systems,
        })
    }

    /// Writes the manifest to a JSON file.
    pub fn write(&self, path: &Path) -> Result<(), MdaError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                MdaError::Io(
                    ErrorInfo::new("manifest-mkdir", err.to_string())
                        .with_context("path", parent.display().to_string()),
                )
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            MdaError::Io(
                ErrorInfo::new("manifest-serialize", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        fs::write(path, json).map_err(|err| {
            MdaError::Io(
                ErrorInfo::new("manifest-write", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Loads a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, MdaError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            MdaError::Io(
                ErrorInfo::new("manifest-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            MdaError::Io(
                ErrorInfo::new("manifest-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}
