//! The seam between the numeric pipeline and on-disk trajectory data.

use std::path::{Path, PathBuf};

use mda_core::errors::MdaError;
use mda_core::TrajectoryKey;
use mda_series::{load_series, LoadOptions};

/// Supplies raw sample series for trajectories.
///
/// The pipeline only consumes ordered numeric sequences; where they come
/// from (files, archives, synthetic fixtures) is the provider's concern.
pub trait SeriesProvider {
    /// The squared-displacement series of one element, baseline-normalised
    /// and scaled by the element's atom count.
    fn displacement_series(
        &self,
        key: &TrajectoryKey,
        element: &str,
        scale: f64,
    ) -> Result<Vec<f64>, MdaError>;

    /// The raw potential-energy series of one trajectory.
    fn energy_series(&self, key: &TrajectoryKey) -> Result<Vec<f64>, MdaError>;
}

/// Reads series from the observed on-disk layout:
/// `<root>/<system>/<index>_msd_<element>_<runtime>ps_<temperature>.txt`
/// and `<root>/<system>/<index>_pe_<runtime>ps_<temperature>.txt`.
#[derive(Debug, Clone)]
pub struct FileSeriesProvider {
    root: PathBuf,
}

/// Formats a runtime or temperature the way the simulation side names
/// files: integral values without a decimal point.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

impl FileSeriesProvider {
    /// Creates a provider rooted at the data directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data directory this provider reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of one element's displacement file.
    pub fn displacement_path(&self, key: &TrajectoryKey, element: &str) -> PathBuf {
        self.root.join(&key.system).join(format!(
            "{}_msd_{}_{}ps_{}.txt",
            key.index,
            element,
            format_quantity(key.runtime),
            format_quantity(key.temperature),
        ))
    }

    /// Path of one trajectory's potential-energy file.
    pub fn energy_path(&self, key: &TrajectoryKey) -> PathBuf {
        self.root.join(&key.system).join(format!(
            "{}_pe_{}ps_{}.txt",
            key.index,
            format_quantity(key.runtime),
            format_quantity(key.temperature),
        ))
    }
}

impl SeriesProvider for FileSeriesProvider {
    fn displacement_series(
        &self,
        key: &TrajectoryKey,
        element: &str,
        scale: f64,
    ) -> Result<Vec<f64>, MdaError> {
        let path = self.displacement_path(key, element);
        load_series(&path, &LoadOptions::displacement().with_scale(scale))
    }

    fn energy_series(&self, key: &TrajectoryKey) -> Result<Vec<f64>, MdaError> {
        let path = self.energy_path(key);
        load_series(&path, &LoadOptions::energy())
    }
}
