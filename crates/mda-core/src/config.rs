//! Data-driven run configuration.
//!
//! Per-system element lists, atom counts, temperature sweeps, and runtimes
//! are configuration records rather than code branches, so adding a system
//! never requires touching the pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, MdaError};

/// Boltzmann constant in eV/K.
pub const BOLTZMANN_EV: f64 = 8.6173e-5;

/// Default floor applied to non-physical (non-positive) displacement slopes.
pub const DEFAULT_SLOPE_FLOOR: f64 = 1e-6;

/// YAML-configurable parameters governing an analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Boltzmann constant in eV/K used for the Arrhenius abscissa.
    #[serde(default = "default_boltzmann")]
    pub boltzmann_ev: f64,
    /// Floor substituted for non-positive displacement slopes before the
    /// Einstein conversion. Substitutions are flagged in the reports.
    #[serde(default = "default_slope_floor")]
    pub slope_floor: f64,
    /// Material systems to analyse.
    pub systems: Vec<SystemConfig>,
}

fn default_boltzmann() -> f64 {
    BOLTZMANN_EV
}

fn default_slope_floor() -> f64 {
    DEFAULT_SLOPE_FLOOR
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            boltzmann_ev: default_boltzmann(),
            slope_floor: default_slope_floor(),
            systems: Vec::new(),
        }
    }
}

/// Description of one material system and its simulated conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// System name, also the data subdirectory name.
    pub name: String,
    /// Constituent elements in reporting order.
    pub elements: Vec<String>,
    /// Atom count per constituent element.
    pub atom_counts: BTreeMap<String, usize>,
    /// Spatial dimensionality of the simulation cell.
    #[serde(default = "default_dimensionality")]
    pub dimensionality: usize,
    /// Ordered temperature sweep in Kelvin.
    pub temperatures: Vec<f64>,
    /// Runtimes in picoseconds, ordered from shortest to longest.
    pub runtimes: Vec<f64>,
    /// Number of repeated trajectories (indices 1..=repetitions).
    pub repetitions: usize,
}

fn default_dimensionality() -> usize {
    3
}

impl SystemConfig {
    /// Returns the longest configured runtime.
    ///
    /// Arrhenius parameters are only estimated from the longest runtime;
    /// shorter runtimes feed the convergence diagnostics.
    pub fn longest_runtime(&self) -> Option<f64> {
        self.runtimes.last().copied()
    }

    /// Returns the atom count for an element.
    pub fn atom_count(&self, element: &str) -> Result<usize, MdaError> {
        self.atom_counts.get(element).copied().ok_or_else(|| {
            MdaError::Config(
                ErrorInfo::new("missing-atom-count", "element has no configured atom count")
                    .with_context("system", self.name.clone())
                    .with_context("element", element.to_string()),
            )
        })
    }

    fn validate(&self) -> Result<(), MdaError> {
        let fail = |code: &str, message: &str| {
            Err(MdaError::Config(
                ErrorInfo::new(code, message).with_context("system", self.name.clone()),
            ))
        };
        if self.name.is_empty() {
            return fail("empty-name", "system name must not be empty");
        }
        if self.elements.is_empty() {
            return fail("no-elements", "at least one element is required");
        }
        if self.temperatures.len() < 2 {
            return fail(
                "short-sweep",
                "an Arrhenius fit needs at least two temperatures",
            );
        }
        if self.runtimes.is_empty() {
            return fail("no-runtimes", "at least one runtime is required");
        }
        if self.repetitions == 0 {
            return fail("no-repetitions", "at least one repetition is required");
        }
        if self.dimensionality == 0 {
            return fail("zero-dimensionality", "dimensionality must be positive");
        }
        if self.temperatures.iter().any(|t| *t <= 0.0) {
            return fail("non-positive-temperature", "temperatures must be positive");
        }
        if self.temperatures.windows(2).any(|pair| pair[0] >= pair[1]) {
            return fail(
                "unsorted-temperatures",
                "the temperature sweep must be strictly increasing",
            );
        }
        if self.runtimes.windows(2).any(|pair| pair[0] >= pair[1]) {
            return fail(
                "unsorted-runtimes",
                "runtimes must be strictly increasing (shortest to longest)",
            );
        }
        for element in &self.elements {
            self.atom_count(element)?;
        }
        Ok(())
    }
}

impl AnalysisConfig {
    /// Validates the full configuration, including every system record.
    pub fn validate(&self) -> Result<(), MdaError> {
        if self.boltzmann_ev <= 0.0 {
            return Err(MdaError::Config(ErrorInfo::new(
                "non-positive-boltzmann",
                "the Boltzmann constant must be positive",
            )));
        }
        if self.slope_floor <= 0.0 {
            return Err(MdaError::Config(
                ErrorInfo::new("non-positive-floor", "the slope floor must be positive")
                    .with_hint("the floor replaces non-positive slopes ahead of ln(D)"),
            ));
        }
        if self.systems.is_empty() {
            return Err(MdaError::Config(ErrorInfo::new(
                "no-systems",
                "at least one system must be configured",
            )));
        }
        for system in &self.systems {
            system.validate()?;
        }
        Ok(())
    }
}
