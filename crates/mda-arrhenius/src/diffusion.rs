//! Einstein-relation conversion from displacement slopes to diffusion
//! coefficients.

use serde::{Deserialize, Serialize};

/// A diffusion coefficient derived from a squared-displacement slope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiffusionEstimate {
    /// Diffusion coefficient in Å²/ps.
    pub coefficient: f64,
    /// Slope actually used for the conversion, after any floor substitution.
    pub slope: f64,
    /// Whether a non-positive raw slope was replaced by the floor.
    ///
    /// Downstream Arrhenius fitting takes ln(D), so a non-positive slope can
    /// never be propagated; the substitution is recorded here instead of
    /// happening silently.
    pub clamped: bool,
}

impl DiffusionEstimate {
    /// Natural log of the coefficient, the Arrhenius ordinate.
    pub fn ln_coefficient(&self) -> f64 {
        self.coefficient.ln()
    }
}

/// Converts a squared-displacement-vs-time slope into a diffusion
/// coefficient via `D = slope / (2 * dimensionality)`.
///
/// A slope that is zero or negative is a measurement artifact; it is
/// replaced by `slope_floor` and the estimate is flagged as clamped.
pub fn diffusion_from_slope(
    slope: f64,
    dimensionality: usize,
    slope_floor: f64,
) -> DiffusionEstimate {
    let clamped = slope <= 0.0;
    let effective = if clamped { slope_floor } else { slope };
    DiffusionEstimate {
        coefficient: effective / (2.0 * dimensionality as f64),
        slope: effective,
        clamped,
    }
}
