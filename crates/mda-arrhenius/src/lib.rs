#![deny(missing_docs)]
#![doc = "Einstein-relation diffusion estimates and Arrhenius regression for the MDA pipeline."]

mod arrhenius;
mod diffusion;

pub use arrhenius::{
    fit_arrhenius, fit_averaged_curve, fit_per_trajectory, inverse_kt, ArrheniusFit,
    AveragedArrhenius, PerTrajectoryArrhenius,
};
pub use diffusion::{diffusion_from_slope, DiffusionEstimate};
