use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Args;
use mda_arrhenius::{diffusion_from_slope, DiffusionEstimate};
use mda_core::DEFAULT_SLOPE_FLOOR;
use mda_fit::{fit, FitResult};
use mda_run::export::write_json;
use mda_series::{accumulate_squared_displacements, load_series, LoadOptions, SampleSeries};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct SdArgs {
    /// Per-atom displacement file: `dx dy dz` rows, one block per step.
    #[arg(long)]
    pub displacements: PathBuf,
    /// Simulation output file holding per-step cumulative times.
    #[arg(long)]
    pub times: PathBuf,
    /// Atoms per step block.
    #[arg(long)]
    pub atoms: usize,
    /// Recorded steps.
    #[arg(long)]
    pub steps: usize,
    /// Header lines to skip in the displacement file.
    #[arg(long, default_value_t = 3)]
    pub skip: usize,
    /// Header lines to skip in the times file.
    #[arg(long, default_value_t = 0)]
    pub times_skip: usize,
    /// Whitespace column of the times file holding cumulative time.
    #[arg(long, default_value_t = 2)]
    pub times_column: usize,
    /// Factor converting recorded times to picoseconds.
    #[arg(long, default_value_t = 1.0e12)]
    pub times_scale: f64,
    /// Spatial dimensionality.
    #[arg(long, default_value_t = 3)]
    pub dimensionality: usize,
    /// Floor substituted for a non-positive fitted slope.
    #[arg(long, default_value_t = DEFAULT_SLOPE_FLOOR)]
    pub slope_floor: f64,
    /// Optional JSON report path.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SdReport {
    fit: FitResult,
    diffusion: DiffusionEstimate,
    steps: usize,
}

/// Builds a cumulative squared-displacement series from raw per-atom rows,
/// fits it against the recorded times, and reports the diffusion
/// coefficient.
pub fn run(args: &SdArgs) -> Result<(), Box<dyn Error>> {
    let file = File::open(&args.displacements)?;
    let sd = accumulate_squared_displacements(
        BufReader::new(file),
        args.atoms,
        args.steps,
        args.skip,
    )?;

    let times_options = LoadOptions {
        skip_lines: args.times_skip,
        subtract_baseline: false,
        scale: args.times_scale,
        column: Some(args.times_column),
    };
    let times = load_series(&args.times, &times_options)?;

    let series = SampleSeries::with_times(sd, times)?;
    let result = fit(&series.time_axis(), series.values())?;
    let diffusion = diffusion_from_slope(result.slope, args.dimensionality, args.slope_floor);

    if diffusion.clamped {
        eprintln!(
            "fitted slope {} is non-physical; floored to {} before conversion",
            result.slope, diffusion.slope
        );
    }
    println!(
        "Diffusion coefficient is {} Angst.^2 ps^-1",
        diffusion.coefficient
    );

    if let Some(out) = &args.out {
        let report = SdReport {
            fit: result,
            diffusion,
            steps: series.len(),
        };
        write_json(&report, out)?;
    }
    Ok(())
}
