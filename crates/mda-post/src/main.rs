use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    arrhenius::{self, ArrheniusArgs},
    contributions::{self, ContributionsArgs},
    convergence::{self, ConvergenceArgs},
    doctor::{self, DoctorArgs},
    energy::{self, EnergyArgs},
    expected::{self, ExpectedArgs},
    sd::{self, SdArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "mda-post", about = "MD displacement post-processing CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate diffusion coefficients and Arrhenius parameters per system.
    Arrhenius(ArrheniusArgs),
    /// Summarise per-element displacement contributions.
    Contributions(ContributionsArgs),
    /// Tabulate diffusion convergence against runtime.
    Convergence(ConvergenceArgs),
    /// Fit potential-energy drift per trajectory.
    Energy(EnergyArgs),
    /// Predict diffusion from known Arrhenius parameters.
    Expected(ExpectedArgs),
    /// Fit one trajectory's cumulative squared displacement from raw rows.
    Sd(SdArgs),
    /// Check that the data directory matches the configuration.
    Doctor(DoctorArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Arrhenius(args) => arrhenius::run(&args),
        Command::Contributions(args) => contributions::run(&args),
        Command::Convergence(args) => convergence::run(&args),
        Command::Energy(args) => energy::run(&args),
        Command::Expected(args) => expected::run(&args),
        Command::Sd(args) => sd::run(&args),
        Command::Doctor(args) => doctor::run(&args),
    }
}
