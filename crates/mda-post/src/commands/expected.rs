use std::error::Error;

use clap::Args;
use mda_arrhenius::ArrheniusFit;
use mda_core::BOLTZMANN_EV;

#[derive(Args, Debug)]
pub struct ExpectedArgs {
    /// Known pre-exponential factor D0 in Å²/ps.
    #[arg(long)]
    pub d0: f64,
    /// Known activation energy in eV.
    #[arg(long)]
    pub ea: f64,
    /// Temperatures in Kelvin to evaluate.
    #[arg(long, value_delimiter = ',', required = true)]
    pub temperatures: Vec<f64>,
    /// Boltzmann constant in eV/K.
    #[arg(long, default_value_t = BOLTZMANN_EV)]
    pub boltzmann: f64,
}

/// Evaluates D(T) = D0 exp(-Ea / kT) for known Arrhenius parameters, the
/// quick sanity check before committing to a long simulation campaign.
pub fn run(args: &ExpectedArgs) -> Result<(), Box<dyn Error>> {
    if args.d0 <= 0.0 {
        return Err("D0 must be positive".into());
    }
    let fit = ArrheniusFit {
        activation_energy: args.ea,
        ln_prefactor: args.d0.ln(),
    };
    for &temperature in &args.temperatures {
        if temperature <= 0.0 {
            return Err(format!("temperature {temperature} K is not positive").into());
        }
        let expected = fit.expected_diffusion(temperature, args.boltzmann);
        println!(
            "T = {temperature} K: expected diffusion coefficient {expected:.6e} Angst.^2 ps^-1"
        );
    }
    Ok(())
}
