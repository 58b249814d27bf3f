//! Parallel helpers for a whole stack of isotopes
//!
//! Every isotope is independent, so loading cross-sections and calculating
//! curves are spread over the rayon thread pool. Results always come back in
//! the order of the input, and the first failure aborts the batch.

// crate modules
use crate::config::IsotopeConfig;
use crate::error::Result;
use crate::isotope::LoadedIsotope;
use crate::mass::AtomicMass;
use crate::transmission::{compute_transmission, TransmissionCurve};

// external crates
use log::info;
use rayon::prelude::*;

/// Resolve and load cross-sections for every configured isotope
///
/// ```rust, no_run
/// # use ntrans_transmission::{load_isotopes, read_config, MassTable};
/// let configs = read_config("path/to/config.ini").unwrap();
/// let masses = MassTable::from_json_file("path/to/masses.json").unwrap();
/// let isotopes = load_isotopes(&configs, &masses).unwrap();
/// ```
pub fn load_isotopes<M>(configs: &[IsotopeConfig], masses: &M) -> Result<Vec<LoadedIsotope>>
where
    M: AtomicMass + Sync + ?Sized,
{
    info!("Loading cross-sections for {} isotopes", configs.len());
    configs
        .par_iter()
        .map(|config| config.resolve(masses)?.load())
        .collect()
}

/// Transmission curves for every isotope on the same energy grid
pub fn transmission_curves(
    isotopes: &[LoadedIsotope],
    energy_grid: &[f64],
) -> Result<Vec<TransmissionCurve>> {
    info!(
        "Calculating transmission for {} isotopes at {} energies",
        isotopes.len(),
        energy_grid.len()
    );
    isotopes
        .par_iter()
        .map(|isotope| compute_transmission(energy_grid, isotope))
        .collect()
}
