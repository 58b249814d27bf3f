//! Transmission of a beam through isotopic samples
//!
//! The transmitted fraction through a sample of thickness `t` (cm), density
//! `rho` (g/cm3) and atomic mass `M` (g/mol) follows the usual attenuation
//! law
//!
//! ```text
//! T(E) = exp(-xs(E) * A)        A = t * rho * N_A / M / 1e24
//! ```
//!
//! where `xs(E)` is the cross-section in barns interpolated lin-lin from
//! tabulated data read by [ntrans_xs], and `A` is the areal density in atoms
//! per barn-cm.
//!
//! ## Quickstart
//!
//! Isotopes are usually described in a configuration file, resolved against
//! an atomic mass source, and loaded with their cross-section data before any
//! transmission is calculated.
//!
//! ```rust, no_run
//! # use ntrans_transmission::*;
//! let configs = read_config("path/to/config.ini").unwrap();
//! let masses = MassTable::from_json_file("path/to/masses.json").unwrap();
//!
//! // Load every isotope in parallel
//! let isotopes = load_isotopes(&configs, &masses).unwrap();
//!
//! // 1000 log spaced energies from 1 eV to 10 keV
//! let grid = log_grid(1.0, 1.0e4, 1000).unwrap();
//! let curves = transmission_curves(&isotopes, &grid).unwrap();
//!
//! for curve in curves {
//!     println!("{curve}");
//! }
//! ```
//!
//! Single isotopes can be built directly.
//!
//! ```rust, no_run
//! # use ntrans_transmission::*;
//! let isotope = Isotope {
//!     name: "Ta-181".to_string(),
//!     atomic_mass: 180.948,
//!     thickness: 0.1,
//!     thickness_unit: "mm".to_string(),
//!     density: 16.69,
//!     xs_file_location: "path/to/xs.dat".into(),
//!     ..Default::default()
//! }
//! .load()
//! .unwrap();
//!
//! let curve = compute_transmission(&[1.0, 10.0, 100.0], &isotope).unwrap();
//! ```
//!
//! ## Units
//!
//! | Quantity  | Accepted                   | Notes                           |
//! | --------- | -------------------------- | ------------------------------- |
//! | thickness | `cm`, `mm`                 | `atoms/cm2` parses, but is rejected for transmission |
//! | density   | `g/cm3`                    |                                 |
//! | energy    | eV                         | data files are MeV, converted on read |
//! | xs        | barns                      |                                 |
//!
//! Unit strings are case sensitive and only checked when a transmission is
//! calculated.

// Split into subfiles for development, but anything important is re-exported
mod batch;
mod config;
mod error;
mod grid;
mod interpolation;
mod isotope;
mod mass;
mod parsers;
mod transmission;
mod units;

// Inline anything important for a nice public API
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use isotope::{Isotope, LoadedIsotope};

#[doc(inline)]
pub use transmission::{
    areal_density, compute_transmission, TransmissionCurve, AVOGADRO, CM2_TO_BARN,
};

#[doc(inline)]
pub use interpolation::LinearInterpolant;

#[doc(inline)]
pub use units::{DensityUnit, ThicknessUnit};

#[doc(inline)]
pub use mass::{AtomicMass, MassTable};

#[doc(inline)]
pub use config::{
    parse_config_ini, read_config, read_config_ini, read_config_json, IsotopeConfig,
};

#[doc(inline)]
pub use grid::{linear_grid, log_grid};

#[doc(inline)]
pub use batch::{load_isotopes, transmission_curves};
