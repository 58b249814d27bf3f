// standard library
use std::path::{Path, PathBuf};

// crate modules
use crate::error::{Error, Result};
use crate::transmission::{areal_density, compute_transmission, TransmissionCurve};

// ntrans modules
use ntrans_utils::ValueExt;
use ntrans_xs::{read_xs_file, CrossSectionSeries};

// external crates
use log::info;
use serde::{Deserialize, Serialize};

/// Physical description of an isotope sample, without cross-section data
///
/// This is the raw descriptor built from configuration. Nothing is validated
/// here, units in particular are only checked when a transmission is
/// calculated.
///
/// Cross-section data are attached by the explicit [Isotope::load()] step,
/// which gives a [LoadedIsotope]. Transmission can only be calculated for the
/// loaded form.
///
/// ```rust, no_run
/// # use ntrans_transmission::{Isotope, LoadedIsotope};
/// let isotope = Isotope {
///     name: "U-235".to_string(),
///     atomic_mass: 235.0439,
///     thickness: 0.5,
///     thickness_unit: "mm".to_string(),
///     density: 19.1,
///     xs_file_location: "path/to/xs.dat".into(),
///     ..Default::default()
/// };
///
/// let loaded: LoadedIsotope = isotope.load().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Isotope {
    /// Display name, also the key used to find the block in the data file
    pub name: String,
    /// Atomic mass (g/mol)
    pub atomic_mass: f64,
    /// Sample thickness in `thickness_unit`
    pub thickness: f64,
    /// One of `cm`, `mm`, `atoms/cm2`
    pub thickness_unit: String,
    /// Fractional abundance, informational only
    pub abundance: f64,
    /// Path to the cross-section file
    pub xs_file_location: PathBuf,
    /// Sample density in `density_unit`
    pub density: f64,
    /// Must be `g/cm3` for transmission
    pub density_unit: String,
}

impl Default for Isotope {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            atomic_mass: 0.0,
            thickness: 0.0,
            thickness_unit: "atoms/cm2".to_string(),
            abundance: 0.0,
            xs_file_location: PathBuf::from("Unknown"),
            density: 0.0,
            density_unit: "g/cm3".to_string(),
        }
    }
}

impl Isotope {
    /// Read the cross-section data for this isotope
    ///
    /// The block is found in `xs_file_location` by the isotope `name`. A file
    /// that mentions the name but contains no data points is an
    /// [EmptyCrossSection](Error::EmptyCrossSection) error.
    pub fn load(self) -> Result<LoadedIsotope> {
        let series = read_xs_file(&self.xs_file_location, &self.name)?;
        let loaded = self.with_cross_section(series)?;
        info!(
            "Loaded {} cross-section points for {}",
            loaded.cross_section().len(),
            loaded.name()
        );
        Ok(loaded)
    }

    /// Attach an already parsed cross-section series
    ///
    /// ```rust
    /// # use ntrans_transmission::Isotope;
    /// # use ntrans_xs::CrossSectionSeries;
    /// let series = CrossSectionSeries::from(vec![(1.0e6, 1.0)]);
    /// let loaded = Isotope::default().with_cross_section(series).unwrap();
    /// assert_eq!(loaded.cross_section().len(), 1);
    ///
    /// // empty data is never accepted
    /// assert!(Isotope::default().with_cross_section(Default::default()).is_err());
    /// ```
    pub fn with_cross_section(self, series: CrossSectionSeries) -> Result<LoadedIsotope> {
        if series.is_empty() {
            return Err(Error::EmptyCrossSection {
                isotope: self.name,
                path: self.xs_file_location,
            });
        }

        Ok(LoadedIsotope {
            isotope: self,
            series,
        })
    }
}

impl std::fmt::Display for Isotope {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(fmt, "Isotope {}", self.name)?;
        writeln!(fmt, "  Atomic mass {} g/mol", self.atomic_mass)?;
        writeln!(fmt, "  Thickness   {} {}", self.thickness, self.thickness_unit)?;
        writeln!(fmt, "  Density     {} {}", self.density, self.density_unit)?;
        writeln!(fmt, "  Abundance   {}", self.abundance)?;
        write!(fmt, "  XS file     {}", self.xs_file_location.display())
    }
}

/// An [Isotope] together with its cross-section data
///
/// Only made by [Isotope::load()] or [Isotope::with_cross_section()], so the
/// series is never empty. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedIsotope {
    isotope: Isotope,
    series: CrossSectionSeries,
}

impl LoadedIsotope {
    /// Physical description of the sample
    pub fn isotope(&self) -> &Isotope {
        &self.isotope
    }

    /// Isotope name
    pub fn name(&self) -> &str {
        &self.isotope.name
    }

    /// Path the cross-section data came from
    pub fn xs_file_location(&self) -> &Path {
        &self.isotope.xs_file_location
    }

    /// Tabulated cross-section data, energies in eV
    pub fn cross_section(&self) -> &CrossSectionSeries {
        &self.series
    }

    /// Atoms per barn-cm for the sample, see [areal_density()]
    pub fn areal_density(&self) -> Result<f64> {
        areal_density(self)
    }

    /// Transmission at every energy (eV) in the grid, see [compute_transmission()]
    pub fn transmission(&self, energy_grid: &[f64]) -> Result<TransmissionCurve> {
        compute_transmission(energy_grid, self)
    }
}

impl std::fmt::Display for LoadedIsotope {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(fmt, "{}", self.isotope)?;
        write!(fmt, "  XS points   {}", self.series.len())?;
        if let Some((lo, hi)) = self.series.energy_range() {
            write!(fmt, " ({} - {} eV)", lo.sci(3, 2), hi.sci(3, 2))?;
        }
        Ok(())
    }
}
