//! Attenuation of a beam through a single isotope sample

// crate modules
use crate::error::{Error, Result};
use crate::interpolation::LinearInterpolant;
use crate::isotope::LoadedIsotope;
use crate::units::{DensityUnit, ThicknessUnit};

// ntrans modules
use ntrans_utils::ValueExt;

// external crates
use log::{trace, warn};
use serde::{Deserialize, Serialize};

/// Avogadro constant (1/mol)
pub const AVOGADRO: f64 = 6.02214076e23;

/// Conversion factor from cm2 to barns
pub const CM2_TO_BARN: f64 = 1e24;

/// Transmitted fraction of the beam against energy
///
/// One `(energy, transmission)` pair per grid point, in the order of the
/// energy grid. Energies are in eV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransmissionCurve {
    /// Name of the isotope the curve was calculated for
    pub isotope: String,
    /// `(energy, transmission)` pairs
    pub points: Vec<(f64, f64)>,
}

impl TransmissionCurve {
    /// Number of points on the curve
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True for a curve calculated on an empty grid
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over `(energy, transmission)` pairs
    pub fn iter(&self) -> std::slice::Iter<'_, (f64, f64)> {
        self.points.iter()
    }

    /// All energies (eV) in grid order
    pub fn energies(&self) -> Vec<f64> {
        self.points.iter().map(|(e, _)| *e).collect()
    }

    /// All transmission values in grid order
    pub fn transmissions(&self) -> Vec<f64> {
        self.points.iter().map(|(_, t)| *t).collect()
    }
}

impl std::fmt::Display for TransmissionCurve {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "# {}\n# energy(eV)   transmission", self.isotope)?;
        for (energy, transmission) in &self.points {
            write!(fmt, "\n{}  {}", energy.sci(5, 2), transmission.sci(5, 2))?;
        }
        Ok(())
    }
}

/// Atoms per barn-cm along the beam path
///
/// ```text
/// thickness(cm) * density(g/cm3) * AVOGADRO / atomic_mass / 1e24
/// ```
///
/// The `1e24` folds the barn to cm2 conversion in so that multiplying by a
/// cross-section in barns gives a dimensionless exponent.
///
/// Thickness must be in `cm` or `mm`, and density in `g/cm3`. Anything else is
/// an error naming the isotope and the rejected unit. The atomic mass must be
/// finite and positive, checked after the units.
///
/// ```rust
/// # use ntrans_transmission::{areal_density, Isotope};
/// # use ntrans_xs::CrossSectionSeries;
/// let isotope = Isotope {
///     atomic_mass: 1.0,
///     thickness: 1.0,
///     thickness_unit: "cm".to_string(),
///     density: 1.0,
///     ..Default::default()
/// }
/// .with_cross_section(CrossSectionSeries::from(vec![(1.0e6, 1.0)]))
/// .unwrap();
///
/// let a = areal_density(&isotope).unwrap();
/// assert!((a - 0.602214076).abs() < 1e-12);
/// ```
pub fn areal_density(isotope: &LoadedIsotope) -> Result<f64> {
    let details = isotope.isotope();

    let thickness_cm = details
        .thickness_unit
        .parse::<ThicknessUnit>()
        .ok()
        .and_then(|unit| unit.to_cm(details.thickness))
        .ok_or_else(|| Error::UnsupportedThicknessUnit {
            isotope: details.name.clone(),
            unit: details.thickness_unit.clone(),
        })?;

    let density = match details.density_unit.parse::<DensityUnit>() {
        Ok(DensityUnit::GramsPerCubicCm) => details.density,
        Err(_) => {
            return Err(Error::UnsupportedDensityUnit {
                isotope: details.name.clone(),
                unit: details.density_unit.clone(),
            })
        }
    };

    let atomic_mass = details.atomic_mass;
    if !atomic_mass.is_finite() || atomic_mass <= 0.0 {
        return Err(Error::InvalidAtomicMass {
            isotope: details.name.clone(),
            mass: atomic_mass,
        });
    }

    Ok(thickness_cm * density * AVOGADRO / atomic_mass / CM2_TO_BARN)
}

/// Transmission through an isotope sample at every energy in the grid
///
/// Applies the attenuation formula `T = exp(-xs(E) * A)` where `A` is the
/// [areal_density()] and `xs(E)` is the lin-lin interpolated cross-section in
/// barns at energy `E` (eV).
///
/// - The curve has one point per grid energy, in the same order
/// - An empty grid gives an empty curve
/// - Energies outside the tabulated data are linearly extrapolated
///
/// Units are checked first, so an unsupported thickness or density unit is an
/// error regardless of anything else.
///
/// ```rust
/// # use ntrans_transmission::{compute_transmission, Isotope};
/// # use ntrans_xs::CrossSectionSeries;
/// let isotope = Isotope {
///     atomic_mass: 1.0,
///     thickness: 1.0,
///     thickness_unit: "cm".to_string(),
///     density: 1.0,
///     ..Default::default()
/// }
/// .with_cross_section(CrossSectionSeries::from(vec![(1.0e6, 1.0)]))
/// .unwrap();
///
/// let curve = compute_transmission(&[1.0e6], &isotope).unwrap();
/// assert!((curve.points[0].1 - 0.5476).abs() < 1e-4);
/// ```
pub fn compute_transmission(
    energy_grid: &[f64],
    isotope: &LoadedIsotope,
) -> Result<TransmissionCurve> {
    let atoms = areal_density(isotope)?;

    let xs = LinearInterpolant::new(isotope.cross_section()).ok_or_else(|| {
        Error::EmptyCrossSection {
            isotope: isotope.name().to_string(),
            path: isotope.xs_file_location().to_path_buf(),
        }
    })?;

    trace!("{}: areal density {atoms:e} atoms/b-cm", isotope.name());
    warn_extrapolation(energy_grid, &xs, isotope.name());

    let points = energy_grid
        .iter()
        .map(|&energy| (energy, (-xs.evaluate(energy) * atoms).exp()))
        .collect();

    Ok(TransmissionCurve {
        isotope: isotope.name().to_string(),
        points,
    })
}

/// Single warning if any of the grid falls outside the tabulated energies
fn warn_extrapolation(energy_grid: &[f64], xs: &LinearInterpolant, name: &str) {
    let outside = energy_grid
        .iter()
        .filter(|e| xs.is_extrapolated(**e))
        .count();

    if outside > 0 {
        let (lo, hi) = xs.bounds();
        warn!(
            "{name}: {outside} grid energies outside tabulated data ({} - {} eV) were extrapolated",
            lo.sci(3, 2),
            hi.sci(3, 2)
        );
    }
}
