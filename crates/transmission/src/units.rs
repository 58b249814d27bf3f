//! Units understood for sample thickness and density

use crate::error::{Error, Result};

/// Thickness units that may appear in an isotope configuration
///
/// `atoms/cm2` is recognised because it is the configuration default, but it
/// can not be used to calculate a transmission. Only [ThicknessUnit::Centimetre]
/// and [ThicknessUnit::Millimetre] are accepted by the calculator.
///
/// ```rust
/// # use ntrans_transmission::ThicknessUnit;
/// # use std::str::FromStr;
/// assert_eq!(ThicknessUnit::from_str("mm").unwrap(), ThicknessUnit::Millimetre);
/// assert_eq!(ThicknessUnit::Millimetre.to_cm(2.5), Some(0.25));
/// assert_eq!(ThicknessUnit::AtomsPerSquareCm.to_cm(1.0), None);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ThicknessUnit {
    /// `cm`
    Centimetre,
    /// `mm`
    Millimetre,
    /// `atoms/cm2`
    AtomsPerSquareCm,
}

impl ThicknessUnit {
    /// Symbol used in configuration files
    pub fn symbol(&self) -> &str {
        match self {
            ThicknessUnit::Centimetre => "cm",
            ThicknessUnit::Millimetre => "mm",
            ThicknessUnit::AtomsPerSquareCm => "atoms/cm2",
        }
    }

    /// Convert a thickness in this unit to cm, if it is a length
    pub fn to_cm(&self, thickness: f64) -> Option<f64> {
        match self {
            ThicknessUnit::Centimetre => Some(thickness),
            ThicknessUnit::Millimetre => Some(thickness / 10.0),
            ThicknessUnit::AtomsPerSquareCm => None,
        }
    }
}

impl std::str::FromStr for ThicknessUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cm" => Ok(ThicknessUnit::Centimetre),
            "mm" => Ok(ThicknessUnit::Millimetre),
            "atoms/cm2" => Ok(ThicknessUnit::AtomsPerSquareCm),
            _ => Err(Error::UnknownUnit(s.to_string())),
        }
    }
}

/// Density units that may appear in an isotope configuration
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DensityUnit {
    /// `g/cm3`
    GramsPerCubicCm,
}

impl DensityUnit {
    /// Symbol used in configuration files
    pub fn symbol(&self) -> &str {
        match self {
            DensityUnit::GramsPerCubicCm => "g/cm3",
        }
    }
}

impl std::str::FromStr for DensityUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "g/cm3" => Ok(DensityUnit::GramsPerCubicCm),
            _ => Err(Error::UnknownUnit(s.to_string())),
        }
    }
}
