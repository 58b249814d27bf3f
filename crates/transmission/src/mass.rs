//! Atomic mass lookup
//!
//! Masses normally come from an external nuclear data reference. Anything that
//! can turn an isotope name into a mass implements [AtomicMass], including
//! plain closures.

// standard library
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// crate modules
use crate::error::{Error, Result};

// external crates
use serde::{Deserialize, Serialize};

/// Source of atomic masses (g/mol) by isotope name
///
/// `None` means the source has nothing for the name. How that happened is
/// not this crate's concern, it is reported as
/// [AtomicMassNotFound](Error::AtomicMassNotFound).
///
/// ```rust
/// # use ntrans_transmission::AtomicMass;
/// let lookup = |name: &str| match name {
///     "C-12" => Some(12.0),
///     _ => None,
/// };
///
/// assert_eq!(lookup.atomic_mass("C-12"), Some(12.0));
/// assert_eq!(lookup.atomic_mass("U-238"), None);
/// ```
pub trait AtomicMass {
    /// Atomic mass for `isotope` in g/mol
    fn atomic_mass(&self, isotope: &str) -> Option<f64>;
}

impl<F> AtomicMass for F
where
    F: Fn(&str) -> Option<f64>,
{
    fn atomic_mass(&self, isotope: &str) -> Option<f64> {
        self(isotope)
    }
}

/// Simple table of atomic masses by name
///
/// Serialises as a flat JSON object:
///
/// ```json
/// { "U-235": 235.0439, "U-238": 238.0508 }
/// ```
///
/// ```rust
/// # use ntrans_transmission::{AtomicMass, MassTable};
/// let table: MassTable = [("U-238", 238.0508), ("C-12", 12.0)].into_iter().collect();
/// assert_eq!(table.atomic_mass("U-238"), Some(238.0508));
/// assert_eq!(table.atomic_mass("Pu-239"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MassTable(HashMap<String, f64>);

impl MassTable {
    /// New empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a JSON object of `name: mass` pairs
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::FailedToRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Add or replace a mass
    pub fn insert<S: Into<String>>(&mut self, isotope: S, mass: f64) {
        self.0.insert(isotope.into(), mass);
    }

    /// Number of isotopes in the table
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no masses
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AtomicMass for MassTable {
    fn atomic_mass(&self, isotope: &str) -> Option<f64> {
        self.0.get(isotope).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for MassTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
