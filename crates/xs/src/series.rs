// ntrans modules
use ntrans_utils::{f, SliceExt, ValueExt};

/// Tabulated cross-section data for a single isotope
///
/// An ordered list of `(energy, cross-section)` pairs exactly as they appear
/// in the file. Nothing is sorted or de-duplicated.
///
/// - Energies are in eV (the file stores MeV)
/// - Cross-sections are in barns
///
/// ```rust
/// # use ntrans_xs::CrossSectionSeries;
/// let series = CrossSectionSeries::from(vec![(1.0e6, 2.5), (2.0e6, 3.0)]);
///
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.energies(), vec![1.0e6, 2.0e6]);
/// assert_eq!(series.cross_sections(), vec![2.5, 3.0]);
/// assert_eq!(series.energy_range(), Some((1.0e6, 2.0e6)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrossSectionSeries {
    points: Vec<(f64, f64)>,
}

impl CrossSectionSeries {
    /// New empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point, energy in eV and cross-section in barns
    pub fn push(&mut self, energy: f64, cross_section: f64) {
        self.points.push((energy, cross_section));
    }

    /// Number of tabulated points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no points were captured
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over `(energy, cross-section)` pairs in file order
    pub fn iter(&self) -> std::slice::Iter<'_, (f64, f64)> {
        self.points.iter()
    }

    /// View of the raw pairs
    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// All energies (eV) in file order
    pub fn energies(&self) -> Vec<f64> {
        self.points.iter().map(|(e, _)| *e).collect()
    }

    /// All cross-sections (barns) in file order
    pub fn cross_sections(&self) -> Vec<f64> {
        self.points.iter().map(|(_, xs)| *xs).collect()
    }

    /// Lowest and highest tabulated energies
    ///
    /// `None` for an empty series or one containing non-finite energies.
    pub fn energy_range(&self) -> Option<(f64, f64)> {
        let energies = self.energies();
        Some((energies.try_min().ok()?, energies.try_max().ok()?))
    }
}

impl From<Vec<(f64, f64)>> for CrossSectionSeries {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }
}

impl FromIterator<(f64, f64)> for CrossSectionSeries {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CrossSectionSeries {
    type Item = &'a (f64, f64);
    type IntoIter = std::slice::Iter<'a, (f64, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl std::fmt::Display for CrossSectionSeries {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let range = match self.energy_range() {
            Some((lo, hi)) => f!("{} - {} eV", lo.sci(5, 2), hi.sci(5, 2)),
            None => "none".to_string(),
        };
        writeln!(fmt, "Cross-section series")?;
        writeln!(fmt, "  Points      {}", self.len())?;
        write!(fmt, "  Energies    {range}")
    }
}
