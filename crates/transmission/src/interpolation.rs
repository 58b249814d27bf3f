//! Piecewise-linear interpolation of tabulated cross-sections

// ntrans modules
use ntrans_utils::SliceExt;
use ntrans_xs::CrossSectionSeries;

// external crates
use log::debug;

/// Lin-lin interpolant over `(energy, cross-section)` points
///
/// Values outside the tabulated range are extrapolated linearly from the
/// nearest edge segment rather than raising an error, so an energy grid may
/// extend a little beyond the table. A table with a single point is constant.
///
/// Points are used in file order when the energies are ascending. Otherwise a
/// sorted copy is made first, ties keeping their file order.
///
/// ```rust
/// # use ntrans_transmission::LinearInterpolant;
/// # use ntrans_xs::CrossSectionSeries;
/// let series = CrossSectionSeries::from(vec![(1.0, 0.1), (2.0, 0.2), (3.0, 0.3)]);
/// let xs = LinearInterpolant::new(&series).unwrap();
///
/// assert_eq!(xs.evaluate(2.0), 0.2);
/// assert!((xs.evaluate(2.5) - 0.25).abs() < 1e-12);
/// assert!((xs.evaluate(4.0) - 0.4).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolant {
    energies: Vec<f64>,
    values: Vec<f64>,
}

impl LinearInterpolant {
    /// Build from a series, `None` if there are no points
    pub fn new(series: &CrossSectionSeries) -> Option<Self> {
        if series.is_empty() {
            return None;
        }

        let mut points = series.as_slice().to_vec();
        if let Err(e) = series.energies().check_ascending() {
            debug!("Sorting cross-section energies for interpolation ({e})");
            points.sort_by(|a, b| a.0.total_cmp(&b.0));
        }

        let (energies, values) = points.into_iter().unzip();
        Some(Self { energies, values })
    }

    /// Cross-section at `energy`
    pub fn evaluate(&self, energy: f64) -> f64 {
        // a single point has no segments, so is constant everywhere
        let Ok(i) = self.energies.find_segment(energy) else {
            return self.values[0];
        };

        let (x0, x1) = (self.energies[i], self.energies[i + 1]);
        let (y0, y1) = (self.values[i], self.values[i + 1]);

        // exact on tabulated points
        if energy == x0 {
            return y0;
        } else if energy == x1 {
            return y1;
        }

        // repeated energies at the table edges
        if x1 == x0 {
            return if energy > x1 { y1 } else { y0 };
        }

        y0 + (energy - x0) * (y1 - y0) / (x1 - x0)
    }

    /// True if `energy` is outside the tabulated range
    pub fn is_extrapolated(&self, energy: f64) -> bool {
        let (lo, hi) = self.bounds();
        energy < lo || energy > hi
    }

    /// Lowest and highest tabulated energies
    pub fn bounds(&self) -> (f64, f64) {
        // never empty by construction
        let lo = self.energies[0];
        let hi = self.energies[self.energies.len() - 1];
        (lo, hi)
    }
}
