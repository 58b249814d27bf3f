//! Energy grids to evaluate transmission on

// crate modules
use crate::error::{Error, Result};

// ntrans modules
use ntrans_utils::f;

/// Evenly spaced energies from `min` to `max` inclusive
///
/// Zero points gives an empty grid and a single point gives `[min]`. Both
/// endpoints are exact.
///
/// ```rust
/// # use ntrans_transmission::linear_grid;
/// let grid = linear_grid(1.0, 3.0, 5).unwrap();
/// assert_eq!(grid, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
/// ```
pub fn linear_grid(min: f64, max: f64, points: usize) -> Result<Vec<f64>> {
    check_bounds(min, max)?;
    Ok(spaced(min, max, points, |t| min + t * (max - min)))
}

/// Logarithmically spaced energies from `min` to `max` inclusive
///
/// Same rules as [linear_grid()], but `min` must also be positive.
///
/// ```rust
/// # use ntrans_transmission::log_grid;
/// let grid = log_grid(1.0, 1000.0, 4).unwrap();
/// assert_eq!(grid[0], 1.0);
/// assert!((grid[1] - 10.0).abs() < 1e-9);
/// assert!((grid[2] - 100.0).abs() < 1e-9);
/// assert_eq!(grid[3], 1000.0);
/// ```
pub fn log_grid(min: f64, max: f64, points: usize) -> Result<Vec<f64>> {
    check_bounds(min, max)?;
    if min <= 0.0 {
        return Err(Error::InvalidEnergyGrid(f!(
            "log spacing needs a positive minimum, got {min}"
        )));
    }

    let (lo, hi) = (min.log10(), max.log10());
    Ok(spaced(min, max, points, |t| 10f64.powf(lo + t * (hi - lo))))
}

fn check_bounds(min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(Error::InvalidEnergyGrid(f!(
            "bounds must be finite, got {min} to {max}"
        )));
    }
    if min > max {
        return Err(Error::InvalidEnergyGrid(f!(
            "minimum {min} is above maximum {max}"
        )));
    }
    Ok(())
}

/// Apply `at` over `points` fractions of the range, pinning the endpoints
fn spaced<F: Fn(f64) -> f64>(min: f64, max: f64, points: usize, at: F) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let last = points - 1;
            (0..points)
                .map(|i| match i {
                    0 => min,
                    i if i == last => max,
                    i => at(i as f64 / last as f64),
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(1000, 1000)]
    fn grid_length(#[case] points: usize, #[case] expected: usize) {
        assert_eq!(linear_grid(1.0, 10.0, points).unwrap().len(), expected);
        assert_eq!(log_grid(1.0, 10.0, points).unwrap().len(), expected);
    }

    #[test]
    fn single_point() {
        assert_eq!(linear_grid(5.0, 10.0, 1).unwrap(), vec![5.0]);
        assert_eq!(log_grid(5.0, 10.0, 1).unwrap(), vec![5.0]);
    }

    #[test]
    fn endpoints_exact() {
        let grid = log_grid(1.0, 1.0e4, 1000).unwrap();
        assert_eq!(grid[0], 1.0);
        assert_eq!(grid[999], 1.0e4);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn log_spacing_ratio() {
        let grid = log_grid(1.0, 1.0e4, 5).unwrap();
        for (value, expected) in grid.iter().zip([1.0, 10.0, 100.0, 1000.0, 1.0e4]) {
            assert_relative_eq!(*value, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn degenerate_range() {
        assert_eq!(linear_grid(2.0, 2.0, 3).unwrap(), vec![2.0, 2.0, 2.0]);
    }

    #[rstest]
    #[case(10.0, 1.0)]
    #[case(f64::NAN, 1.0)]
    #[case(1.0, f64::INFINITY)]
    fn bad_bounds(#[case] min: f64, #[case] max: f64) {
        assert!(matches!(
            linear_grid(min, max, 10),
            Err(Error::InvalidEnergyGrid(_))
        ));
    }

    #[test]
    fn log_needs_positive_min() {
        assert!(log_grid(0.0, 10.0, 10).is_err());
        assert!(linear_grid(0.0, 10.0, 10).is_ok());
    }
}
