use crate::error::{Error, Result};

/// Extends functionality for slices of float arrays
pub trait SliceExt<T> {
    /// Find the minimum value in float arrays
    ///
    /// Only provides the minimum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use ntrans_utils::SliceExt;
    /// # use ntrans_utils::Error;
    /// // Successful cases
    /// assert_eq!([1.1, 0.5, 2.2].try_min(), Ok(0.5));
    /// assert_eq!([1.1, f64::MIN, 2.2].try_min(), Ok(f64::MIN));
    ///
    /// // Error cases
    /// assert_eq!([1.1, f64::NAN, 2.2].try_min(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_min(), Err(Error::SliceContainsNoValues));
    /// ```
    ///
    /// Uses `total_cmp` since the float primitives do not implement `Ord`.
    fn try_min(&self) -> Result<T>;

    /// Find the maximum value in float arrays
    ///
    /// Only provides the maximum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use ntrans_utils::SliceExt;
    /// # use ntrans_utils::Error;
    /// // Successful cases
    /// assert_eq!([1.1, 0.5, 2.2].try_max(), Ok(2.2));
    ///
    /// // Error cases
    /// assert_eq!([1.1, f64::INFINITY, 2.2].try_max(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_max(), Err(Error::SliceContainsNoValues));
    /// ```
    fn try_max(&self) -> Result<T>;

    /// Check values never decrease
    ///
    /// Repeated values are allowed. The error reports the first index that is
    /// smaller than its predecessor.
    ///
    /// ```rust
    /// # use ntrans_utils::SliceExt;
    /// # use ntrans_utils::Error;
    /// assert_eq!([1.0, 2.0, 2.0, 3.0].check_ascending(), Ok(()));
    /// assert_eq!([1.0, 3.0, 2.0].check_ascending(), Err(Error::NotAscending { index: 2 }));
    /// ```
    fn check_ascending(&self) -> Result<()>;

    /// Find the segment of tabulated points to use for `value`
    ///
    /// Returns index `i` such that the segment `[x(i), x(i+1)]` should be used
    /// to interpolate at `value`. Values outside of the table are given the
    /// nearest edge segment so that they may be extrapolated.
    ///
    /// Assumes the slice is in ascending order.
    ///
    /// ```text
    ///     x:        1.0     2.0     4.0
    ///     segment:      0       1
    /// ```
    ///
    /// ```rust
    /// # use ntrans_utils::SliceExt;
    /// let energies = vec![1.0, 2.0, 4.0];
    ///
    /// // Values within the table
    /// assert_eq!(energies.find_segment(1.0), Ok(0));
    /// assert_eq!(energies.find_segment(1.5), Ok(0));
    /// assert_eq!(energies.find_segment(2.0), Ok(1));
    /// assert_eq!(energies.find_segment(4.0), Ok(1));
    ///
    /// // Values outside the table use the edge segments
    /// assert_eq!(energies.find_segment(0.1), Ok(0));
    /// assert_eq!(energies.find_segment(9.0), Ok(1));
    ///
    /// // There has to be at least one segment
    /// assert!([1.0].find_segment(1.0).is_err());
    /// ```
    fn find_segment(&self, value: T) -> Result<usize>;
}

impl SliceExt<f64> for [f64] {
    fn try_min(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        self.iter()
            .min_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }

    fn try_max(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        self.iter()
            .max_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }

    fn check_ascending(&self) -> Result<()> {
        match self.windows(2).position(|w| w[1] < w[0]) {
            Some(i) => Err(Error::NotAscending { index: i + 1 }),
            None => Ok(()),
        }
    }

    fn find_segment(&self, value: f64) -> Result<usize> {
        // need at least two points to make a segment
        let n = self.len();
        if n < 2 {
            return Err(Error::BelowMinimumSliceLength {
                length: n,
                minimum_required: 2,
            });
        }

        // number of points at or below the value, last one is the segment start
        let below = self.partition_point(|x| *x <= value);
        Ok(below.saturating_sub(1).min(n - 2))
    }
}
