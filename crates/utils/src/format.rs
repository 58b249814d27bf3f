use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Better scientific number formatting
    ///
    /// Rust prints `1e6` for a million, which makes columns of energies
    /// awkward to read. This gives a fixed precision and a signed, padded
    /// exponent instead.
    ///
    /// ```rust
    /// # use ntrans_utils::ValueExt;
    /// assert_eq!((1.0e6).sci(5, 2), "1.00000e+06".to_string());
    /// assert_eq!((0.5476).sci(3, 2), "5.476e-01".to_string());
    /// assert_eq!((-2.5).sci(2, 3), "-2.50e+000".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let mut num = f!("{:.precision$e}", &self, precision = precision);
        // always contains 'e' for a LowerExp format, fall back to the raw text
        let Some(split) = num.find('e') else {
            return num;
        };
        let exp = num.split_off(split);
        let (sign, exp) = match exp.strip_prefix("e-") {
            Some(exp) => ('-', exp),
            None => ('+', &exp[1..]),
        };
        num.push_str(&f!("e{}{:0>pad$}", sign, exp, pad = exp_pad));
        num
    }
}

/// Extends Option for easy display formatting
pub trait OptionExt {
    /// Either the value contained within `Some()` or "none" for `None`
    ///
    /// ```rust
    /// # use ntrans_utils::OptionExt;
    /// let mass: Option<f64> = Some(238.05);
    /// assert_eq!(mass.display(), "238.05");
    ///
    /// let mass: Option<f64> = None;
    /// assert_eq!(mass.display(), "none");
    /// ```
    fn display(&self) -> String;
}

impl<T: std::fmt::Display> OptionExt for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => "none".to_string(),
        }
    }
}
