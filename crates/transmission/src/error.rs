//! Result and Error types for ntrans-transmission

use std::path::PathBuf;

/// Type alias for `Result<T, transmission::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `ntrans-transmission` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Failure reading the cross-section file
    #[error(transparent)]
    Xs(#[from] ntrans_xs::Error),

    /// Underlying I/O error without a file attached, e.g. writing results
    #[error("failure in I/O stream")]
    Io(#[from] std::io::Error),

    /// Failure to open or read a configuration or data file
    #[error("failed to read {path:?}")]
    FailedToRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure to (de)serialise JSON
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Only `cm` and `mm` thicknesses can be used for transmission
    #[error("unsupported thickness unit \"{unit}\" for \"{isotope}\" (expected \"cm\" or \"mm\")")]
    UnsupportedThicknessUnit { isotope: String, unit: String },

    /// Only `g/cm3` densities can be used for transmission
    #[error("unsupported density unit \"{unit}\" for \"{isotope}\" (expected \"g/cm3\")")]
    UnsupportedDensityUnit { isotope: String, unit: String },

    /// Unit string that does not match any known unit
    #[error("unknown unit \"{0}\"")]
    UnknownUnit(String),

    /// Cross-section data is required but nothing was loaded
    #[error("no cross-section data loaded for \"{isotope}\" from {path:?}")]
    EmptyCrossSection { isotope: String, path: PathBuf },

    /// The atomic mass lookup had nothing for this isotope
    #[error("atomic mass lookup failed for \"{isotope}\"")]
    AtomicMassNotFound { isotope: String },

    /// Atomic mass must be a finite positive number
    #[error("invalid atomic mass {mass} for \"{isotope}\"")]
    InvalidAtomicMass { isotope: String, mass: f64 },

    /// A configuration value could not be converted to the expected type
    #[error("invalid value \"{value}\" for \"{key}\" in [{section}] of {path:?}")]
    InvalidConfigValue {
        path: PathBuf,
        section: String,
        key: String,
        value: String,
    },

    /// A configuration line is neither a section, a key, nor a comment
    #[error("malformed line {line_number} in {path:?}: \"{line}\"")]
    MalformedConfig {
        path: PathBuf,
        line_number: usize,
        line: String,
    },

    /// The same section name appears twice
    #[error("duplicate section [{section}] in {path:?}")]
    DuplicateSection { path: PathBuf, section: String },

    /// The same key appears twice in one section
    #[error("duplicate key \"{key}\" in [{section}] of {path:?}")]
    DuplicateOption {
        path: PathBuf,
        section: String,
        key: String,
    },

    /// Bounds or number of points do not describe a usable energy grid
    #[error("invalid energy grid: {0}")]
    InvalidEnergyGrid(String),
}
