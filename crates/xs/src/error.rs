//! Result and Error types for ntrans-xs

use std::path::PathBuf;

/// Type alias for `Result<T, xs::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `ntrans-xs` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error, including failure to open the file
    #[error("failed to read cross-section file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No line of the file mentions the isotope
    #[error("cross-section data for \"{isotope}\" not found in {path:?}")]
    IsotopeNotFound { isotope: String, path: PathBuf },

    /// A line inside the captured data block is not `<energy> <xs>`
    #[error("invalid data line {line_number} for \"{isotope}\" in {path:?}: \"{line}\"")]
    InvalidDataLine {
        isotope: String,
        path: PathBuf,
        line_number: usize,
        line: String,
    },
}
