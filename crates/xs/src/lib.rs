//! Reader for flat-file tabulated cross-section data
//!
//! One file may hold the tables of many isotopes. Each block is found by the
//! isotope name appearing anywhere in a line, with the numbers themselves
//! between informal text markers.
//!
//! ```text
//! U-235 total cross section          <- any line mentioning the name
//! #data...                           <- start of the data region
//! # energy(MeV)  xs(barns)           <- comments start with '#'
//! 1.0000E-11     1.2345E+03
//! 2.0000E-11     8.7654E+02
//! //                                 <- end of block, the scan stops here
//! ```
//!
//! Data lines are exactly two whitespace separated numbers, energy in MeV and
//! cross-section in barns. Energies are converted to eV as they are read.
//!
//! ## Quickstart
//!
//! ```rust, no_run
//! # use ntrans_xs::{read_xs_file, CrossSectionSeries};
//! // Read the U-235 block from a shared cross-section file
//! let series: CrossSectionSeries = read_xs_file("path/to/xs.dat", "U-235").unwrap();
//!
//! for (energy, xs) in &series {
//!     println!("{energy} eV  {xs} b");
//! }
//! ```
//!
//! ## Known limitations
//!
//! Names are matched as plain substrings. Searching for `"U"` will stop at the
//! first line containing any capital U, for example a `U-235` header. Use
//! names that are not substrings of other isotopes in the same file.
//!
//! Only the first block is ever read. The `//` sentinel ends the whole scan,
//! so a second block for the same name later in the file is ignored.
//!
//! Any line in the data region that is not a comment and not two numbers,
//! including a blank line, is an
//! [InvalidDataLine](Error::InvalidDataLine) error rather than being skipped.

// Split into subfiles for development, but anything important is re-exported
mod error;
mod parsers;
mod reader;
mod scanner;
mod series;

// Inline anything important for a nice public API
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use reader::{parse_xs_str, read_xs_file};

#[doc(inline)]
pub use scanner::{BlockScanner, ScanState};

#[doc(inline)]
pub use series::CrossSectionSeries;
