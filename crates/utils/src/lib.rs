//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, searching tabulated energies for an interpolation segment or
//! using prettier formatting for scientific numbers are useful everywhere.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod format;
mod slice_ext;

// Flatten
pub use error::{Error, Result};
pub use format::{OptionExt, ValueExt};
pub use slice_ext::SliceExt;
