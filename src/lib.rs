//! `ntrans` calculates neutron and gamma transmission through isotopic
//! samples from tabulated cross-section data
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use ntrans_utils as utils;

#[doc(inline)]
pub use ntrans_xs as xs;

#[doc(inline)]
pub use ntrans_transmission as transmission;
