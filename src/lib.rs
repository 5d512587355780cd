//! `decimal128` is a pure Rust, no-std codec for the IEEE
//! 754-2008 decimal128 interchange format with binary integer
//! significands (BID).
//!
//! # Features
//!
//! - Parse decimal strings into canonical 128-bit patterns,
//! rounding half to even to 34 significant digits.
//! - Format any 128-bit pattern as a canonical string.
//! - Report the exceptional conditions raised during parsing.
//!
//! ```rust
//! use decimal128::{decode, encode, D128};
//!
//! let d: D128 = "1.50".parse().unwrap();
//! assert_eq!(d.to_string(), "1.50");
//!
//! let bytes = encode("-Infinity").unwrap();
//! assert_eq!(decode(bytes), "-Infinity");
//! ```
//!
//! # Cargo Features
//!
//! - `alloc`: Enables [`decode`], [`info`], and `to_string`
//! support.
//!
//! - `rand`: Enable [`rand`] support.
//!
//! - `std`: Include [`std`] support. Implies the `alloc`
//! feature.
//!
//! - `slow-tests`: Run long randomized tests.
//!
//! [`rand`]: https://crates.io/crates/rand
//! [`std`]: https://doc.rust-lang.org/std/

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(feature = "std", test)), deny(clippy::std_instead_of_core))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_precision_loss)]
#![deny(clippy::cast_sign_loss)]
#![deny(clippy::expect_used)]
#![deny(clippy::implicit_saturating_sub)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::panic)]
#![deny(clippy::ptr_as_ptr)]
#![deny(clippy::string_slice)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::wildcard_imports)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod bid;
mod conv;
#[cfg(test)]
mod corpus;
mod ctx;
#[cfg(feature = "alloc")]
mod info;
mod uint128;
mod util;

#[cfg(feature = "alloc")]
use alloc::string::{String, ToString};

#[doc(inline)]
pub use bid::D128;
pub use conv::*;
pub use ctx::*;
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub use info::*;

/// Encodes a decimal string as the 16-byte interchange format:
/// two little-endian 64-bit words, low word first.
///
/// This is the same as [`D128::parse`] followed by
/// [`D128::to_le_bytes`].
///
/// # Errors
///
/// See [`D128::parse`].
pub fn encode(s: &str) -> Result<[u8; 16], ParseError> {
    D128::parse(s).map(D128::to_le_bytes)
}

/// Decodes the 16-byte interchange format into its canonical
/// string.
///
/// Decoding never fails. See [`D128::format`].
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn decode(bytes: [u8; 16]) -> String {
    D128::from_le_bytes(bytes).to_string()
}

/// Simplifies importing common items.
pub mod prelude {
    pub use super::D128;
}
