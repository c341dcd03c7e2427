//! Base32 decoding utilities.
//!
//! This crate provides strict RFC 4648 base32 decoding with support for:
//! - Case-insensitive input over the `A-Z2-7` alphabet
//! - Padding-aware output length adjustment (`=` suffix)
//! - Decoding from string slices or byte slices with offset/length
//!
//! # Example
//!
//! ```
//! use base32_decode::from_base32;
//!
//! let decoded = from_base32("MZXW6YTB").unwrap();
//! assert_eq!(decoded, b"fooba");
//! ```

mod constants;
mod from_base32;
mod from_base32_bin;
mod from_base32_opt;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use from_base32::from_base32;
pub use from_base32_bin::from_base32_bin;
pub use from_base32_opt::from_base32_opt;

use thiserror::Error;

/// Error type for base32 decoding.
///
/// Every variant is a rejected input: decoding either returns the complete
/// byte sequence or fails with one of these, never a partial result. None of
/// them are worth retrying without changing the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base32Error {
    /// No input value was provided at all. An explicitly empty string is
    /// valid input and decodes to an empty byte sequence.
    #[error("INVALID_BASE32_INPUT")]
    InvalidArgument,
    /// The total character count, padding included, is not byte-aligned.
    #[error("Base32 string length must be a multiple of 8")]
    InvalidLength,
    /// The input contains a character that is neither in the alphabet nor `=`.
    #[error("INVALID_BASE32_CHARACTER")]
    InvalidCharacter,
    /// Padding is not a contiguous `=` suffix of recognized length.
    #[error("INVALID_BASE32_PADDING")]
    InvalidPadding,
}
