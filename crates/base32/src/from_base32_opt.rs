//! Base32 decoding for optional inputs.

use crate::from_base32;
use crate::Base32Error;

/// Decodes an optional base32 string to bytes.
///
/// `None` fails with [`Base32Error::InvalidArgument`]; `Some("")` is valid
/// and decodes to an empty vector. Use this at boundaries where the input
/// may be absent entirely, such as FFI or deserialized payloads.
pub fn from_base32_opt(encoded: Option<&str>) -> Result<Vec<u8>, Base32Error> {
    match encoded {
        Some(encoded) => from_base32(encoded),
        None => Err(Base32Error::InvalidArgument),
    }
}
