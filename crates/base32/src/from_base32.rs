//! Standard base32 decoding function.

use crate::from_base32_bin;
use crate::Base32Error;

/// Decodes a base32 string to bytes.
///
/// The input is matched case-insensitively against the RFC 4648 alphabet
/// `A-Z2-7` and may carry a trailing `=` padding suffix. The total character
/// count (padding included) must be a multiple of 8.
///
/// # Arguments
///
/// * `encoded` - The base32-encoded string to decode.
///
/// # Returns
///
/// The decoded bytes, or an error if the input is invalid.
///
/// # Example
///
/// ```
/// use base32_decode::from_base32;
///
/// let decoded = from_base32("MZXW6===").unwrap();
/// assert_eq!(decoded, b"foo");
/// ```
pub fn from_base32(encoded: &str) -> Result<Vec<u8>, Base32Error> {
    from_base32_bin(encoded.as_bytes(), 0, encoded.len())
}
