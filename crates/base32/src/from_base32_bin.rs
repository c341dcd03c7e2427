//! Binary base32 decoding function.

use crate::constants::DECODE_TABLE;
use crate::Base32Error;

const PADDING_BYTE: u8 = b'=';

/// Decodes base32 bytes from a source slice.
///
/// Input bytes are case-folded before lookup, so upper-case, lower-case and
/// mixed-case encodings all decode to the same output. A trailing run of `=`
/// padding bytes shortens the output per RFC 4648; runs of 2, 5 or 7 are
/// rejected.
///
/// # Arguments
///
/// * `view` - The source byte slice containing base32-encoded data.
/// * `offset` - The starting offset in the source slice.
/// * `length` - The number of bytes to decode.
///
/// # Returns
///
/// The decoded bytes, or an error if the input is invalid.
///
/// # Example
///
/// ```
/// use base32_decode::from_base32_bin;
///
/// let encoded = b"MZXQ====";
/// let decoded = from_base32_bin(encoded, 0, encoded.len()).unwrap();
/// assert_eq!(decoded, b"fo");
/// ```
pub fn from_base32_bin(
    view: &[u8],
    offset: usize,
    length: usize,
) -> Result<Vec<u8>, Base32Error> {
    let encoded = &view[offset..offset + length];

    if length == 0 {
        return Ok(Vec::new());
    }

    // Coarse pre-check on the raw character count, padding included. Padding
    // shape violations are only caught later, during the scan.
    if length * 5 % 8 != 0 {
        return Err(Base32Error::InvalidLength);
    }

    // Provisional buffer sized as if there were no padding; truncated once
    // the real padding run length is known.
    let mut buf = vec![0u8; length * 5 / 8];

    let mut current_byte = 0u8;
    let mut bits_remaining: u32 = 8;
    let mut array_index = 0;

    let mut i = 0;
    while i < length {
        let value = DECODE_TABLE[encoded[i].to_ascii_lowercase() as usize];

        if value < 0 {
            if encoded[i] != PADDING_BYTE {
                return Err(Base32Error::InvalidCharacter);
            }

            // Padding must run through to the end of the input.
            let mut padding_count = 0;
            while i < length {
                if encoded[i] != PADDING_BYTE {
                    return Err(Base32Error::InvalidPadding);
                }
                padding_count += 1;
                i += 1;
            }

            let dropped = match padding_count {
                6 => 4,
                4 => 3,
                3 => 2,
                1 => 1,
                _ => return Err(Base32Error::InvalidPadding),
            };
            buf.truncate(buf.len() - dropped);
            return Ok(buf);
        }

        let value = value as u8;
        if bits_remaining > 5 {
            current_byte |= value << (bits_remaining - 5);
            bits_remaining -= 5;
        } else {
            current_byte |= value >> (5 - bits_remaining);
            buf[array_index] = current_byte;
            array_index += 1;
            // Restart the accumulator from the bits of this symbol that did
            // not fit into the completed byte.
            let leftover = 5 - bits_remaining;
            current_byte = if leftover == 0 {
                0
            } else {
                (value & ((1 << leftover) - 1)) << (8 - leftover)
            };
            bits_remaining += 3;
        }

        i += 1;
    }

    Ok(buf)
}
