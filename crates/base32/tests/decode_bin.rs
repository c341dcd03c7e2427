//! Tests for binary base32 decoding (from_base32_bin).

use base32_decode::{from_base32_bin, Base32Error, ALPHABET_BYTES};
use rand::Rng;

#[test]
fn works() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let prefix_length = rng.gen_range(0..=16);
        let groups = rng.gen_range(0..=8);

        let mut view: Vec<u8> = (0..prefix_length).map(|_| rng.gen::<u8>()).collect();
        for _ in 0..groups * 8 {
            view.push(ALPHABET_BYTES[rng.gen_range(0..32)]);
        }

        let decoded = from_base32_bin(&view, prefix_length, groups * 8).unwrap();
        assert_eq!(decoded.len(), groups * 5);

        let again = from_base32_bin(&view, prefix_length, groups * 8).unwrap();
        assert_eq!(decoded, again);
    }
}

#[test]
fn empty_input() {
    let result = from_base32_bin(b"", 0, 0).unwrap();
    assert_eq!(result, b"");
}

#[test]
fn canonical_vectors() {
    let encoded = b"MZXW6YTBOI======";
    let decoded = from_base32_bin(encoded, 0, encoded.len()).unwrap();
    assert_eq!(decoded, b"foobar");

    let encoded = b"mzxw6ytb";
    let decoded = from_base32_bin(encoded, 0, encoded.len()).unwrap();
    assert_eq!(decoded, b"fooba");
}

#[test]
fn with_offset() {
    let encoded = b"xxxxMY======"; // "xxxx" prefix, then "f" encoded
    let decoded = from_base32_bin(encoded, 4, 8).unwrap();
    assert_eq!(decoded, b"f");
}

#[test]
fn only_reads_the_given_range() {
    let encoded = b"MY======MZXW6YTB";
    assert_eq!(from_base32_bin(encoded, 0, 8).unwrap(), b"f");
    assert_eq!(from_base32_bin(encoded, 8, 8).unwrap(), b"fooba");
}

#[test]
fn rejects_non_ascii_bytes() {
    let encoded = b"mzxw6yt\xff";
    assert!(matches!(
        from_base32_bin(encoded, 0, encoded.len()),
        Err(Base32Error::InvalidCharacter)
    ));
}
