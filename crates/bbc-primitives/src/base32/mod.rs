//! Base32 encoding with CRC-24Q checksum support.
//!
//! The chain renders address payloads in a fixed 32-character alphabet
//! (`0123456789abcdefghjkmnpqrstvwxyz`), 5 bits per character, most
//! significant bit first, without padding. A 32-byte payload plus its
//! 3-byte checksum is exactly 280 bits, i.e. 56 characters.

use std::sync::LazyLock;

use data_encoding::{Encoding, Specification};

use crate::crc24::crc24q_bytes;
use crate::PrimitivesError;

/// The chain's base32 alphabet.
///
/// Digits first, then lowercase letters with i, l, o and u removed to
/// avoid visual ambiguity.
const ALPHABET: &str = "0123456789abcdefghjkmnpqrstvwxyz";

static BASE32: LazyLock<Encoding> = LazyLock::new(|| {
    let mut spec = Specification::new();
    spec.symbols.push_str(ALPHABET);
    spec.encoding().expect("alphabet is a valid base32 specification")
});

/// Encode a byte slice to a base32 string in the chain's alphabet.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// A base32-encoded string without padding.
pub fn encode(data: &[u8]) -> String {
    BASE32.encode(data)
}

/// Decode a base32 string in the chain's alphabet to a byte vector.
///
/// # Arguments
/// * `s` - The base32 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or an error for characters outside the
/// alphabet or a non-canonical length.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    BASE32
        .decode(s.as_bytes())
        .map_err(|e| PrimitivesError::InvalidBase32(e.to_string()))
}

/// Encode a 32-byte payload with its CRC-24Q checksum appended.
///
/// The checksum covers the payload alone; the address's prefix
/// character is carried outside the checksummed body.
///
/// # Arguments
/// * `payload` - The 32-byte payload to encode.
///
/// # Returns
/// A 56-character base32 string.
pub fn check_encode(payload: &[u8; 32]) -> String {
    let mut data = [0u8; 35];
    data[..32].copy_from_slice(payload);
    data[32..].copy_from_slice(&crc24q_bytes(payload));
    encode(&data)
}

/// Decode a 56-character base32 string, verifying the CRC-24Q checksum.
///
/// # Arguments
/// * `s` - The 56-character base32 string.
///
/// # Returns
/// `Ok([u8; 32])` with the payload on success, or an error for invalid
/// encoding, wrong length, or checksum mismatch.
pub fn check_decode(s: &str) -> Result<[u8; 32], PrimitivesError> {
    let decoded = decode(s)?;
    if decoded.len() != 35 {
        return Err(PrimitivesError::InvalidBase32(format!(
            "expected 35 decoded bytes, got {}",
            decoded.len()
        )));
    }

    let mut payload = [0u8; 32];
    payload.copy_from_slice(&decoded[..32]);
    if decoded[32..] != crc24q_bytes(&payload) {
        return Err(PrimitivesError::ChecksumMismatch);
    }

    Ok(payload)
}
