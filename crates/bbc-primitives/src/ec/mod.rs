//! Ed25519 key types with the chain's hex conventions.
//!
//! The chain displays key material as the byte-reversed raw ed25519
//! bytes, hex encoded. Both directions of that convention live here so
//! every other crate goes through a single implementation.

mod private_key;
mod public_key;

pub use private_key::{PrivateKey, SIGNATURE_LENGTH};
pub use public_key::PublicKey;

use crate::PrimitivesError;

/// Reverse a 32-byte value and hex-encode it.
///
/// This is the chain's display convention for private keys, public
/// keys, and other 256-bit values.
///
/// # Arguments
/// * `bytes` - The raw 32 bytes.
///
/// # Returns
/// A 64-character lowercase hex string of the reversed bytes.
pub fn reverse_then_encode_hex(bytes: &[u8; 32]) -> String {
    let mut reversed = *bytes;
    reversed.reverse();
    hex::encode(reversed)
}

/// Decode a 64-character hex string and reverse the bytes.
///
/// Inverse of [`reverse_then_encode_hex`]: recovers the raw byte order
/// from the chain's display form.
///
/// # Arguments
/// * `s` - A 64-character hex string.
///
/// # Returns
/// The raw 32 bytes, or an error for malformed hex or wrong length.
pub fn decode_hex_then_reverse(s: &str) -> Result<[u8; 32], PrimitivesError> {
    let decoded = hex::decode(s)?;
    if decoded.len() != 32 {
        return Err(PrimitivesError::InvalidKeyLength {
            expected: 32,
            got: decoded.len(),
        });
    }
    let mut out = [0u8; 32];
    for (i, b) in decoded.iter().rev().enumerate() {
        out[i] = *b;
    }
    Ok(out)
}
