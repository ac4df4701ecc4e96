//! Hash function primitives for the BBC SDK.
//!
//! The chain's key derivation is built on HMAC-SHA512 (SLIP-0010 style
//! key stretching for ed25519). Address checksums live in [`crate::crc24`].

use hmac::{Hmac, Mac};
use sha2::Sha512;

/// Compute HMAC-SHA512 of the input data with the given key.
///
/// Used for the master-key computation and every hardened derivation
/// step of the SLIP-0010 construction.
///
/// # Arguments
/// * `key` - The HMAC key bytes.
/// * `data` - The message bytes to authenticate.
///
/// # Returns
/// A 64-byte HMAC-SHA512 tag.
pub fn sha512_hmac(key: &[u8], data: &[u8]) -> [u8; 64] {
    type HmacSha512 = Hmac<Sha512>;
    let mut mac = HmacSha512::new_from_slice(key)
        .expect("HMAC accepts any key length");
    mac.update(data);
    let result = mac.finalize();
    let mut output = [0u8; 64];
    output.copy_from_slice(&result.into_bytes());
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    // SLIP-0010 master key vector for seed 000102030405060708090a0b0c0d0e0f.
    #[test]
    fn test_sha512_hmac_slip10_master() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let tag = sha512_hmac(b"ed25519 seed", &seed);
        assert_eq!(
            hex::encode(&tag[..32]),
            "2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"
        );
        assert_eq!(
            hex::encode(&tag[32..]),
            "90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb"
        );
    }

    #[test]
    fn test_sha512_hmac_deterministic() {
        let a = sha512_hmac(b"key", b"message");
        let b = sha512_hmac(b"key", b"message");
        assert_eq!(a, b);
        let c = sha512_hmac(b"key", b"other");
        assert_ne!(a, c);
    }
}
