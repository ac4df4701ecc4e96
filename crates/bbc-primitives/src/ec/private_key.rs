//! Ed25519 private key wrapper.

use ed25519_dalek::{Signer, SigningKey};
use zeroize::Zeroizing;

use crate::ec::public_key::PublicKey;
use crate::ec::{decode_hex_then_reverse, reverse_then_encode_hex};
use crate::PrimitivesError;

/// Length of an ed25519 signature in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// An ed25519 private key.
///
/// Wraps a 32-byte ed25519 seed. The public key and address are pure
/// functions of this value; no external state is involved. Signing is
/// deterministic: identical message and key always produce an
/// identical signature.
#[derive(Clone)]
pub struct PrivateKey {
    key: SigningKey,
}

impl PrivateKey {
    /// Create a private key from raw 32-byte seed material.
    ///
    /// Any 32-byte value is a valid ed25519 seed.
    ///
    /// # Arguments
    /// * `bytes` - The raw seed bytes in internal order.
    ///
    /// # Returns
    /// A new `PrivateKey`.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        PrivateKey {
            key: SigningKey::from_bytes(bytes),
        }
    }

    /// Parse a private key from the chain's hex display form.
    ///
    /// The hex string carries the seed bytes in reversed order; this
    /// restores the internal order before constructing the key.
    ///
    /// # Arguments
    /// * `s` - A 64-character hex string.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success, or `InvalidPrivateKey` if the hex
    /// is malformed or the wrong length.
    pub fn from_hex(s: &str) -> Result<Self, PrimitivesError> {
        let raw = Zeroizing::new(
            decode_hex_then_reverse(s)
                .map_err(|e| PrimitivesError::InvalidPrivateKey(e.to_string()))?,
        );
        Ok(Self::from_bytes(&raw))
    }

    /// Render the private key in the chain's hex display form.
    ///
    /// # Returns
    /// A 64-character hex string of the reversed seed bytes.
    pub fn to_hex(&self) -> String {
        reverse_then_encode_hex(&self.key.to_bytes())
    }

    /// Derive the corresponding public key.
    ///
    /// # Returns
    /// The ed25519 public key for this private key.
    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(self.key.verifying_key())
    }

    /// Sign a message with this key.
    ///
    /// Ed25519 signing is deterministic; no randomness is consumed.
    ///
    /// # Arguments
    /// * `message` - The bytes to sign.
    ///
    /// # Returns
    /// The 64-byte signature.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        self.key.sign(message).to_bytes()
    }
}

impl std::fmt::Debug for PrivateKey {
    /// Debug output never prints key material.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}
