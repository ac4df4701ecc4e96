//! Ed25519 public key wrapper.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use crate::ec::{decode_hex_then_reverse, reverse_then_encode_hex};
use crate::PrimitivesError;

/// An ed25519 public key.
///
/// Hex rendering follows the chain convention: raw ed25519 bytes
/// reversed before encoding. That ordering must be preserved exactly
/// for addresses and node RPC interoperability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    key: VerifyingKey,
}

impl PublicKey {
    /// Wrap a dalek verifying key.
    pub(crate) fn from_verifying_key(key: VerifyingKey) -> Self {
        PublicKey { key }
    }

    /// Parse a public key from the chain's hex display form.
    ///
    /// # Arguments
    /// * `s` - A 64-character hex string in display order.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or `InvalidPublicKey` if the hex is
    /// malformed, the wrong length, or not a valid curve point.
    pub fn from_hex(s: &str) -> Result<Self, PrimitivesError> {
        let raw = decode_hex_then_reverse(s)
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        let key = VerifyingKey::from_bytes(&raw)
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        Ok(PublicKey { key })
    }

    /// Render the public key in the chain's hex display form.
    ///
    /// # Returns
    /// A 64-character hex string of the reversed key bytes.
    pub fn to_hex(&self) -> String {
        reverse_then_encode_hex(self.key.as_bytes())
    }

    /// Return the raw ed25519 public key bytes in internal order.
    ///
    /// # Returns
    /// The 32 raw bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        *self.key.as_bytes()
    }

    /// Verify an ed25519 signature over a message.
    ///
    /// # Arguments
    /// * `message` - The signed bytes.
    /// * `signature` - The 64-byte signature.
    ///
    /// # Returns
    /// `true` if the signature is valid for this key.
    pub fn verify(&self, message: &[u8], signature: &[u8; 64]) -> bool {
        let sig = Signature::from_bytes(signature);
        self.key.verify(message, &sig).is_ok()
    }
}
