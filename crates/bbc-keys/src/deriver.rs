//! The chain-abstraction derivation seam.
//!
//! The wider wallet drives every supported chain through the same
//! small capability: derive the private key, the public key, and the
//! address at an agreed path. Each chain implements [`Deriver`]
//! independently; there is no shared base type.

use bbc_primitives::ec::PrivateKey;

use crate::derivation;
use crate::key_info::KeyInfo;
use crate::path::DerivationPath;
use crate::KeysError;

/// Per-chain key derivation capability.
pub trait Deriver {
    /// The derived private key in the chain's display encoding.
    fn derive_private_key(&self) -> Result<String, KeysError>;

    /// The derived public key in the chain's display encoding.
    fn public_key(&self) -> Result<String, KeysError>;

    /// The derived address string.
    fn address(&self) -> Result<String, KeysError>;
}

/// The BBC implementation of [`Deriver`].
///
/// Holds the terminal key derived from a seed; all trait methods are
/// pure reads of it.
pub struct BbcDeriver {
    key: PrivateKey,
}

impl BbcDeriver {
    /// Derive at the fixed shallow path `m/44'`.
    ///
    /// # Arguments
    /// * `seed` - Entropy-derived seed bytes.
    ///
    /// # Returns
    /// A deriver positioned at the simple path.
    pub fn new_simple(seed: &[u8]) -> Result<Self, KeysError> {
        let key = derivation::derive(seed, &DerivationPath::simple())?;
        Ok(BbcDeriver { key })
    }

    /// Derive at an explicit textual path.
    ///
    /// # Arguments
    /// * `seed` - Entropy-derived seed bytes.
    /// * `path` - Derivation path string, fully hardened.
    ///
    /// # Returns
    /// A deriver at the terminal node, or a path/derivation error.
    pub fn with_path(seed: &[u8], path: &str) -> Result<Self, KeysError> {
        let key = derivation::derive_path_str(seed, path)?;
        Ok(BbcDeriver { key })
    }

    /// Derive at the full BIP-44 path `m/44'/6602'/account'/change'/index'`.
    ///
    /// # Arguments
    /// * `seed` - Entropy-derived seed bytes.
    /// * `account` - Account index, starting at 0.
    /// * `change_type` - 0 external, 1 change; informational on this chain.
    /// * `index` - Address index, starting at 0.
    ///
    /// # Returns
    /// A deriver at the terminal node.
    pub fn new_bip44(
        seed: &[u8],
        account: u32,
        change_type: u32,
        index: u32,
    ) -> Result<Self, KeysError> {
        let key = derivation::derive(seed, &DerivationPath::bip44(account, change_type, index))?;
        Ok(BbcDeriver { key })
    }

    /// The full key triple at this deriver's node.
    ///
    /// # Returns
    /// The `KeyInfo` for the derived key.
    pub fn key_info(&self) -> Result<KeyInfo, KeysError> {
        KeyInfo::from_private_key(&self.key)
    }
}

impl Deriver for BbcDeriver {
    fn derive_private_key(&self) -> Result<String, KeysError> {
        Ok(self.key.to_hex())
    }

    fn public_key(&self) -> Result<String, KeysError> {
        Ok(self.key.pub_key().to_hex())
    }

    fn address(&self) -> Result<String, KeysError> {
        let info = self.key_info()?;
        Ok(info.address)
    }
}
