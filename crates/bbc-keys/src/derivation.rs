//! SLIP-0010 hierarchical key derivation for ed25519.
//!
//! Starting from a master key/chain-code pair stretched out of the
//! seed with HMAC-SHA512, each hardened step feeds the parent private
//! key back into HMAC-SHA512 under the parent chain code. Ed25519
//! defines no soft (public-key-only) derivation, so every practical
//! path is fully hardened; a non-hardened step is rejected.

use bbc_primitives::ec::PrivateKey;
use bbc_primitives::hash::sha512_hmac;
use zeroize::Zeroizing;

use crate::path::{ChildStep, DerivationPath, HARDENED_OFFSET};
use crate::KeysError;

/// Domain-separation key for the master-node computation.
const MASTER_SECRET: &[u8] = b"ed25519 seed";

/// Derive the private key at the terminal node of a path.
///
/// Purely a function of `seed` and `path`; calling twice with the same
/// inputs yields the identical key. The seed is read-only and never
/// retained.
///
/// # Arguments
/// * `seed` - Entropy-derived seed bytes (typically 16-64 bytes).
/// * `path` - The derivation path, every step hardened.
///
/// # Returns
/// The terminal `PrivateKey`, or `UnsupportedDerivation` if the path
/// contains a non-hardened step.
pub fn derive(seed: &[u8], path: &DerivationPath) -> Result<PrivateKey, KeysError> {
    let (mut key, mut chain_code) = master_key(seed);

    for step in path.steps() {
        if !step.hardened {
            return Err(KeysError::UnsupportedDerivation(format!(
                "ed25519 defines no public derivation; step {} must be hardened",
                step.index
            )));
        }
        let (child_key, child_chain) = child_key(&key, &chain_code, step);
        key = child_key;
        chain_code = child_chain;
    }

    Ok(PrivateKey::from_bytes(&key))
}

/// Parse a path string and derive in one call.
///
/// # Arguments
/// * `seed` - Entropy-derived seed bytes.
/// * `path` - Textual derivation path, e.g. `m/44'/6602'/0'/0'/0'`.
///
/// # Returns
/// The terminal `PrivateKey`, or a path/derivation error.
pub fn derive_path_str(seed: &[u8], path: &str) -> Result<PrivateKey, KeysError> {
    let parsed: DerivationPath = path.parse()?;
    derive(seed, &parsed)
}

/// Compute the master key/chain-code pair from the seed.
///
/// `I = HMAC-SHA512(key = "ed25519 seed", data = seed)`; the left half
/// is the master private key, the right half the chain code.
fn master_key(seed: &[u8]) -> (Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>) {
    let stretched = Zeroizing::new(sha512_hmac(MASTER_SECRET, seed));
    split_halves(&stretched)
}

/// Compute one hardened child key/chain-code pair.
///
/// `I = HMAC-SHA512(key = chain_code, data = 0x00 || key || ser32(index + 2^31))`.
fn child_key(
    parent_key: &Zeroizing<[u8; 32]>,
    parent_chain_code: &Zeroizing<[u8; 32]>,
    step: &ChildStep,
) -> (Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>) {
    let mut data = Zeroizing::new([0u8; 37]);
    data[1..33].copy_from_slice(parent_key.as_ref());
    data[33..].copy_from_slice(&(step.index | HARDENED_OFFSET).to_be_bytes());

    let stretched = Zeroizing::new(sha512_hmac(parent_chain_code.as_ref(), data.as_ref()));
    split_halves(&stretched)
}

fn split_halves(stretched: &Zeroizing<[u8; 64]>) -> (Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>) {
    let mut key = Zeroizing::new([0u8; 32]);
    let mut chain_code = Zeroizing::new([0u8; 32]);
    key.copy_from_slice(&stretched[..32]);
    chain_code.copy_from_slice(&stretched[32..]);
    (key, chain_code)
}
