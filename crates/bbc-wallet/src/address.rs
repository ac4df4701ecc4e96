//! Address conversion entry point.

use bbc_keys::address;

use crate::WalletError;

/// Convert an address string back to its public key hex.
///
/// Verifies the checksum; works for both public-key and template
/// addresses since the transform is publicly invertible.
///
/// # Arguments
/// * `address` - The 57-character address string.
///
/// # Returns
/// The 64-character payload hex.
pub fn address_to_pubkey(address: &str) -> Result<String, WalletError> {
    Ok(address::decode(address)?)
}
