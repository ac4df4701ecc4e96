//! Seed-to-key entry points.

use bbc_keys::{BbcDeriver, KeyInfo};

use crate::WalletError;

/// Derive the key triple at the shallow path `m/44'`.
///
/// Historical mobile builds derived every key at this single path, so
/// it remains the compatible default for existing wallets.
///
/// # Arguments
/// * `seed` - Entropy-derived seed bytes.
///
/// # Returns
/// The `(private key, public key, address)` triple.
pub fn derive_key_simple(seed: &[u8]) -> Result<KeyInfo, WalletError> {
    let deriver = BbcDeriver::new_simple(seed)?;
    Ok(deriver.key_info()?)
}

/// Removed. Use [`derive_key_simple`].
///
/// The account, change, and index arguments never affected the result
/// in released builds, so the entry point fails loudly instead of
/// silently ignoring them.
#[deprecated(note = "use derive_key_simple; the extra arguments were never honored")]
pub fn derive_key(
    _seed: &[u8],
    _account: u32,
    _change_type: u32,
    _index: u32,
) -> Result<KeyInfo, WalletError> {
    Err(WalletError::RemovedApi(
        "derive_key is removed, use derive_key_simple; \
         its account, change, and index arguments were never honored",
    ))
}

/// Build a deriver at the shallow path `m/44'`.
///
/// # Arguments
/// * `seed` - Entropy-derived seed bytes.
///
/// # Returns
/// A [`BbcDeriver`] positioned at the simple path.
pub fn new_simple_bip44_deriver(seed: &[u8]) -> Result<BbcDeriver, WalletError> {
    Ok(BbcDeriver::new_simple(seed)?)
}

/// Build a deriver at the full path `m/44'/6602'/account'/change'/index'`.
///
/// # Arguments
/// * `seed` - Entropy-derived seed bytes.
/// * `account` - Account index, starting at 0.
/// * `change_type` - 0 external, 1 change; informational on this chain,
///   which usually sends change back to the spending address.
/// * `index` - Address index, starting at 0.
///
/// # Returns
/// A [`BbcDeriver`] at the terminal node.
pub fn new_bip44_deriver(
    seed: &[u8],
    account: u32,
    change_type: u32,
    index: u32,
) -> Result<BbcDeriver, WalletError> {
    Ok(BbcDeriver::new_bip44(seed, account, change_type, index)?)
}
