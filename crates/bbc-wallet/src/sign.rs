//! Signing entry points and test-network helpers.

use bbc_transaction::TransactionError;

use crate::WalletError;

/// Sign a raw transaction hex string with a private key.
///
/// When the source or destination address is a template, the
/// template's parameter bytes must be supplied so the signature
/// commits to them; pass an empty string for plain key-based spends.
/// Template data is fetched from the address's on-chain metadata by
/// the caller.
///
/// # Arguments
/// * `raw_tx` - The unsigned raw transaction hex.
/// * `template_data` - Template parameter bytes as hex, or empty.
/// * `private_key` - The spender's private key in display hex.
///
/// # Returns
/// The signed raw transaction hex.
pub fn sign_with_private_key(
    raw_tx: &str,
    template_data: &str,
    private_key: &str,
) -> Result<String, WalletError> {
    Ok(bbc_transaction::sign_with_private_key(
        raw_tx,
        template_data,
        private_key,
    )?)
}

/// Substitute the DPoS test-network version marker into a raw
/// transaction hex string.
///
/// Test nodes emit transactions the codec would otherwise reject;
/// callers substitute the marker before decoding or signing. Only the
/// leading version marker changes.
///
/// # Arguments
/// * `raw_tx` - The raw transaction hex.
///
/// # Returns
/// The same transaction hex with an `ffff` version marker.
pub fn replace_tx_version(raw_tx: &str) -> Result<String, WalletError> {
    // Byte-slicing below is only safe on ascii input; hex never
    // contains multi-byte characters.
    if !raw_tx.is_ascii() {
        return Err(WalletError::Transaction(TransactionError::InvalidHex(
            "raw transaction hex must be ascii".to_string(),
        )));
    }
    if raw_tx.len() < 4 {
        return Err(WalletError::Transaction(TransactionError::Truncated(
            "raw transaction shorter than a version marker".to_string(),
        )));
    }
    Ok(format!("ffff{}", &raw_tx[4..]))
}
