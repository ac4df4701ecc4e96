//! JSON summary of a decoded raw transaction.
//!
//! Mobile callers inspect transactions across a string-only bridge, so
//! the decoded form is rendered as a flat JSON object rather than a
//! typed structure. Field names and order follow the established view
//! that clients already parse.

use bbc_keys::address;
use bbc_transaction::RawTransaction;
use serde::Serialize;

use crate::WalletError;

/// The flat JSON view of a decoded transaction.
///
/// Amounts are raw chain units (6 decimal places); conversion to
/// display denominations is left to the caller.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TxSummary {
    /// Wire version marker.
    pub version: u16,
    /// Transaction type.
    pub typ: u16,
    /// Creation timestamp, seconds since the Unix epoch.
    pub timestamp: u32,
    /// Earliest block height at which the transaction may confirm.
    pub lock_until: u32,
    /// Number of inputs.
    pub size_in: usize,
    /// Destination template-type byte.
    pub prefix: u8,
    /// Transfer amount in raw chain units.
    pub amount: u64,
    /// Fee in raw chain units.
    pub tx_fee: u64,
    /// Length of the attached data section in bytes.
    pub size_out: usize,
    /// Length of the signature section in bytes.
    pub size_sign: usize,
    /// Anchor block hash, hex.
    pub hash_anchor: String,
    /// Destination payload rendered as a public-key address. The view
    /// always uses the pubkey rendering; the template type is reported
    /// separately in `prefix`.
    pub address: String,
    /// Signature section, hex; empty while unsigned.
    pub sign: String,
}

impl From<&RawTransaction> for TxSummary {
    fn from(tx: &RawTransaction) -> Self {
        TxSummary {
            version: tx.version,
            typ: tx.typ,
            timestamp: tx.timestamp,
            lock_until: tx.lock_until,
            size_in: tx.vin.len(),
            prefix: tx.prefix,
            amount: tx.amount,
            tx_fee: tx.tx_fee,
            size_out: tx.vch_data.len(),
            size_sign: tx.sign.len(),
            hash_anchor: hex::encode(tx.hash_anchor),
            address: address::encode_with_prefix(address::PUBKEY_PREFIX, &tx.address),
            sign: hex::encode(&tx.sign),
        }
    }
}

/// Decode a raw transaction hex string into its JSON summary.
///
/// Accepts transactions created by the node's `createtransaction` RPC.
///
/// # Arguments
/// * `raw_tx` - The raw transaction hex, signed or unsigned.
///
/// # Returns
/// The JSON summary string, or a decode error.
pub fn decode_tx(raw_tx: &str) -> Result<String, WalletError> {
    let tx = RawTransaction::from_hex(raw_tx)?;
    Ok(serde_json::to_string(&TxSummary::from(&tx))?)
}
