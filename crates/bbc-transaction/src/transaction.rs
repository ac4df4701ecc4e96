//! Core raw transaction type.
//!
//! Represents a raw transaction exactly as exchanged with the node,
//! before or after signing. Encoding is the exact inverse of decoding
//! for every field; nodes validate the raw bytes, not a semantic
//! model, so re-encoding must be byte-for-byte stable.

use bbc_primitives::util::{TxReader, TxWriter, VarInt};

use crate::input::TxInput;
use crate::TransactionError;

/// Transaction version on the main network.
pub const TX_VERSION: u16 = 1;

/// Version marker carried by dpos test-network transactions.
///
/// Test chains require the caller to substitute this marker into the
/// leading bytes after the node creates the transaction; the codec
/// accepts it but never writes it on its own.
pub const TX_VERSION_DPOS_TEST: u16 = 0xffff;

/// A raw transaction.
///
/// # Wire format (integers little-endian, counts/amounts VarInt)
///
/// | Field       | Size                  |
/// |-------------|-----------------------|
/// | version     | 2 bytes               |
/// | typ         | 2 bytes               |
/// | timestamp   | 4 bytes               |
/// | lock_until  | 4 bytes               |
/// | hash_anchor | 32 bytes              |
/// | n_in        | VarInt                |
/// | inputs      | 33 bytes per input    |
/// | prefix      | 1 byte                |
/// | address     | 32 bytes              |
/// | amount      | VarInt                |
/// | tx_fee      | VarInt                |
/// | data        | VarInt length + bytes |
/// | sign        | VarInt length + bytes |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTransaction {
    /// Format version; see [`TX_VERSION`] and [`TX_VERSION_DPOS_TEST`].
    pub version: u16,

    /// Transaction type (0 = token transfer).
    pub typ: u16,

    /// Creation timestamp, Unix seconds.
    pub timestamp: u32,

    /// Block height or timestamp before which the transaction is invalid.
    pub lock_until: u32,

    /// Hash of the branch anchor block.
    pub hash_anchor: [u8; 32],

    /// Ordered list of spent outputs.
    pub vin: Vec<TxInput>,

    /// Destination template-type prefix (1 = public key, 2 = template).
    pub prefix: u8,

    /// Destination payload: the recipient's public key bytes in display
    /// order, or a template id.
    pub address: [u8; 32],

    /// Transferred amount in the chain's smallest unit.
    pub amount: u64,

    /// Transaction fee in the chain's smallest unit.
    pub tx_fee: u64,

    /// Auxiliary output data section.
    pub vch_data: Vec<u8>,

    /// Signature section. Empty when unsigned; for templated spends it
    /// carries the template parameter bytes followed by the 64-byte
    /// signature.
    pub sign: Vec<u8>,
}

impl RawTransaction {
    // -----------------------------------------------------------------
    // Deserialization
    // -----------------------------------------------------------------

    /// Parse a transaction from a hex-encoded string.
    ///
    /// # Arguments
    /// * `hex_str` - Hex string of the raw transaction bytes.
    ///
    /// # Returns
    /// `Ok(RawTransaction)` on success, or a `TransactionError` if the
    /// hex is invalid or the bytes do not form a valid transaction.
    pub fn from_hex(hex_str: &str) -> Result<Self, TransactionError> {
        let bytes =
            hex::decode(hex_str).map_err(|e| TransactionError::InvalidHex(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Parse a transaction from raw bytes.
    ///
    /// The byte slice must contain exactly one complete transaction:
    /// trailing bytes fail with `TrailingData`, truncated input with
    /// `Truncated`.
    ///
    /// # Arguments
    /// * `bytes` - The raw transaction bytes.
    ///
    /// # Returns
    /// `Ok(RawTransaction)` on success, or a decode error.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let mut reader = TxReader::new(bytes);
        let tx = Self::read_from(&mut reader)?;
        if reader.remaining() != 0 {
            return Err(TransactionError::TrailingData(reader.remaining()));
        }
        Ok(tx)
    }

    /// Deserialize a transaction from a `TxReader`.
    ///
    /// # Arguments
    /// * `reader` - Reader positioned at the start of a serialized
    ///   transaction.
    ///
    /// # Returns
    /// `Ok(RawTransaction)` on success, or a decode error.
    pub fn read_from(reader: &mut TxReader) -> Result<Self, TransactionError> {
        let version = reader
            .read_u16_le()
            .map_err(|e| TransactionError::Truncated(format!("reading version: {}", e)))?;
        if version != TX_VERSION && version != TX_VERSION_DPOS_TEST {
            return Err(TransactionError::UnrecognizedVersion(version));
        }

        let typ = reader
            .read_u16_le()
            .map_err(|e| TransactionError::Truncated(format!("reading type: {}", e)))?;
        let timestamp = reader
            .read_u32_le()
            .map_err(|e| TransactionError::Truncated(format!("reading timestamp: {}", e)))?;
        let lock_until = reader
            .read_u32_le()
            .map_err(|e| TransactionError::Truncated(format!("reading lock_until: {}", e)))?;
        let hash_anchor = reader
            .read_array32()
            .map_err(|e| TransactionError::Truncated(format!("reading hash anchor: {}", e)))?;

        let n_in = reader
            .read_varint()
            .map_err(|e| TransactionError::Truncated(format!("reading input count: {}", e)))?
            .value();
        // Each input is 33 bytes; an inflated declared count cannot be
        // satisfied by the remaining data.
        if n_in.saturating_mul(33) > reader.remaining() as u64 {
            return Err(TransactionError::Truncated(format!(
                "declared {} inputs but only {} bytes remain",
                n_in,
                reader.remaining()
            )));
        }
        let mut vin = Vec::with_capacity(n_in as usize);
        for _ in 0..n_in {
            vin.push(TxInput::read_from(reader)?);
        }

        let prefix = reader
            .read_u8()
            .map_err(|e| TransactionError::Truncated(format!("reading address prefix: {}", e)))?;
        let address = reader
            .read_array32()
            .map_err(|e| TransactionError::Truncated(format!("reading address: {}", e)))?;
        let amount = reader
            .read_varint()
            .map_err(|e| TransactionError::Truncated(format!("reading amount: {}", e)))?
            .value();
        let tx_fee = reader
            .read_varint()
            .map_err(|e| TransactionError::Truncated(format!("reading tx fee: {}", e)))?
            .value();

        let vch_data = read_byte_string(reader, "data")?;
        let sign = read_byte_string(reader, "sign")?;

        Ok(RawTransaction {
            version,
            typ,
            timestamp,
            lock_until,
            hash_anchor,
            vin,
            prefix,
            address,
            amount,
            tx_fee,
            vch_data,
            sign,
        })
    }

    // -----------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------

    /// Serialize this transaction to raw bytes.
    ///
    /// # Returns
    /// The standard wire-format bytes, the exact inverse of
    /// [`RawTransaction::from_bytes`].
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = TxWriter::with_capacity(128 + self.vin.len() * 33 + self.sign.len());
        self.write_unsigned(&mut writer);
        writer.write_varint(VarInt::from(self.sign.len()));
        writer.write_bytes(&self.sign);
        writer.into_bytes()
    }

    /// Serialize this transaction to a lowercase hex string.
    ///
    /// # Returns
    /// The hex encoding of [`RawTransaction::to_bytes`].
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Serialize every field except the signature section.
    ///
    /// This is the canonical byte string the signature commits to
    /// (optionally extended with template data by the signer).
    ///
    /// # Returns
    /// The wire bytes up to and including the data section.
    pub fn unsigned_bytes(&self) -> Vec<u8> {
        let mut writer = TxWriter::with_capacity(128 + self.vin.len() * 33);
        self.write_unsigned(&mut writer);
        writer.into_bytes()
    }

    fn write_unsigned(&self, writer: &mut TxWriter) {
        writer.write_u16_le(self.version);
        writer.write_u16_le(self.typ);
        writer.write_u32_le(self.timestamp);
        writer.write_u32_le(self.lock_until);
        writer.write_bytes(&self.hash_anchor);

        writer.write_varint(VarInt::from(self.vin.len()));
        for input in &self.vin {
            input.write_to(writer);
        }

        writer.write_u8(self.prefix);
        writer.write_bytes(&self.address);
        writer.write_varint(VarInt(self.amount));
        writer.write_varint(VarInt(self.tx_fee));

        writer.write_varint(VarInt::from(self.vch_data.len()));
        writer.write_bytes(&self.vch_data);
    }

    /// Whether a signature section is present.
    ///
    /// # Returns
    /// `true` once a signature has been attached.
    pub fn is_signed(&self) -> bool {
        !self.sign.is_empty()
    }
}

/// Read a VarInt-length-prefixed byte string.
fn read_byte_string(reader: &mut TxReader, field: &str) -> Result<Vec<u8>, TransactionError> {
    let len = reader
        .read_varint()
        .map_err(|e| TransactionError::Truncated(format!("reading {} length: {}", field, e)))?
        .value();
    if len > reader.remaining() as u64 {
        return Err(TransactionError::Truncated(format!(
            "declared {} bytes of {} but only {} remain",
            len,
            field,
            reader.remaining()
        )));
    }
    Ok(reader
        .read_bytes(len as usize)
        .map_err(|e| TransactionError::Truncated(format!("reading {}: {}", field, e)))?
        .to_vec())
}
