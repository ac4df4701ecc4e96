//! Transaction input type.

use bbc_primitives::util::{TxReader, TxWriter};

use crate::TransactionError;

/// A transaction input: a reference to a previous output being spent.
///
/// # Wire format
///
/// | Field | Size     |
/// |-------|----------|
/// | txid  | 32 bytes |
/// | vout  | 1 byte   |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxInput {
    /// Hash of the transaction whose output is spent.
    pub txid: [u8; 32],
    /// Index of the spent output within that transaction.
    pub vout: u8,
}

impl TxInput {
    /// Deserialize one input from a reader.
    ///
    /// # Arguments
    /// * `reader` - Reader positioned at the start of a serialized input.
    ///
    /// # Returns
    /// The parsed input, or `Truncated` if data runs out.
    pub fn read_from(reader: &mut TxReader) -> Result<Self, TransactionError> {
        let txid = reader
            .read_array32()
            .map_err(|e| TransactionError::Truncated(format!("reading input txid: {}", e)))?;
        let vout = reader
            .read_u8()
            .map_err(|e| TransactionError::Truncated(format!("reading input vout: {}", e)))?;
        Ok(TxInput { txid, vout })
    }

    /// Serialize this input into a writer.
    ///
    /// # Arguments
    /// * `writer` - The writer to append to.
    pub fn write_to(&self, writer: &mut TxWriter) {
        writer.write_bytes(&self.txid);
        writer.write_u8(self.vout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_roundtrip() {
        let input = TxInput { txid: [0xAB; 32], vout: 3 };
        let mut writer = TxWriter::new();
        input.write_to(&mut writer);
        let bytes = writer.into_bytes();
        assert_eq!(bytes.len(), 33);

        let mut reader = TxReader::new(&bytes);
        assert_eq!(TxInput::read_from(&mut reader).unwrap(), input);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_input_truncated() {
        let mut reader = TxReader::new(&[0u8; 10]);
        assert!(matches!(
            TxInput::read_from(&mut reader),
            Err(TransactionError::Truncated(_))
        ));
    }
}
