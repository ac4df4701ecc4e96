//! Template-aware transaction signing.
//!
//! The signature payload is the transaction's canonical serialization
//! without the signature section, concatenated with the spending
//! template's parameter bytes when present. Validators re-derive the
//! template from the attached bytes to check the script, so templated
//! spends store `template || signature` in the sign field while plain
//! key spends store the bare signature.

use bbc_primitives::ec::{PrivateKey, SIGNATURE_LENGTH};

use crate::transaction::RawTransaction;
use crate::TransactionError;

impl RawTransaction {
    /// Build the byte string the signature commits to.
    ///
    /// # Arguments
    /// * `template_data` - Template parameter bytes; empty for plain
    ///   key-based spends.
    ///
    /// # Returns
    /// `unsigned_bytes() || template_data`.
    pub fn signing_payload(&self, template_data: &[u8]) -> Vec<u8> {
        let mut payload = self.unsigned_bytes();
        payload.extend_from_slice(template_data);
        payload
    }

    /// Sign this transaction in place.
    ///
    /// Ed25519 signing is deterministic: identical transaction,
    /// template data, and key always produce an identical sign field.
    /// Signing is not idempotent across different template data, since
    /// the committed payload differs.
    ///
    /// # Arguments
    /// * `template_data` - Template parameter bytes; empty for plain
    ///   key-based spends.
    /// * `key` - The spender's private key.
    pub fn sign_template(&mut self, template_data: &[u8], key: &PrivateKey) {
        let signature = key.sign(&self.signing_payload(template_data));
        let mut sign = Vec::with_capacity(template_data.len() + SIGNATURE_LENGTH);
        sign.extend_from_slice(template_data);
        sign.extend_from_slice(&signature);
        self.sign = sign;
    }
}

/// Sign a raw transaction hex string with a private key.
///
/// Decodes `raw_hex`, signs it (incorporating `template_data_hex` when
/// the source or destination is a template address), and re-encodes.
///
/// # Arguments
/// * `raw_hex` - The unsigned raw transaction hex.
/// * `template_data_hex` - Template parameter bytes as hex; empty for
///   plain key-based spends.
/// * `private_key_hex` - The spender's private key in display hex.
///
/// # Returns
/// The signed raw transaction hex, or a decode/key error.
pub fn sign_with_private_key(
    raw_hex: &str,
    template_data_hex: &str,
    private_key_hex: &str,
) -> Result<String, TransactionError> {
    let mut tx = RawTransaction::from_hex(raw_hex)?;

    let template_data = if template_data_hex.is_empty() {
        Vec::new()
    } else {
        hex::decode(template_data_hex)
            .map_err(|e| TransactionError::InvalidTemplateData(e.to_string()))?
    };

    let key = PrivateKey::from_hex(private_key_hex)
        .map_err(|e| TransactionError::InvalidPrivateKey(e.to_string()))?;

    tx.sign_template(&template_data, &key);
    Ok(tx.to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbc_primitives::ec::PublicKey;

    const UNSIGNED_TX_HEX: &str = "010000000e76785e0000000000000000c335f935650a427bf548242eac4e4a444e25691b47351e7945f4a8d4015df1e10ad0a0fed1b266a2b0bfd6f11cd9fb92048cfe72b4e0d9a9b1b9e1cbc70002abf7c9303880668046a19f56a4001abab1a112b4dd1c5c6b36a7ce8630f6ffa2fe60721400640000";

    // Key derived at m/44' from seed 000102030405060708090a0b0c0d0e0f.
    const PRIVATE_KEY_HEX: &str =
        "dc9e1adb38872caf87ab9a7c8aa1ff6ffaf4469264aac1747c42ae945436a299";
    const PUBLIC_KEY_HEX: &str =
        "abf7c9303880668046a19f56a4001abab1a112b4dd1c5c6b36a7ce8630f6ffa2";

    const TEMPLATE_DATA_HEX: &str = "02001234567890abcdef";

    #[test]
    fn test_sign_empty_template_golden() {
        let signed = sign_with_private_key(UNSIGNED_TX_HEX, "", PRIVATE_KEY_HEX).unwrap();
        let tx = RawTransaction::from_hex(&signed).unwrap();
        assert!(tx.is_signed());
        assert_eq!(tx.sign.len(), SIGNATURE_LENGTH);
        assert_eq!(
            hex::encode(&tx.sign),
            "e4145a452fe4eb2e9537209adb7dd7e369b114eb826111472765cd306fc225ed5447462b9c446f76d850b1c05c4c630799fa06237e091adfd573d1ef6a691300"
        );
    }

    #[test]
    fn test_sign_with_template_golden() {
        let signed =
            sign_with_private_key(UNSIGNED_TX_HEX, TEMPLATE_DATA_HEX, PRIVATE_KEY_HEX).unwrap();
        let tx = RawTransaction::from_hex(&signed).unwrap();

        let template = hex::decode(TEMPLATE_DATA_HEX).unwrap();
        assert_eq!(tx.sign.len(), template.len() + SIGNATURE_LENGTH);
        assert_eq!(&tx.sign[..template.len()], template.as_slice());
        assert_eq!(
            hex::encode(&tx.sign[template.len()..]),
            "534526f6c8ecbd4755b95755c35906f921fbb4102930b4748cd1b659c530ca6703752898a89a3bf358d511410f574c3e8f89d1a7d3990cd48b6016c6314eab00"
        );
    }

    #[test]
    fn test_sign_deterministic() {
        let a = sign_with_private_key(UNSIGNED_TX_HEX, TEMPLATE_DATA_HEX, PRIVATE_KEY_HEX).unwrap();
        let b = sign_with_private_key(UNSIGNED_TX_HEX, TEMPLATE_DATA_HEX, PRIVATE_KEY_HEX).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sign_differs_per_template() {
        let plain = sign_with_private_key(UNSIGNED_TX_HEX, "", PRIVATE_KEY_HEX).unwrap();
        let templated =
            sign_with_private_key(UNSIGNED_TX_HEX, TEMPLATE_DATA_HEX, PRIVATE_KEY_HEX).unwrap();
        assert_ne!(plain, templated);
    }

    #[test]
    fn test_signature_verifies_over_payload() {
        let signed = sign_with_private_key(UNSIGNED_TX_HEX, TEMPLATE_DATA_HEX, PRIVATE_KEY_HEX)
            .unwrap();
        let tx = RawTransaction::from_hex(&signed).unwrap();

        let template = hex::decode(TEMPLATE_DATA_HEX).unwrap();
        let mut signature = [0u8; SIGNATURE_LENGTH];
        signature.copy_from_slice(&tx.sign[template.len()..]);

        let public = PublicKey::from_hex(PUBLIC_KEY_HEX).unwrap();
        assert!(public.verify(&tx.signing_payload(&template), &signature));
    }

    #[test]
    fn test_sign_preserves_unsigned_fields() {
        let signed = sign_with_private_key(UNSIGNED_TX_HEX, "", PRIVATE_KEY_HEX).unwrap();
        let tx = RawTransaction::from_hex(&signed).unwrap();
        let mut stripped = tx.clone();
        stripped.sign.clear();
        assert_eq!(stripped.to_hex(), UNSIGNED_TX_HEX);
    }

    #[test]
    fn test_sign_invalid_private_key() {
        assert!(matches!(
            sign_with_private_key(UNSIGNED_TX_HEX, "", "nothex"),
            Err(TransactionError::InvalidPrivateKey(_))
        ));
    }

    #[test]
    fn test_sign_invalid_template_hex() {
        assert!(matches!(
            sign_with_private_key(UNSIGNED_TX_HEX, "zz", PRIVATE_KEY_HEX),
            Err(TransactionError::InvalidTemplateData(_))
        ));
    }

    #[test]
    fn test_sign_propagates_decode_error() {
        assert!(matches!(
            sign_with_private_key("00", "", PRIVATE_KEY_HEX),
            Err(TransactionError::Truncated(_))
        ));
    }
}
