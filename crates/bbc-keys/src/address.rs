//! Address encoding and decoding.
//!
//! An address is 57 characters: a leading template-type digit
//! (`'0' + prefix`, where 1 is a plain public key and 2 a spending
//! template) followed by 56 base32 characters carrying the 32-byte
//! payload and its CRC-24Q checksum. The payload is the raw
//! internal-order key bytes, not the byte-reversed display hex, and
//! the checksum covers the payload alone. The transform is publicly
//! invertible: decoding recovers the embedded public key bytes.

use bbc_primitives::base32;
use bbc_primitives::ec::{decode_hex_then_reverse, reverse_then_encode_hex};

use crate::KeysError;

/// Prefix byte for plain public-key destinations.
pub const PUBKEY_PREFIX: u8 = 1;

/// Prefix byte for template destinations (delegate, vote, ...).
pub const TEMPLATE_PREFIX: u8 = 2;

/// Total address length in characters.
pub const ADDRESS_LENGTH: usize = 57;

/// Encode a public key hex string as a public-key address.
///
/// The display hex carries the key bytes reversed; the address body
/// encodes them in internal order.
///
/// # Arguments
/// * `pub_key_hex` - 64-character public key hex in display order.
///
/// # Returns
/// The 57-character address, or `InvalidPublicKey` for malformed hex.
pub fn encode(pub_key_hex: &str) -> Result<String, KeysError> {
    let payload = decode_hex_then_reverse(pub_key_hex)
        .map_err(|e| KeysError::InvalidPublicKey(e.to_string()))?;
    Ok(encode_with_prefix(PUBKEY_PREFIX, &payload))
}

/// Encode a 32-byte payload under an explicit prefix byte.
///
/// # Arguments
/// * `prefix` - The template-type prefix byte.
/// * `payload` - The 32-byte destination payload in internal order.
///
/// # Returns
/// The 57-character address.
pub fn encode_with_prefix(prefix: u8, payload: &[u8; 32]) -> String {
    let mut address = String::with_capacity(ADDRESS_LENGTH);
    address.push((b'0' + prefix) as char);
    address.push_str(&base32::check_encode(payload));
    address
}

/// Decode an address back to its public key hex string.
///
/// Verifies the checksum and the prefix character.
///
/// # Arguments
/// * `address` - The 57-character address string.
///
/// # Returns
/// The 64-character payload hex in display order, or `UnknownPrefix` /
/// `ChecksumMismatch` / `InvalidAddress` on failure.
pub fn decode(address: &str) -> Result<String, KeysError> {
    let (_, payload) = decode_parts(address)?;
    Ok(reverse_then_encode_hex(&payload))
}

/// Decode an address into its prefix byte and raw payload.
///
/// # Arguments
/// * `address` - The 57-character address string.
///
/// # Returns
/// The `(prefix, payload)` pair with the payload in internal order, or
/// an error as in [`decode`].
pub fn decode_parts(address: &str) -> Result<(u8, [u8; 32]), KeysError> {
    if address.len() != ADDRESS_LENGTH || !address.is_ascii() {
        return Err(KeysError::InvalidAddress(format!(
            "expected {} ascii characters, got {}",
            ADDRESS_LENGTH,
            address.len()
        )));
    }

    let prefix_char = address.as_bytes()[0] as char;
    let prefix = match prefix_char {
        '1' => PUBKEY_PREFIX,
        '2' => TEMPLATE_PREFIX,
        _ => return Err(KeysError::UnknownPrefix(prefix_char)),
    };

    let payload = base32::check_decode(&address[1..])?;
    Ok((prefix, payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbc_primitives::PrimitivesError;

    const PUB_HEX: &str = "abf7c9303880668046a19f56a4001abab1a112b4dd1c5c6b36a7ce8630f6ffa2";
    const ADDRESS: &str = "1mbzzcc46stkkcttw3kev84n1p6x1m054atft2hm0ct03gc69yynnf8se";

    // A key/address pair produced by the reference node tooling.
    const CHAIN_PUB_HEX: &str =
        "8b48882c4e4d61e242d0da2c3b0bf025f77f0b6fef37a4efab7e996baeb93d6d";
    const CHAIN_ADDRESS: &str = "1dmyvkbkbk5zaqvx46zqpy2vzywjz02sv5kdd0gq2c56mwb48925hfhpd";

    #[test]
    fn test_encode_known_vector() {
        assert_eq!(encode(PUB_HEX).unwrap(), ADDRESS);
    }

    #[test]
    fn test_decode_known_vector() {
        assert_eq!(decode(ADDRESS).unwrap(), PUB_HEX);
    }

    #[test]
    fn test_chain_produced_pair() {
        assert_eq!(encode(CHAIN_PUB_HEX).unwrap(), CHAIN_ADDRESS);
        assert_eq!(decode(CHAIN_ADDRESS).unwrap(), CHAIN_PUB_HEX);
    }

    #[test]
    fn test_chain_produced_address_reencodes() {
        // An address from a live node verifies and survives a
        // decode/encode cycle unchanged.
        let chain_address = "10g06z2bmwb71n9xg9zsv4vzay86ab7avt6n97hm6ra2z3rsbrtc2ncer";
        let (prefix, payload) = decode_parts(chain_address).unwrap();
        assert_eq!(prefix, PUBKEY_PREFIX);
        assert_eq!(encode_with_prefix(prefix, &payload), chain_address);
    }

    #[test]
    fn test_template_prefix_vector() {
        let (_, payload) = decode_parts(ADDRESS).unwrap();
        let address = encode_with_prefix(TEMPLATE_PREFIX, &payload);
        assert_eq!(
            address,
            "2mbzzcc46stkkcttw3kev84n1p6x1m054atft2hm0ct03gc69yynnf8se"
        );
        let (prefix, decoded) = decode_parts(&address).unwrap();
        assert_eq!(prefix, TEMPLATE_PREFIX);
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_roundtrip() {
        let hex_key = hex::encode([0xC4u8; 32]);
        let address = encode(&hex_key).unwrap();
        assert_eq!(decode(&address).unwrap(), hex_key);
    }

    #[test]
    fn test_decode_checksum_mismatch() {
        let mut chars: Vec<char> = ADDRESS.chars().collect();
        let last = chars.len() - 1;
        chars[last] = if chars[last] == '0' { '1' } else { '0' };
        let corrupted: String = chars.into_iter().collect();
        assert!(matches!(
            decode(&corrupted),
            Err(KeysError::Primitives(PrimitivesError::ChecksumMismatch))
        ));
    }

    #[test]
    fn test_decode_unknown_prefix() {
        let mut address = ADDRESS.to_string();
        address.replace_range(0..1, "9");
        assert!(matches!(decode(&address), Err(KeysError::UnknownPrefix('9'))));
    }

    #[test]
    fn test_decode_wrong_length() {
        assert!(matches!(
            decode("1tooshort"),
            Err(KeysError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_encode_rejects_bad_hex() {
        assert!(matches!(encode("zz"), Err(KeysError::InvalidPublicKey(_))));
        assert!(matches!(encode("0011"), Err(KeysError::InvalidPublicKey(_))));
    }
}
