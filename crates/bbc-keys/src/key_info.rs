//! The (private key, public key, address) triple.

use bbc_primitives::ec::PrivateKey;

use crate::address;
use crate::KeysError;

/// A derived or parsed key in all three display forms.
///
/// `public_key` and `address` are always derivable from `private_key`
/// alone; there is no hidden state behind this struct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyInfo {
    /// Private key hex in the chain's display order.
    pub private_key: String,
    /// Public key hex in the chain's display order.
    pub public_key: String,
    /// The public-key address string.
    pub address: String,
}

impl KeyInfo {
    /// Build the triple from a private key.
    ///
    /// # Arguments
    /// * `key` - The private key.
    ///
    /// # Returns
    /// The full `KeyInfo`, or an address-encoding error.
    pub fn from_private_key(key: &PrivateKey) -> Result<Self, KeysError> {
        let public_key = key.pub_key().to_hex();
        let address = address::encode(&public_key)?;
        Ok(KeyInfo {
            private_key: key.to_hex(),
            public_key,
            address,
        })
    }
}

/// Parse a private key hex string into its `KeyInfo` triple.
///
/// The inverse entry point for callers holding only a private key (no
/// seed or path): reconstructs the public key and address.
///
/// # Arguments
/// * `private_key_hex` - 64-character private key hex in display order.
///
/// # Returns
/// The `KeyInfo`, or `InvalidPrivateKey` for malformed hex.
pub fn parse_private_key(private_key_hex: &str) -> Result<KeyInfo, KeysError> {
    let key = PrivateKey::from_hex(private_key_hex)
        .map_err(|e| KeysError::InvalidPrivateKey(e.to_string()))?;
    KeyInfo::from_private_key(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_private_key_golden() {
        let info = parse_private_key(
            "607fae1c03ac3b701969327b69c54944c42cec92f44a84ba605afdef9db1619d",
        )
        .unwrap();
        assert_eq!(
            info.public_key,
            "1a5107f7681a02af2523a6daf372e10e3a0764c9d3fe4bd5b70ab18201985ad7"
        );
        assert_eq!(
            info.address,
            "1txd9g0c2p45bfnabzv9wjs07787e2wqkvak269df08d6hxr7a4dbnt0g"
        );
    }

    #[test]
    fn test_parse_private_key_chain_pair() {
        // Public key and address printed by the reference node tooling.
        let info = parse_private_key(
            "0066760c7374abb65611092edd3176b5545772ed61b3672e1888a78846cbe308",
        )
        .unwrap();
        assert_eq!(
            info.public_key,
            "8b48882c4e4d61e242d0da2c3b0bf025f77f0b6fef37a4efab7e996baeb93d6d"
        );
        assert_eq!(
            info.address,
            "1dmyvkbkbk5zaqvx46zqpy2vzywjz02sv5kdd0gq2c56mwb48925hfhpd"
        );
    }

    #[test]
    fn test_parse_private_key_matches_derivation() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let derived =
            crate::derivation::derive(&seed, &crate::DerivationPath::simple()).unwrap();
        let info = parse_private_key(&derived.to_hex()).unwrap();
        assert_eq!(info.public_key, derived.pub_key().to_hex());
        assert_eq!(
            info.address,
            "1mbzzcc46stkkcttw3kev84n1p6x1m054atft2hm0ct03gc69yynnf8se"
        );
    }

    #[test]
    fn test_parse_private_key_invalid() {
        assert!(matches!(
            parse_private_key("nothex"),
            Err(KeysError::InvalidPrivateKey(_))
        ));
        assert!(matches!(
            parse_private_key("abcd"),
            Err(KeysError::InvalidPrivateKey(_))
        ));
    }
}
