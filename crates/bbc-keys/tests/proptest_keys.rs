use proptest::prelude::*;

use bbc_keys::address;
use bbc_keys::derivation;
use bbc_keys::DerivationPath;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn derivation_is_deterministic(
        seed in prop::collection::vec(any::<u8>(), 16..64),
        account in 0u32..1000,
        index in 0u32..1000
    ) {
        let path = DerivationPath::bip44(account, 0, index);
        let a = derivation::derive(&seed, &path).unwrap();
        let b = derivation::derive(&seed, &path).unwrap();
        prop_assert_eq!(a.to_hex(), b.to_hex());
        prop_assert_eq!(a.pub_key().to_hex(), b.pub_key().to_hex());
    }

    #[test]
    fn address_roundtrip(payload in prop::array::uniform32(any::<u8>())) {
        let pub_hex = hex::encode(payload);
        let addr = address::encode(&pub_hex).unwrap();
        prop_assert_eq!(addr.len(), address::ADDRESS_LENGTH);
        prop_assert_eq!(address::decode(&addr).unwrap(), pub_hex);
    }
}
