//! BBC wallet SDK - Mobile-facing wallet surface.
//!
//! String-in, string-out entry points mirroring the mobile bridge:
//! seed-to-key derivation, private key parsing, raw transaction
//! decoding to JSON, and template-aware signing. The typed building
//! blocks live in `bbc-keys` and `bbc-transaction`; this crate is the
//! thin surface a bound client calls.

mod error;
pub use error::WalletError;

pub mod address;
pub mod derive;
pub mod sign;
pub mod tx_view;

pub use address::address_to_pubkey;
#[allow(deprecated)]
pub use derive::derive_key;
pub use derive::{derive_key_simple, new_bip44_deriver, new_simple_bip44_deriver};
pub use sign::{replace_tx_version, sign_with_private_key};
pub use tx_view::{decode_tx, TxSummary};

pub use bbc_keys::{parse_private_key, BbcDeriver, Deriver, KeyInfo};
