//! BBC wallet SDK - Key derivation and addresses.
//!
//! Implements the wallet side of the chain's key model:
//! - BIP32/44-style derivation paths, fully hardened (SLIP-0010 over
//!   ed25519 has no public-derivation branch)
//! - Seed-to-key derivation down to a terminal keypair
//! - Private key parsing to the (private, public, address) triple
//! - The prefix + checksum base32 address codec
//! - The `Deriver` trait other chains of the wider wallet implement

mod error;
pub use error::KeysError;

pub mod path;
pub mod derivation;
pub mod address;
pub mod key_info;
pub mod deriver;

pub use deriver::{BbcDeriver, Deriver};
pub use key_info::{parse_private_key, KeyInfo};
pub use path::DerivationPath;
