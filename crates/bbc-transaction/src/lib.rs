//! BBC wallet SDK - Raw transaction codec and signing.
//!
//! Implements the chain's raw-transaction wire format (the bit-exact
//! boundary shared with the node) and template-aware signing, where
//! the signature payload incorporates the spending template's
//! parameter bytes.

mod error;
pub use error::TransactionError;

pub mod input;
pub mod transaction;
pub mod signer;

pub use input::TxInput;
pub use signer::sign_with_private_key;
pub use transaction::{RawTransaction, TX_VERSION, TX_VERSION_DPOS_TEST};
