#![deny(missing_docs)]

//! BBC wallet SDK - Complete SDK.
//!
//! Re-exports all BBC SDK components for convenient single-crate usage.

pub use bbc_keys as keys;
pub use bbc_primitives as primitives;
pub use bbc_transaction as transaction;
pub use bbc_wallet as wallet;
