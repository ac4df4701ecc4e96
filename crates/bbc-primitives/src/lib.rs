//! BBC wallet SDK - Cryptographic primitives and binary utilities.
//!
//! This crate provides the foundational building blocks for the BBC SDK:
//! - HMAC-SHA512 (SLIP-0010 key stretching)
//! - CRC-24Q checksums (address integrity)
//! - The chain's base32 alphabet with checksum support
//! - Variable-length integer encoding and cursor reader/writer
//! - Ed25519 private/public key wrappers with the chain's hex conventions

pub mod hash;
pub mod crc24;
pub mod base32;
pub mod util;
pub mod ec;

mod error;
pub use error::PrimitivesError;
