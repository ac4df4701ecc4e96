/// Error types for transaction decoding, encoding, and signing.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The input ended before a complete transaction could be read.
    #[error("truncated transaction data: {0}")]
    Truncated(String),
    /// Bytes remain after a complete transaction was read.
    #[error("trailing {0} bytes after transaction")]
    TrailingData(usize),
    /// The leading version marker is not a value this codec recognizes.
    ///
    /// Unknown markers are never coerced; some test networks require
    /// the caller to substitute the marker before decoding.
    #[error("unrecognized transaction version: {0:#06x}")]
    UnrecognizedVersion(u16),
    /// A hex string could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    /// The signing private key is malformed.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
    /// The template data hex is malformed.
    #[error("invalid template data: {0}")]
    InvalidTemplateData(String),
}
