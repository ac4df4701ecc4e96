/// Error types for key derivation and address operations.
#[derive(Debug, thiserror::Error)]
pub enum KeysError {
    /// The derivation path string is syntactically malformed.
    #[error("invalid derivation path: {0}")]
    InvalidPath(String),
    /// The path requests a derivation branch the curve does not define.
    #[error("unsupported derivation: {0}")]
    UnsupportedDerivation(String),
    /// The private key hex is malformed or the wrong length.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
    /// The public key hex is malformed or the wrong length.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),
    /// The address carries a prefix character this chain does not define.
    #[error("unknown address prefix: {0:?}")]
    UnknownPrefix(char),
    /// The address string has the wrong shape (length, missing prefix).
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    /// An underlying primitives error (checksum mismatch, bad base32, ...).
    #[error("primitives error: {0}")]
    Primitives(#[from] bbc_primitives::PrimitivesError),
}
