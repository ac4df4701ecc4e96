/// Error types for the wallet-facing surface.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// The caller invoked an entry point that was removed from the SDK.
    #[error("removed api: {0}")]
    RemovedApi(&'static str),
    /// A key derivation or address error.
    #[error(transparent)]
    Keys(#[from] bbc_keys::KeysError),
    /// A transaction decode, encode, or signing error.
    #[error(transparent)]
    Transaction(#[from] bbc_transaction::TransactionError),
    /// The decoded transaction view could not be serialized.
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
