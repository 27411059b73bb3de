use thiserror::Error;
use uuid::Uuid;

/// Failures raised by the storage layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store cannot be opened or parsed. Fatal at startup.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// A snapshot commit failed. Callers roll back their in-memory state.
    #[error("store write failed: {0}")]
    Write(String),
}

/// Failures surfaced by the ledger manager to its callers.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("category `{0}` not found")]
    CategoryNotFound(Uuid),
    #[error("transaction `{0}` not found")]
    TransactionNotFound(Uuid),
    #[error("category name must not be empty")]
    EmptyName,
    #[error(transparent)]
    Store(#[from] StoreError),
}
