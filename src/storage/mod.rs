pub mod json_store;

use crate::{errors::StoreError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over persistence backends capable of storing ledger snapshots.
///
/// Staging maps onto mutating an in-memory working ledger; `commit` persists
/// the whole snapshot atomically (all-or-nothing).
pub trait StorageBackend: Send + Sync {
    fn load(&self) -> Result<Ledger>;
    fn commit(&self, ledger: &Ledger) -> Result<()>;
}

pub use json_store::JsonStore;
