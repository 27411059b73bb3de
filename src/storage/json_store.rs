use std::{fs, path::PathBuf};

use crate::{
    errors::StoreError,
    ledger::{ledger::CURRENT_SCHEMA_VERSION, Ledger},
    utils::{ledger_file, write_atomic},
};

use super::{Result, StorageBackend};

/// JSON file store: one pretty-printed snapshot, replaced atomically on
/// commit via temp-file rename.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the platform default location (`~/.kbudget/ledger.json`,
    /// overridable through `KBUDGET_HOME`).
    pub fn new_default() -> Self {
        Self::new(ledger_file())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl StorageBackend for JsonStore {
    fn load(&self) -> Result<Ledger> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "No snapshot found, starting empty.");
            return Ok(Ledger::default());
        }
        let data = fs::read_to_string(&self.path)
            .map_err(|err| StoreError::Unavailable(format!("{}: {}", self.path.display(), err)))?;
        let ledger: Ledger = serde_json::from_str(&data)
            .map_err(|err| StoreError::Unavailable(format!("{}: {}", self.path.display(), err)))?;
        if ledger.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(StoreError::Unavailable(format!(
                "snapshot schema version {} is newer than supported version {}",
                ledger.schema_version, CURRENT_SCHEMA_VERSION
            )));
        }
        tracing::info!(
            categories = ledger.categories.len(),
            transactions = ledger.transactions.len(),
            "Loaded ledger snapshot."
        );
        Ok(ledger)
    }

    fn commit(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| StoreError::Write(format!("{}: {}", parent.display(), err)))?;
        }
        let json = serde_json::to_string_pretty(ledger)
            .map_err(|err| StoreError::Write(err.to_string()))?;
        write_atomic(&self.path, &json)?;
        tracing::debug!(path = %self.path.display(), "Committed ledger snapshot.");
        Ok(())
    }
}
