use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    errors::StoreError,
    utils::{config_file, ensure_dir, write_atomic},
};

/// Presentation-layer settings. The core never reads these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "€".into(),
        }
    }
}

/// Loads and saves the CLI configuration as JSON next to the ledger snapshot.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_path(config_file())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Missing or unreadable config falls back to defaults; the CLI should
    /// not refuse to start over a settings file.
    pub fn load(&self) -> Config {
        let Ok(data) = fs::read_to_string(&self.path) else {
            return Config::default();
        };
        serde_json::from_str(&data).unwrap_or_default()
    }

    pub fn save(&self, config: &Config) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| StoreError::Write(err.to_string()))?;
        write_atomic(&self.path, &json)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
