use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::StoreError;

const DEFAULT_DIR_NAME: &str = ".kbudget";
const LEDGER_FILE: &str = "ledger.json";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::from_default_env().add_directive("kbudget_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}

/// Returns the application-specific data directory, defaulting to `~/.kbudget`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("KBUDGET_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Canonical path of the persisted ledger snapshot.
pub fn ledger_file() -> PathBuf {
    app_data_dir().join(LEDGER_FILE)
}

/// Canonical path of the CLI configuration file.
pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> Result<(), StoreError> {
    fs::create_dir_all(path)
        .map_err(|err| StoreError::Unavailable(format!("{}: {}", path.display(), err)))
}

/// Writes `data` to `path` atomically: temp file in the same directory, then
/// rename over the target, so readers only ever see old or new content.
pub fn write_atomic(path: &Path, data: &str) -> Result<(), StoreError> {
    let tmp = path.with_extension(TMP_SUFFIX);
    let write = || -> std::io::Result<()> {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(data.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, path)?;
        Ok(())
    };
    write().map_err(|err| {
        let _ = fs::remove_file(&tmp);
        StoreError::Write(format!("{}: {}", path.display(), err))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_atomic_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("data.json");
        write_atomic(&target, "first").unwrap();
        write_atomic(&target, "second").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "second");
        assert!(!target.with_extension(TMP_SUFFIX).exists());
    }
}
