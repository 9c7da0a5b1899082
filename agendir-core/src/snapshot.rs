//! Account snapshot persistence.
//!
//! The last-known account snapshot lives as `account.json` in the data
//! directory. A refresh replaces the whole file; nothing is patched in
//! place, so a failed fetch leaves the previous snapshot usable.

use std::path::PathBuf;

use crate::account::Account;
use crate::error::{AgendirError, AgendirResult};

const SNAPSHOT_FILE: &str = "account.json";

pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        SnapshotStore { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(SNAPSHOT_FILE)
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    pub fn load(&self) -> AgendirResult<Account> {
        let path = self.path();

        if !path.exists() {
            return Err(AgendirError::SnapshotNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| AgendirError::Serialization(e.to_string()))
    }

    /// Replace the snapshot wholesale (write-then-rename).
    pub fn save(&self, account: &Account) -> AgendirResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let content = serde_json::to_string_pretty(account)
            .map_err(|e| AgendirError::Serialization(e.to_string()))?;

        let temp = self.dir.join(SNAPSHOT_FILE.to_string() + ".tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, self.path())?;
        Ok(())
    }
}
