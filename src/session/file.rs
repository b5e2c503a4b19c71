//! File-backed session store
//!
//! Keeps a small JSON object of key/value pairs on disk, the same shape as
//! browser `localStorage`, so several keys can share one file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::SessionStore;
use crate::config::SessionConfig;
use crate::error::StoreError;

/// Session store persisted to a JSON file
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
    key: String,
}

fn default_session_file() -> PathBuf {
    dirs::data_local_dir()
        .map(|p| p.join("signup-desk").join("session.json"))
        .unwrap_or_else(|| PathBuf::from("./signup_desk_session.json"))
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    /// Store at the configured path, or under the platform data dir
    pub fn from_config(config: &SessionConfig) -> Self {
        let path = config.file.clone().unwrap_or_else(default_session_file);
        Self::new(path, config.storage_key.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Write-then-rename so a crash never leaves a truncated file
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(&self.key))
    }

    fn save(&self, username: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(self.key.clone(), username.to_string());
        self.write_entries(&entries)?;
        tracing::debug!(path = ?self.path, "Session saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        if entries.remove(&self.key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
