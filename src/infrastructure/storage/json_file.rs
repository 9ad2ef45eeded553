//! File-backed key-value store.
//!
//! Each key is stored as `<dir>/<key>.json`. Writes go to a temp file that
//! is then renamed over the target, so a crash mid-write never leaves a
//! truncated envelope behind.

use crate::domain::ports::KeyValueStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens (and creates if needed) the storage directory.
    pub async fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create storage directory {:?}", dir))?;

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            anyhow::bail!(
                "Invalid storage key '{}': only [A-Za-z0-9._-] allowed, not starting with '.'",
                key
            );
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(content) => {
                debug!("Read {} bytes from {:?}", content.len(), path);
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {:?}", path)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;

        // Atomic write: write to temp file then rename
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)
            .await
            .with_context(|| format!("Failed to write temp file {:?}", temp_path))?;
        fs::rename(&temp_path, &path)
            .await
            .with_context(|| format!("Failed to rename {:?} into place", temp_path))?;

        debug!("Saved {} bytes to {:?}", value.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn unique_dir() -> PathBuf {
        let unique_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "lfpm_test_{}_{}_{}_store",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or(0),
            unique_id
        ))
    }

    fn cleanup_test_dir(dir: &Path) {
        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_load_nonexistent_returns_none() {
        let dir = unique_dir();
        let store = JsonFileStore::new(&dir).await.unwrap();

        assert!(store.get("lfpm-system-state").await.unwrap().is_none());
        cleanup_test_dir(&dir);
    }

    #[tokio::test]
    async fn test_save_and_load_roundtrip() {
        let dir = unique_dir();
        let store = JsonFileStore::new(&dir).await.unwrap();

        store.set("lfpm-system-state", r#"{"a":1}"#).await.unwrap();
        store.set("lfpm-system-state", r#"{"a":2}"#).await.unwrap();

        let loaded = store.get("lfpm-system-state").await.unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"{"a":2}"#));
        assert!(dir.join("lfpm-system-state.json").exists());
        assert!(!dir.join("lfpm-system-state.json.tmp").exists());
        cleanup_test_dir(&dir);
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = unique_dir();
        let store = JsonFileStore::new(&dir).await.unwrap();

        assert!(store.set("../escape", "x").await.is_err());
        assert!(store.set("nested/key", "x").await.is_err());
        assert!(store.get("").await.is_err());
        cleanup_test_dir(&dir);
    }

    #[tokio::test]
    async fn test_creates_missing_directory() {
        let dir = unique_dir().join("deeper");
        let store = JsonFileStore::new(&dir).await.unwrap();

        assert!(store.dir().exists());
        cleanup_test_dir(dir.parent().unwrap());
    }
}
