//! File-backed document store
//!
//! Persists each key as a JSON file under a root directory. Writes go to
//! a temp file first and are renamed into place, so a crash mid-write
//! never leaves a truncated document behind.

use crate::error::Result;
use crate::store::DocumentStore;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory, creating it if needed
    pub fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)?;
        tracing::info!("Document store initialized at: {:?}", root);
        Ok(Self { root })
    }

    /// Store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl DocumentStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read document {}: {}", key, e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let path = self.path_for(key);
        let temp_path = path.with_extension("tmp");

        let outcome = fs::write(&temp_path, value).and_then(|_| fs::rename(&temp_path, &path));

        match outcome {
            Ok(()) => tracing::debug!("Wrote document {} ({} bytes)", key, value.len()),
            Err(e) => tracing::warn!("Failed to persist document {}: {}", key, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (JsonFileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("documents")).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_get_missing_key_returns_none() {
        let (store, _temp) = create_test_store();
        assert_eq!(store.get("appData"), None);
    }

    #[test]
    fn test_set_then_get() {
        let (mut store, _temp) = create_test_store();
        store.set("appData", r#"{"templates":[],"orders":[]}"#);
        assert_eq!(
            store.get("appData").as_deref(),
            Some(r#"{"templates":[],"orders":[]}"#)
        );
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let (mut store, _temp) = create_test_store();
        store.set("appData", "first");
        store.set("appData", "second");
        assert_eq!(store.get("appData").as_deref(), Some("second"));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let (mut store, _temp) = create_test_store();
        store.set("appData", "value");
        assert!(store.root().join("appData.json").exists());
        assert!(!store.root().join("appData.tmp").exists());
    }

    #[test]
    fn test_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("documents");

        {
            let mut store = JsonFileStore::new(root.clone()).unwrap();
            store.set("appData", "persisted");
        }

        let store = JsonFileStore::new(root).unwrap();
        assert_eq!(store.get("appData").as_deref(), Some("persisted"));
    }
}
