//! Document storage
//!
//! The store is a plain key-value collaborator: whole serialized
//! documents under fixed keys, synchronous get/set. Implementations
//! handle their own I/O failures; no storage error reaches the core.

pub mod json_store;

pub use json_store::JsonFileStore;

use std::collections::HashMap;

/// Synchronous key-value store holding whole serialized documents
pub trait DocumentStore {
    /// Fetch the blob stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous blob.
    ///
    /// Fire-and-forget: implementations log failures instead of
    /// returning them.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used in tests and for ephemeral sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl DocumentStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}
