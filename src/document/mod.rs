//! Persisted document
//!
//! The whole application state lives in one JSON document under a fixed
//! key. Reads fall back to seed data on any failure; writes replace the
//! whole blob and are fire-and-forget.

pub mod models;
pub mod seed;

pub use models::{
    fresh_id, AppData, ItemId, Order, OrderId, OrderItem, Template, TemplateId, TemplateItem,
};

use crate::config::DOCUMENT_KEY;
use crate::store::DocumentStore;

/// Load the document from the store.
///
/// A missing or malformed blob is replaced by the default seed data,
/// which is written back immediately. Never fails.
pub fn load_or_seed(store: &mut impl DocumentStore) -> AppData {
    if let Some(raw) = store.get(DOCUMENT_KEY) {
        match AppData::from_json(&raw) {
            Ok(data) => return data,
            Err(e) => tracing::warn!("Discarding malformed stored document: {}", e),
        }
    }

    tracing::info!("No usable stored document, seeding defaults");
    let data = seed::seed_data();
    persist(store, &data);
    data
}

/// Serialize and write the whole document.
///
/// Failures are logged and swallowed; the in-memory document stays
/// authoritative either way.
pub fn persist(store: &mut impl DocumentStore, data: &AppData) {
    match data.to_json() {
        Ok(raw) => store.set(DOCUMENT_KEY, &raw),
        Err(e) => tracing::warn!("Failed to serialize document: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_empty_store_is_seeded_and_written_back() {
        let mut store = MemoryStore::default();
        let data = load_or_seed(&mut store);

        assert_eq!(data, seed::seed_data());
        // The fallback must be persisted immediately
        let raw = store.get(DOCUMENT_KEY).unwrap();
        assert_eq!(AppData::from_json(&raw).unwrap(), data);
    }

    #[test]
    fn test_malformed_blob_falls_back_to_seed() {
        let mut store = MemoryStore::default();
        store.set(DOCUMENT_KEY, "{not json");

        let data = load_or_seed(&mut store);
        assert_eq!(data, seed::seed_data());

        let raw = store.get(DOCUMENT_KEY).unwrap();
        assert!(AppData::from_json(&raw).is_ok());
    }

    #[test]
    fn test_persist_then_load_round_trips() {
        let mut store = MemoryStore::default();
        let mut data = seed::seed_data();
        data.templates[0].name = "Falafel".to_string();

        persist(&mut store, &data);
        let loaded = load_or_seed(&mut store);
        assert_eq!(loaded, data);
    }
}
