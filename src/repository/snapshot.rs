//! Snapshot Persistence
//!
//! Each collection is stored as one JSON array under its own key and is
//! always rewritten in full. The two collections are written separately, so
//! an interrupted session can leave them out of step.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{DomainError, DomainResult};
use super::traits::KeyValueStorage;

/// Read the collection under `key`. A missing, unreadable or corrupt
/// snapshot yields an empty collection.
pub fn load_collection<T, S>(storage: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStorage + ?Sized,
{
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("Failed to read '{}', starting empty: {}", key, e);
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Discarding corrupt snapshot under '{}': {}", key, e);
            Vec::new()
        }
    }
}

/// Overwrite `key` with the complete collection
pub fn save_collection<T, S>(storage: &mut S, key: &str, items: &[T]) -> DomainResult<()>
where
    T: Serialize,
    S: KeyValueStorage + ?Sized,
{
    let json = serde_json::to_string(items).map_err(|e| DomainError::Serialization(e.to_string()))?;
    storage.set(key, &json)?;
    log::debug!("Wrote {} records to '{}'", items.len(), key);
    Ok(())
}
