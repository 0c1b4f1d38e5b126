//! Repository Layer - Core Traits
//!
//! The library only needs string get/set/remove by key, which is what
//! `window.localStorage` offers. Implementations: browser storage for the
//! app, an in-memory map for native builds and tests.

use crate::domain::DomainResult;

/// Synchronous string key-value storage
pub trait KeyValueStorage {
    /// Read the value under `key`, `None` when absent
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&mut self, key: &str, value: &str) -> DomainResult<()>;

    fn remove(&mut self, key: &str) -> DomainResult<()>;
}

/// Source of unique record ids
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}
