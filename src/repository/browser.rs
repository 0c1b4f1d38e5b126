//! Browser Storage
//!
//! `window.localStorage` behind the `KeyValueStorage` trait. Values survive
//! page reloads and are shared by every tab of the same origin.

use wasm_bindgen::JsValue;

use crate::domain::{DomainError, DomainResult};
use super::traits::KeyValueStorage;

pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Open the origin's local storage
    pub fn local() -> DomainResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| DomainError::Storage("no window available".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::Storage("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

fn js_error(err: JsValue) -> DomainError {
    DomainError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> DomainResult<()> {
        self.storage.remove_item(key).map_err(js_error)
    }
}
