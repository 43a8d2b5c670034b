//! Browser Storage Backend
//!
//! `KeyValueStorage` over `window.localStorage`.

use todo_core::{DomainError, DomainResult, KeyValueStorage};
use wasm_bindgen::JsValue;

/// Handle to `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> DomainResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| DomainError::Internal("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::Internal("localStorage unavailable".to_string()))
    }
}

fn js_error(err: JsValue) -> DomainError {
    DomainError::Internal(format!("localStorage: {:?}", err))
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }
}
