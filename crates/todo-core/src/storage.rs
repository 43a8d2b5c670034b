//! Key-Value Storage
//!
//! The single local key-value store the app persists into. The browser
//! frontend backs it with `window.localStorage`; `MemoryStorage` serves
//! tests and native use.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// String key-value backend
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;
}

/// In-memory backend
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> DomainResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| DomainError::Internal("memory storage poisoned".to_string()))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.items()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        self.items()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
