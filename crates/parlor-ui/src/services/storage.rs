//! # Design
//!
//! - Values are stored raw: the access token is written by other parts of the
//!   app as a plain string, not as JSON.
//! - Browser storage is optional; its absence is reported as `None`, never a panic.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Errors raised when writing to storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store refused the write (quota, privacy mode).
    #[error("storage write rejected")]
    Write {
        /// Key that was being written.
        key: String,
        /// Description reported by the store, when it gave one.
        reason: Option<String>,
    },
}

/// Synchronous string key/value store.
pub trait KeyValueStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; missing keys are ignored.
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// In-memory store for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a single entry.
    #[must_use]
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(key.into(), value.into());
        self
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Store backed by the browser's `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err: JsValue| StorageError::Write {
                key: key.to_string(),
                reason: err.as_string(),
            })
    }

    fn remove(&self, key: &str) {
        self.storage.remove_item(key).ok();
    }
}

/// The browser's `localStorage`, when a window with storage access exists.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn browser_store() -> Option<Box<dyn KeyValueStore>> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    Some(Box::new(LocalStorageStore { storage }))
}

/// The browser's `localStorage`; native builds never have one.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub const fn browser_store() -> Option<Box<dyn KeyValueStore>> {
    None
}
