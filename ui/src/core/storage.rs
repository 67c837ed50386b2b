//! Local persistence helpers for reader preferences.
//!
//! The browser's `localStorage` is the real backend. Hosting environments can
//! disable it, so the trait is injected everywhere a preference is read or
//! written; when no backend exists, writes are dropped and the current
//! session simply keeps its in-memory state.

use std::cell::RefCell;
use std::collections::HashMap;

/// A scoped key-value store for small preference strings.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Store used when no persistence backend is available. Reads find nothing,
/// writes go nowhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStore;

impl PreferenceStore for NoopStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// In-memory store for tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// `localStorage`-backed store. Every failure (storage disabled, quota,
/// missing window) degrades to a missed read or a dropped write; persistence
/// is never worth surfacing an error to the reader.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Default store for the current platform.
#[cfg(target_arch = "wasm32")]
pub fn preference_store() -> BrowserStore {
    BrowserStore
}

#[cfg(not(target_arch = "wasm32"))]
pub fn preference_store() -> NoopStore {
    NoopStore
}
