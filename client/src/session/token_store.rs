//! Persisted access/refresh credential pair.
//!
//! DESIGN
//! ======
//! The store reads through a `StorageBackend` on every call instead of caching
//! values, so a token replaced by login or removed by logout is visible to the
//! very next authorization check.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// `localStorage` key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// `localStorage` key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Minimal string key-value storage the token store writes through.
pub trait StorageBackend: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Browser `window.localStorage`.
///
/// Outside the hydrate build (SSR, native tests) there is no browser, so every
/// read returns `None` and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage, used in tests and anywhere no browser is available.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.lock().map_or(0, |items| items.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

/// Handle to the persisted credential pair. Cloning shares the backend.
#[derive(Clone)]
pub struct TokenStore {
    backend: Arc<dyn StorageBackend>,
}

impl TokenStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Store backed by `window.localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    /// Overwrite both values. A `None` refresh token removes the stored one.
    pub fn set(&self, access: &str, refresh: Option<&str>) {
        self.backend.set_item(ACCESS_TOKEN_KEY, access);
        match refresh {
            Some(refresh) => self.backend.set_item(REFRESH_TOKEN_KEY, refresh),
            None => self.backend.remove_item(REFRESH_TOKEN_KEY),
        }
    }

    #[must_use]
    pub fn access(&self) -> Option<String> {
        self.backend.get_item(ACCESS_TOKEN_KEY)
    }

    #[must_use]
    pub fn refresh(&self) -> Option<String> {
        self.backend.get_item(REFRESH_TOKEN_KEY)
    }

    /// Remove both values. Clearing an empty store is a no-op.
    pub fn clear(&self) {
        self.backend.remove_item(ACCESS_TOKEN_KEY);
        self.backend.remove_item(REFRESH_TOKEN_KEY);
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("has_access", &self.access().is_some())
            .field("has_refresh", &self.refresh().is_some())
            .finish()
    }
}
