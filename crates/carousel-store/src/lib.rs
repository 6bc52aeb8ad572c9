//! Key-value local storage port and the carousel's typed view over it.
//!
//! [`KeyValueStore`] mirrors the browser `localStorage` contract: string
//! keys, string values, synchronous access. [`CarouselStorage`] layers the
//! two keys the carousel owns (product cache and favorites) on top of any
//! store.

pub mod error;
pub mod file;
pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

use carousel_core::{AppConfig, Favorites, Product};

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
#[cfg(target_arch = "wasm32")]
pub use web::WebStorage;

/// String-keyed, string-valued persistent storage.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, or `None` when the key is unset.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes `key`. Removing an unset key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Typed access to the product cache and favorites keys.
///
/// Reads never fail: a missing, unreadable, or malformed entry is reported
/// as empty (and logged), because nothing downstream can act on the error.
#[derive(Debug)]
pub struct CarouselStorage<S> {
    store: S,
    cache_key: String,
    favorites_key: String,
}

impl<S: KeyValueStore> CarouselStorage<S> {
    pub fn new(store: S, cache_key: impl Into<String>, favorites_key: impl Into<String>) -> Self {
        Self {
            store,
            cache_key: cache_key.into(),
            favorites_key: favorites_key.into(),
        }
    }

    /// Builds a storage view using the keys from `config`.
    pub fn from_config(store: S, config: &AppConfig) -> Self {
        Self::new(store, &config.cache_key, &config.favorites_key)
    }

    /// Current favorites; empty when unset or unreadable.
    #[must_use]
    pub fn favorites(&self) -> Favorites {
        let Some(raw) = self.read(&self.favorites_key) else {
            return Favorites::default();
        };
        serde_json::from_str::<Option<Favorites>>(&raw)
            .unwrap_or_else(|e| {
                tracing::warn!(key = %self.favorites_key, error = %e, "stored favorites are not a JSON id array; treating as empty");
                None
            })
            .unwrap_or_default()
    }

    /// Persists `favorites` as a JSON array of ids.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the value cannot be encoded or written.
    pub fn save_favorites(&mut self, favorites: &Favorites) -> Result<(), StoreError> {
        let raw = serde_json::to_string(favorites)?;
        self.store.set_item(&self.favorites_key, &raw)
    }

    /// Toggles `id` in the persisted favorites and returns whether it is a
    /// favorite afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the updated set cannot be written.
    pub fn toggle_favorite(&mut self, id: i64) -> Result<bool, StoreError> {
        let mut favorites = self.favorites();
        let filled = favorites.toggle(id);
        self.save_favorites(&favorites)?;
        Ok(filled)
    }

    /// Removes the favorites key entirely.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be written.
    pub fn clear_favorites(&mut self) -> Result<(), StoreError> {
        self.store.remove_item(&self.favorites_key)
    }

    /// Products from the last successful fetch, or `None` when no usable
    /// cache exists.
    #[must_use]
    pub fn cached_products(&self) -> Option<Vec<Product>> {
        let raw = self.read(&self.cache_key)?;
        match serde_json::from_str::<Option<Vec<Product>>>(&raw) {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(key = %self.cache_key, error = %e, "cached product list does not parse; ignoring it");
                None
            }
        }
    }

    /// Overwrites the product cache with a fetched body, stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be written.
    pub fn cache_products(&mut self, body: &str) -> Result<(), StoreError> {
        self.store.set_item(&self.cache_key, body)
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn read(&self, key: &str) -> Option<String> {
        self.store.get_item(key).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "local storage read failed; treating as unset");
            None
        })
    }
}
