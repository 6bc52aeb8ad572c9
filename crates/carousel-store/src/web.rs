//! `window.localStorage` as a [`KeyValueStore`].

use wasm_bindgen::JsValue;

use crate::{KeyValueStore, StoreError};

/// The page's origin-scoped local storage.
#[derive(Debug, Clone)]
pub struct WebStorage {
    storage: web_sys::Storage,
}

impl WebStorage {
    /// Opens `window.localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Web`] when there is no window or the browser
    /// denies access to local storage.
    pub fn local() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Web {
            reason: "no window".to_owned(),
        })?;
        let storage = window
            .local_storage()
            .map_err(web_error)?
            .ok_or_else(|| StoreError::Web {
                reason: "localStorage is unavailable".to_owned(),
            })?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for WebStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(web_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(web_error)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        self.storage.remove_item(key).map_err(web_error)
    }
}

fn web_error(value: JsValue) -> StoreError {
    StoreError::Web {
        reason: value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    }
}
