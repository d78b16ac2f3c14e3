//! `localStorage`-backed [`SessionStorage`] for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The handle to `window.localStorage` is looked up on every call rather than
//! held, so the store stays `Send + Sync` and can live in a reactive signal.
//! Outside the browser every read misses and every write reports
//! [`StorageError::Unavailable`].

#[cfg(test)]
#[path = "browser_storage_test.rs"]
mod browser_storage_test;

use session::storage::{SessionStorage, StorageError};

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "csr")]
fn write_error(key: &str, err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Write { key: key.to_owned(), message: format!("{err:?}") }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage.set_item(key, value).map_err(|e| write_error(key, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage.remove_item(key).map_err(|e| write_error(key, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}
