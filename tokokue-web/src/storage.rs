//! `localStorage`-backed cart storage.
use crate::dom;
use gloo::storage::{LocalStorage, Storage};
use thiserror::Error;
use tokokue_core::CartStorage;

#[derive(Debug, Error)]
pub enum WebStorageError {
    #[error("localStorage {op} failed: {message}")]
    Operation { op: &'static str, message: String },
}

impl WebStorageError {
    fn op(op: &'static str, err: &wasm_bindgen::JsValue) -> Self {
        Self::Operation {
            op,
            message: dom::js_error_message(err),
        }
    }
}

/// Cart storage that reads and writes the browser's `localStorage`.
///
/// The snapshot is already JSON, so it goes through the raw handle rather
/// than `LocalStorage::set`, which would encode it a second time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebCartStorage;

impl CartStorage for WebCartStorage {
    type Error = WebStorageError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|err| WebStorageError::op("read", &err))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| WebStorageError::op("write", &err))
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        LocalStorage::delete(key);
        Ok(())
    }
}
