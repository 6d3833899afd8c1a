//! Browser persistence and environment helpers for the app shell.

use crate::i18n::{LOCALE_STORAGE_KEY, LocaleStore, StorageError};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

/// `localStorage`-backed locale store.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStore;

impl LocaleStore for BrowserStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(LOCALE_STORAGE_KEY)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }

    fn save(&mut self, tag: &str) -> Result<(), StorageError> {
        local_storage()?;
        LocalStorage::set(LOCALE_STORAGE_KEY, tag).map_err(|err| StorageError::Rejected {
            key: LOCALE_STORAGE_KEY,
            detail: err.to_string(),
        })
    }
}

// `LocalStorage::raw` throws when storage is disabled, so probe first.
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    match window().local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable("no localStorage".to_string())),
        Err(err) => Err(StorageError::Unavailable(format!("{err:?}"))),
    }
}

/// Origin the checkout endpoint is resolved against.
pub(crate) fn api_base_url() -> String {
    window()
        .location()
        .origin()
        .unwrap_or_else(|_| "http://localhost:3000".to_string())
}

pub(crate) fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
