//! localStorage adapter

use chrono_note_core::{KeyValueStorage, MemoryStorage, NoteError, NoteResult};

use super::js_error;

/// `window.localStorage`, or an in-memory map when the browser denies it
/// (private mode, storage disabled). Notes in the fallback do not survive
/// a reload.
pub enum WebStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl WebStorage {
    pub fn from_window() -> Self {
        match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => WebStorage::Local(storage),
            None => {
                log::warn!("localStorage unavailable, keeping notes in memory only");
                WebStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

fn unavailable(value: wasm_bindgen::JsValue) -> NoteError {
    NoteError::StorageUnavailable(js_error(value))
}

impl KeyValueStorage for WebStorage {
    fn get(&self, key: &str) -> NoteResult<Option<String>> {
        match self {
            WebStorage::Local(storage) => storage.get_item(key).map_err(unavailable),
            WebStorage::Memory(storage) => storage.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> NoteResult<()> {
        match self {
            WebStorage::Local(storage) => storage.set_item(key, value).map_err(unavailable),
            WebStorage::Memory(storage) => storage.set(key, value),
        }
    }
}
