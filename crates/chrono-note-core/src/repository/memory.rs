//! In-memory key/value storage
//!
//! Used by tests and as the fallback when the browser denies localStorage.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::traits::KeyValueStorage;
use crate::domain::{NoteError, NoteResult};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    read_only: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Make every subsequent write fail, like a full quota
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check_writable(&self) -> NoteResult<()> {
        if self.read_only.get() {
            return Err(NoteError::StorageUnavailable("storage is read-only".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> NoteResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> NoteResult<()> {
        self.check_writable()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
