//! Repository Layer - Core Traits
//!
//! Abstract interfaces over the environment the store runs in.
//! Implementations can use browser localStorage, in-memory maps, etc.
//! All operations are synchronous; the UI event loop is the only caller.

use std::rc::Rc;

use crate::domain::{NoteId, NoteResult};

/// String-keyed storage
pub trait KeyValueStorage {
    /// Read a value, `None` if the key is absent
    fn get(&self, key: &str) -> NoteResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> NoteResult<()>;
}

/// Wall clock in milliseconds since the Unix epoch
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Source of fresh note identifiers
pub trait IdGenerator {
    fn next_id(&self) -> NoteId;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Rc<T> {
    fn get(&self, key: &str) -> NoteResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> NoteResult<()> {
        (**self).set(key, value)
    }
}

impl<T: Clock + ?Sized> Clock for Rc<T> {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for Rc<T> {
    fn next_id(&self) -> NoteId {
        (**self).next_id()
    }
}
