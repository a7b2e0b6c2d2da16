//! Note Store
//!
//! Owns the note list and is the only writer of the persisted record.
//! Every mutation builds the next list, persists it, and only then swaps it
//! in, so a rejected write leaves memory and storage as they were.

use chrono::FixedOffset;
use log::{debug, warn};

use crate::config::StoreConfig;
use crate::domain::{Note, NoteError, NoteId, NoteList, NoteResult};
use crate::export;
use crate::repository::codec::{decode_record, encode_record};
use crate::repository::{Clock, IdGenerator, KeyValueStorage};
use crate::share;

pub struct NoteStore<S, C, G> {
    storage: S,
    clock: C,
    ids: G,
    config: StoreConfig,
    notes: NoteList,
}

impl<S: KeyValueStorage, C: Clock, G: IdGenerator> NoteStore<S, C, G> {
    /// A store with an empty list; nothing is read until `load`
    pub fn new(storage: S, clock: C, ids: G, config: StoreConfig) -> Self {
        Self {
            storage,
            clock,
            ids,
            config,
            notes: NoteList::new(),
        }
    }

    /// Construct and load. A load failure still yields a usable store with
    /// an empty list, alongside the error to report.
    pub fn open(storage: S, clock: C, ids: G, config: StoreConfig) -> (Self, Option<NoteError>) {
        let mut store = Self::new(storage, clock, ids, config);
        let error = store.load().err();
        (store, error)
    }

    pub fn notes(&self) -> &NoteList {
        &self.notes
    }

    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Replace the in-memory list with the persisted one. An absent record
    /// is an empty list; an unreadable one empties the list and errors.
    pub fn load(&mut self) -> NoteResult<&NoteList> {
        let loaded = self
            .storage
            .get(&self.config.storage_key)
            .and_then(|raw| match raw {
                Some(raw) => decode_record(&raw),
                None => Ok(NoteList::new()),
            });
        match loaded {
            Ok(notes) => {
                debug!("loaded {} notes from `{}`", notes.len(), self.config.storage_key);
                self.notes = notes;
                Ok(&self.notes)
            }
            Err(e) => {
                warn!("falling back to an empty list: {}", e);
                self.notes = NoteList::new();
                Err(e)
            }
        }
    }

    /// Re-read storage, e.g. after another tab wrote to it
    pub fn reload(&mut self) -> NoteResult<&NoteList> {
        self.load()
    }

    /// Append a note stamped with the current time. Blank input is ignored.
    pub fn add(&mut self, content: &str) -> NoteResult<&NoteList> {
        let content = content.trim();
        if content.is_empty() {
            return Ok(&self.notes);
        }
        let note = Note::new(self.ids.next_id(), content, self.clock.now_millis());
        debug!("adding note {} at {}", note.id, note.timestamp);
        let mut next = self.notes.clone();
        next.insert(note);
        self.commit(next)
    }

    /// Replace a note's content, keeping its timestamp. Blank content deletes
    /// the note; unknown ids and unchanged content are no-ops.
    pub fn update(&mut self, id: &NoteId, content: &str) -> NoteResult<&NoteList> {
        let content = content.trim();
        if content.is_empty() {
            return self.delete(id);
        }
        match self.notes.get(id) {
            Some(note) if note.content != content => {}
            _ => return Ok(&self.notes),
        }
        debug!("updating note {}", id);
        let mut next = self.notes.clone();
        next.replace_content(id, content.to_string());
        self.commit(next)
    }

    /// Remove a note. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &NoteId) -> NoteResult<&NoteList> {
        if !self.notes.contains(id) {
            return Ok(&self.notes);
        }
        debug!("deleting note {}", id);
        let mut next = self.notes.clone();
        next.remove(id);
        self.commit(next)
    }

    /// Replace the whole list with a decoded share payload. On any failure
    /// the current list and storage are untouched.
    pub fn replace_from_share(&mut self, payload: &str) -> NoteResult<&NoteList> {
        let next = share::decode(payload).map_err(|e| {
            warn!("rejected share payload: {}", e);
            e
        })?;
        debug!("replacing list with {} shared notes", next.len());
        self.commit(next)
    }

    pub fn serialize_for_share(&self) -> NoteResult<String> {
        share::encode(&self.notes)
    }

    /// Full share link under `base`, e.g. the page origin
    pub fn share_url(&self, base: &str) -> NoteResult<String> {
        let payload = self.serialize_for_share()?;
        Ok(share::share_url(base, &self.config.share_param, &payload))
    }

    pub fn export_text(&self, offset: FixedOffset) -> String {
        export::export_text(&self.notes, &self.config.export_delimiter, offset)
    }

    pub fn export_filename(&self, offset: FixedOffset) -> String {
        export::export_filename(&self.config.export_prefix, self.clock.now_millis(), offset)
    }

    fn commit(&mut self, next: NoteList) -> NoteResult<&NoteList> {
        let raw = encode_record(&next)?;
        self.storage.set(&self.config.storage_key, &raw).map_err(|e| {
            warn!("write to `{}` failed: {}", self.config.storage_key, e);
            e
        })?;
        self.notes = next;
        Ok(&self.notes)
    }
}
