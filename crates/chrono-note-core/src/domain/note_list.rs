//! Note List
//!
//! Ordered collection of notes. Every constructor and mutator leaves the
//! list sorted by ascending timestamp, with ties kept in insertion order.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use super::note::{Note, NoteId};

/// Why a sequence of notes cannot form a list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListViolation {
    #[error("duplicate note id `{0}`")]
    DuplicateId(NoteId),
    #[error("note `{0}` has empty content")]
    EmptyContent(NoteId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NoteList {
    notes: Vec<Note>,
}

impl NoteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from externally supplied notes, checking id uniqueness
    /// and non-blank content, then sorting.
    pub fn validated(notes: Vec<Note>) -> Result<Self, ListViolation> {
        {
            let mut seen = HashSet::with_capacity(notes.len());
            for note in &notes {
                if !note.is_persistable() {
                    return Err(ListViolation::EmptyContent(note.id.clone()));
                }
                if !seen.insert(&note.id) {
                    return Err(ListViolation::DuplicateId(note.id.clone()));
                }
            }
        }
        let mut list = Self { notes };
        list.sort();
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    pub fn position(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|note| &note.id == id)
    }

    pub fn contains(&self, id: &NoteId) -> bool {
        self.position(id).is_some()
    }

    pub(crate) fn insert(&mut self, note: Note) {
        self.notes.push(note);
        self.sort();
    }

    /// Replace a note's content, keeping its timestamp. Returns false if absent.
    pub(crate) fn replace_content(&mut self, id: &NoteId, content: String) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| &note.id == id) else {
            return false;
        };
        note.content = content;
        self.sort();
        true
    }

    /// Remove a note by id. Returns false if absent.
    pub(crate) fn remove(&mut self, id: &NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| &note.id != id);
        self.sort();
        self.notes.len() != before
    }

    fn sort(&mut self) {
        self.notes.sort_by_key(|note| note.timestamp);
    }
}

impl<'de> Deserialize<'de> for NoteList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let notes = Vec::<Note>::deserialize(deserializer)?;
        NoteList::validated(notes).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a NoteList {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
