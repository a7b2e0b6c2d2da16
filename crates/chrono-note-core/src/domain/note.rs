//! Note Entity
//!
//! One timestamped journal entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque note identifier, unique within one list
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, assigned at creation
    pub id: NoteId,
    /// Free-form text, never blank once persisted
    pub content: String,
    /// Milliseconds since the Unix epoch, fixed at creation
    pub timestamp: i64,
}

impl Note {
    pub fn new(id: NoteId, content: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id,
            content: content.into(),
            timestamp,
        }
    }

    /// Whether the note may be stored (content is not blank)
    pub fn is_persistable(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_wire_shape() {
        let note = Note::new(NoteId::new("a1"), "buy milk", 1000);
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"id":"a1","content":"buy milk","timestamp":1000}"#);
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let note: Note =
            serde_json::from_str(r#"{"id":"a","content":"x","timestamp":5,"pinned":true}"#).unwrap();
        assert_eq!(note.id.as_str(), "a");
        assert_eq!(note.timestamp, 5);
    }

    #[test]
    fn test_fractional_timestamp_is_rejected() {
        let result = serde_json::from_str::<Note>(r#"{"id":"a","content":"x","timestamp":1.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_note_is_not_persistable() {
        assert!(!Note::new(NoteId::new("a"), " \n\t", 1).is_persistable());
        assert!(Note::new(NoteId::new("a"), " x ", 1).is_persistable());
    }
}
