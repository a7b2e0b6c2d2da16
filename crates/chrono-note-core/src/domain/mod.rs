//! Domain Layer
//!
//! Contains the note entities and the rules every note list obeys.
//! This layer has NO external dependencies (except serde and thiserror).

mod edit;
mod error;
mod note;
mod note_list;

pub use edit::{EditOutcome, EditSession};
pub use error::{NoteError, NoteResult, Notice, NoticeVariant};
pub use note::{Note, NoteId};
pub use note_list::{ListViolation, NoteList};
