//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The note engine
//! stays the source of truth; `notes` mirrors its list after every operation.

use leptos::prelude::*;
use reactive_stores::Store;

use chrono_note_core::{EditSession, Note, NoteId, Notice};

/// The note currently being edited in place
#[derive(Clone, Debug, PartialEq)]
pub struct EditingNote {
    pub id: NoteId,
    pub session: EditSession,
}

/// A notice on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Sorted notes as last returned by the engine
    pub notes: Vec<Note>,
    /// At most one note is edited at a time
    pub editing: Option<EditingNote>,
    /// Visible notices, oldest first
    pub toasts: Vec<Toast>,
    /// Counter for toast ids
    pub next_toast_id: u32,
}

impl UiState {
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes,
            ..Default::default()
        }
    }
}

pub type UiStore = Store<UiState>;

/// Remove a toast from the store by ID
pub fn store_remove_toast(store: &UiStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

/// Push a toast and return its ID
pub fn store_push_toast(store: &UiStore, notice: Notice) -> u32 {
    let id = {
        let next_field = store.next_toast_id();
        let mut next = next_field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast { id, notice });
    id
}
