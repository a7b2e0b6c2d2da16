//! Application Context
//!
//! Shared handles provided via Leptos Context API. Every note operation
//! goes through here: run it on the engine, mirror the resulting list into
//! the UI store, and turn any error into a notice.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use chrono_note_core::{
    EditOutcome, EditSession, NoteId, NoteResult, NoteStore, Notice, UuidGenerator,
};

use crate::browser::{self, BrowserClock, WebStorage};
use crate::store::{store_push_toast, store_remove_toast, EditingNote, UiStateStoreFields, UiStore};

pub type BrowserNoteStore = NoteStore<WebStorage, BrowserClock, UuidGenerator>;

/// How long a notice stays up
const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Note engine; holds `web_sys::Storage`, so it lives in local storage
    notes: StoredValue<BrowserNoteStore, LocalStorage>,
    /// Reactive UI state
    pub ui: UiStore,
}

impl AppContext {
    pub fn new(notes: BrowserNoteStore, ui: UiStore) -> Self {
        Self {
            notes: StoredValue::new_local(notes),
            ui,
        }
    }

    /// Apply a store operation and mirror the list, whatever the outcome
    fn run<T>(&self, op: impl FnOnce(&mut BrowserNoteStore) -> NoteResult<T>) -> Option<T> {
        let (result, notes) = self.notes.try_update_value(|store| {
            let result = op(store);
            (result, store.notes().as_slice().to_vec())
        })?;
        *self.ui.notes().write() = notes;
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("note operation failed: {}", e);
                self.notify(e.notice());
                None
            }
        }
    }

    /// Returns true if a note was added
    pub fn add_note(&self, content: &str) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        self.run(|store| store.add(content).map(|_| ())).is_some()
    }

    pub fn update_note(&self, id: &NoteId, content: &str) {
        self.run(|store| store.update(id, content).map(|_| ()));
    }

    pub fn delete_note(&self, id: &NoteId) {
        self.run(|store| store.delete(id).map(|_| ()));
    }

    pub fn reload(&self) {
        *self.ui.editing().write() = None;
        self.run(|store| store.reload().map(|_| ()));
    }

    /// Replace the list with a share payload. Returns true on success.
    pub fn import_shared(&self, payload: &str) -> bool {
        let imported = self.run(|store| store.replace_from_share(payload).map(|notes| notes.len()));
        if let Some(count) = imported {
            log::info!("imported {} shared notes", count);
        }
        imported.is_some()
    }

    /// Copy a share link for the current list to the clipboard
    pub fn share(&self) {
        let Some(origin) = browser::origin() else {
            log::warn!("page origin unavailable, cannot build share link");
            return;
        };
        let Some(url) = self.run(|store| store.share_url(&origin)) else {
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            match browser::write_clipboard(&url).await {
                Ok(()) => ctx.notify(Notice::info("Share link copied to clipboard!")),
                Err(e) => log::warn!("clipboard write failed: {}", e),
            }
        });
    }

    /// Current time on the engine's clock
    pub fn now_millis(&self) -> i64 {
        self.notes
            .try_with_value(|store| store.now_millis())
            .unwrap_or_default()
    }

    /// Download the list as plain text
    pub fn export(&self) {
        let offset = browser::local_offset();
        let Some((filename, text, empty)) = self.notes.try_with_value(|store| {
            (
                store.export_filename(offset),
                store.export_text(offset),
                store.notes().is_empty(),
            )
        }) else {
            return;
        };
        if empty {
            self.notify(Notice::info("No notes to export"));
            return;
        }
        if let Err(e) = browser::download_text(&filename, &text) {
            log::warn!("export failed: {}", e);
        }
    }

    /// Start editing a note, abandoning any other edit in progress
    pub fn begin_edit(&self, id: NoteId, content: &str) {
        let mut session = EditSession::default();
        session.begin(content);
        *self.ui.editing().write() = Some(EditingNote { id, session });
    }

    pub fn edit_input(&self, text: &str) {
        if let Some(editing) = self.ui.editing().write().as_mut() {
            editing.session.input(text);
        }
    }

    /// Commit the pending edit, if any
    pub fn commit_edit(&self) {
        let taken = self.ui.editing().write().take();
        let Some(mut editing) = taken else {
            return;
        };
        match editing.session.commit() {
            Some(EditOutcome::Update(content)) => self.update_note(&editing.id, &content),
            Some(EditOutcome::Delete) => self.delete_note(&editing.id),
            Some(EditOutcome::Unchanged) | None => {}
        }
    }

    /// Discard the pending edit
    pub fn cancel_edit(&self) {
        *self.ui.editing().write() = None;
    }

    pub fn notify(&self, notice: Notice) {
        let id = store_push_toast(&self.ui, notice);
        let ui = self.ui;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            store_remove_toast(&ui, id);
        });
    }

    pub fn dismiss(&self, toast_id: u32) {
        store_remove_toast(&self.ui, toast_id);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
