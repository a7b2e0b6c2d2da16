//! ChronoNote App
//!
//! Wires the note engine to the browser and lays out the timeline.

use leptos::prelude::*;
use reactive_stores::Store;

use chrono_note_core::{NoteStore, StoreConfig, UuidGenerator};

use crate::browser::{self, BrowserClock, WebStorage};
use crate::components::{LogPanel, NewNoteInput, Timeline, TitleBar, Toaster};
use crate::context::AppContext;
use crate::store::UiState;

#[component]
pub fn App() -> impl IntoView {
    let config = StoreConfig::default();
    let share_param = config.share_param.clone();

    // Storage first, then a share link on top of it
    let (notes, load_error) =
        NoteStore::open(WebStorage::from_window(), BrowserClock, UuidGenerator, config);
    log::info!("opened note store with {} notes", notes.notes().len());

    let ui = Store::new(UiState::with_notes(notes.notes().as_slice().to_vec()));
    let ctx = AppContext::new(notes, ui);
    provide_context(ctx);

    if let Some(e) = load_error {
        ctx.notify(e.notice());
    }

    if let Some(payload) = browser::share_payload(&share_param) {
        if ctx.import_shared(&payload) {
            browser::clear_query();
        }
    }

    view! {
        <div class="chrono-note">
            <TitleBar />

            <main class="timeline-body">
                <Timeline />
                <NewNoteInput />
            </main>

            <LogPanel />

            <Toaster />
        </div>
    }
}
