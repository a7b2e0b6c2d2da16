//! Delete Note Button Component
//!
//! Inline delete with a confirm step, so a stray click cannot drop a note.

use leptos::prelude::*;

use chrono_note_core::NoteId;

use crate::context::use_app_context;

#[component]
pub fn DeleteNoteButton(id: NoteId) -> impl IntoView {
    let ctx = use_app_context();
    let (confirming, set_confirming) = signal(false);
    let id = StoredValue::new(id);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button
                    class="note-delete-btn"
                    title="Delete note"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(true);
                    }
                >
                    "×"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        id.with_value(|id| ctx.delete_note(id));
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
