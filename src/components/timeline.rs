//! Timeline Component
//!
//! Notes grouped under day headings, oldest first.

use leptos::prelude::*;

use chrono_note_core::timeline::sections;

use crate::browser;
use crate::components::NoteItem;
use crate::context::use_app_context;
use crate::store::UiStateStoreFields;

#[component]
pub fn Timeline() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="timeline">
            {move || {
                let notes = ctx.ui.notes().get();
                if notes.is_empty() {
                    return view! { <p class="timeline-empty">"Nothing written yet."</p> }.into_any();
                }
                let last_id = notes.last().map(|note| note.id.clone());
                sections(&notes, ctx.now_millis(), browser::local_offset())
                    .into_iter()
                    .map(|section| {
                        let entries = section
                            .entries
                            .into_iter()
                            .map(|entry| {
                                let is_last = last_id.as_ref() == Some(&entry.note.id);
                                view! { <NoteItem entry=entry is_last=is_last /> }
                            })
                            .collect_view();
                        view! {
                            <section class="day-section">
                                <h2 class="day-heading">{section.heading}</h2>
                                <div class="day-entries">{entries}</div>
                            </section>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
