//! New Note Input Component
//!
//! Single-line input with a live clock; Enter appends a note.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::browser;
use crate::context::use_app_context;

#[component]
pub fn NewNoteInput() -> impl IntoView {
    let ctx = use_app_context();
    let (text, set_text) = signal(String::new());
    let (now, set_now) = signal(browser::now_label());

    // The input lives as long as the page
    Interval::new(1_000, move || set_now.set(browser::now_label())).forget();

    let add = move || {
        if ctx.add_note(&text.get_untracked()) {
            set_text.set(String::new());
        }
    };

    view! {
        <div class="new-note-row">
            <span class="new-note-clock">{move || now.get()}</span>
            <input
                type="text"
                class="new-note-input"
                placeholder="Start writing..."
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        add();
                    }
                }
            />
        </div>
    }
}
