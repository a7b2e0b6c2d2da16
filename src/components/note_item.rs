//! Note Item Component
//!
//! One entry on the timeline: clock, gap badge and content. Clicking the
//! content edits it in place; Enter or blur commits, Escape cancels.

use leptos::html::Textarea;
use leptos::prelude::*;

use chrono_note_core::timeline::TimelineEntry;

use crate::components::DeleteNoteButton;
use crate::context::use_app_context;
use crate::store::UiStateStoreFields;

#[component]
pub fn NoteItem(entry: TimelineEntry, is_last: bool) -> impl IntoView {
    let ctx = use_app_context();
    let TimelineEntry { note, clock, gap } = entry;
    let id = note.id;
    let delete_id = id.clone();
    let content = note.content;

    let is_editing = {
        let id = id.clone();
        Memo::new(move |_| {
            ctx.ui
                .editing()
                .with(|editing| editing.as_ref().is_some_and(|e| e.id == id))
        })
    };

    let buffer = move || {
        ctx.ui.editing().with(|editing| {
            editing
                .as_ref()
                .and_then(|e| e.session.buffer())
                .unwrap_or_default()
                .to_string()
        })
    };

    let textarea_ref = NodeRef::<Textarea>::new();
    Effect::new(move |_| {
        if let Some(textarea) = textarea_ref.get() {
            let _ = textarea.focus();
        }
    });

    view! {
        <div class="note-item">
            <div class="note-rail">
                <div class="note-dot"></div>
                {(!is_last).then(|| view! { <div class="note-line"></div> })}
            </div>

            <div class="note-body">
                <div class="note-meta">
                    <span class="note-clock">{clock}</span>
                    {gap.map(|gap| view! { <span class="note-gap">{format!("+{}", gap)}</span> })}
                    <DeleteNoteButton id=delete_id />
                </div>

                {move || if is_editing.get() {
                    view! {
                        <textarea
                            class="note-edit"
                            node_ref=textarea_ref
                            prop:value=buffer
                            on:input=move |ev| ctx.edit_input(&event_target_value(&ev))
                            on:blur=move |_| ctx.commit_edit()
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                match ev.key().as_str() {
                                    "Enter" if !ev.shift_key() => {
                                        ev.prevent_default();
                                        ctx.commit_edit();
                                    }
                                    "Escape" => {
                                        ev.prevent_default();
                                        ctx.cancel_edit();
                                    }
                                    _ => {}
                                }
                            }
                        ></textarea>
                    }.into_any()
                } else {
                    let id = id.clone();
                    let content = content.clone();
                    let shown = content.clone();
                    view! {
                        <p
                            class="note-content"
                            title="Click to edit"
                            on:click=move |_| ctx.begin_edit(id.clone(), &content)
                        >
                            {shown}
                        </p>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
