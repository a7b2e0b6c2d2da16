//! Toaster Component
//!
//! Stack of transient notices; each one dismisses itself after a few seconds.

use leptos::prelude::*;

use chrono_note_core::NoticeVariant;

use crate::context::use_app_context;
use crate::store::UiStateStoreFields;

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toaster">
            <For
                each=move || ctx.ui.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notice.variant {
                        NoticeVariant::Destructive => "toast destructive",
                        NoticeVariant::Default => "toast",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast-text">
                                <div class="toast-title">{toast.notice.title}</div>
                                {toast.notice.description.map(|description| view! {
                                    <div class="toast-description">{description}</div>
                                })}
                            </div>
                            <button class="toast-close" on:click=move |_| ctx.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
