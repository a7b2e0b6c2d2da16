//! Title Bar Component
//!
//! App title with share, export and reload actions.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::UiStateStoreFields;

#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_app_context();

    let count_label = move || match ctx.ui.notes().read().len() {
        1 => "1 note".to_string(),
        n => format!("{} notes", n),
    };

    view! {
        <header class="titlebar">
            <div class="titlebar-heading">
                <span class="titlebar-title">"ChronoNote"</span>
                <span class="titlebar-count">{count_label}</span>
            </div>

            <div class="titlebar-controls">
                <button class="titlebar-btn share" title="Share notes" on:click=move |_| ctx.share()>
                    "Share"
                </button>
                <button class="titlebar-btn export" title="Download as text" on:click=move |_| ctx.export()>
                    "Export"
                </button>
                <button class="titlebar-btn reload" title="Reload notes" on:click=move |_| ctx.reload()>
                    "Reload"
                </button>
            </div>
        </header>
    }
}
