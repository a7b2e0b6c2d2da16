//! Log Panel Component
//!
//! Collapsible view of the lines retained by the console logger.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());
    let refresh = move || set_lines.set(console_logger::recent());

    view! {
        <footer class="log-panel">
            <button
                class="log-toggle"
                on:click=move |_| {
                    if !open.get_untracked() {
                        refresh();
                    }
                    set_open.update(|open| *open = !*open);
                }
            >
                {move || if open.get() { "Hide log" } else { "Show log" }}
            </button>
            <Show when=move || open.get()>
                <button class="log-refresh" on:click=move |_| refresh()>
                    "Refresh"
                </button>
                <pre class="log-lines">
                    {move || {
                        let lines = lines.get();
                        if lines.is_empty() { "No log lines yet.".to_string() } else { lines.join("\n") }
                    }}
                </pre>
            </Show>
        </footer>
    }
}
