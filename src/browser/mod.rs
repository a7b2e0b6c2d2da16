//! Browser Bindings
//!
//! Adapters binding the note engine's ports to web APIs, organized by concern.

mod clipboard;
mod clock;
mod download;
mod location;
mod storage;

pub use clipboard::write_clipboard;
pub use clock::{local_offset, now_label, BrowserClock};
pub use download::download_text;
pub use location::{clear_query, origin, share_payload};
pub use storage::WebStorage;

use wasm_bindgen::JsValue;

/// Render a thrown JS value for logs and error messages
pub(crate) fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
