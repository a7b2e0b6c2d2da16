//! Clipboard

use wasm_bindgen_futures::JsFuture;

use super::js_error;

/// Write text to the system clipboard
pub async fn write_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ()).map_err(js_error)
}
