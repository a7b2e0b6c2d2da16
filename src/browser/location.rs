//! Address bar: share parameter and origin

use wasm_bindgen::JsValue;

use chrono_note_core::share::payload_from_query;

/// Share payload in the current URL, if any
pub fn share_payload(param: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    payload_from_query(&search, param)
}

/// `https://host[:port]` of the current page
pub fn origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Drop the query string without reloading, so a refresh does not
/// import the same link again
pub fn clear_query() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = window
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string());
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&path)) {
                log::warn!("failed to clear share link: {}", super::js_error(e));
            }
        }
        Err(e) => log::warn!("history unavailable: {}", super::js_error(e)),
    }
}
