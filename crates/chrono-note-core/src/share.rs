//! Share Links
//!
//! A share payload is the JSON array of notes in URL-safe base64 without
//! padding. Links produced by earlier builds used the standard alphabet over
//! a percent-encoded JSON string; `decode` still reads those.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use percent_encoding::percent_decode_str;
use serde_json::Value;

use crate::domain::{NoteError, NoteList, NoteResult};

const REQUIRED_KEYS: [&str; 3] = ["id", "content", "timestamp"];

/// Encode a list for embedding in a URL
pub fn encode(notes: &NoteList) -> NoteResult<String> {
    if notes.is_empty() {
        return Err(NoteError::EmptyShare);
    }
    let json = serde_json::to_string(notes).map_err(invalid)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a payload back into a sorted, validated list
pub fn decode(payload: &str) -> NoteResult<NoteList> {
    let payload = payload.trim();
    if payload.is_empty() {
        return Err(invalid_msg("payload is empty"));
    }
    let bytes = decode_base64(payload)?;
    let text = String::from_utf8(bytes).map_err(|_| invalid_msg("payload is not UTF-8"))?;
    let text = if text.starts_with('%') {
        percent_decode_str(&text)
            .decode_utf8()
            .map_err(|_| invalid_msg("percent-encoded payload is not UTF-8"))?
            .into_owned()
    } else {
        text
    };
    let value: Value = serde_json::from_str(&text).map_err(invalid)?;
    check_shape(&value)?;
    serde_json::from_value(value).map_err(invalid)
}

/// `{base}/?{param}={payload}`
pub fn share_url(base: &str, param: &str, payload: &str) -> String {
    format!("{}/?{}={}", base.trim_end_matches('/'), param, payload)
}

/// Pull the share payload out of a query string such as `?notes=...`
pub fn payload_from_query(query: &str, param: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == param)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
        .filter(|value| !value.trim().is_empty())
}

fn decode_base64(payload: &str) -> NoteResult<Vec<u8>> {
    if let Ok(bytes) = URL_SAFE_NO_PAD.decode(payload) {
        return Ok(bytes);
    }
    // Query parsers may have turned `+` into a space
    STANDARD
        .decode(payload.replace(' ', "+"))
        .map_err(|e| invalid_msg(&format!("not base64: {}", e)))
}

fn check_shape(value: &Value) -> NoteResult<()> {
    let entries = value
        .as_array()
        .ok_or_else(|| invalid_msg("expected an array of notes"))?;
    for (index, entry) in entries.iter().enumerate() {
        let object = entry
            .as_object()
            .ok_or_else(|| invalid_msg(&format!("entry {} is not an object", index)))?;
        if let Some(key) = REQUIRED_KEYS.iter().find(|key| !object.contains_key(**key)) {
            return Err(invalid_msg(&format!("entry {} has no `{}`", index, key)));
        }
    }
    Ok(())
}

fn invalid(err: serde_json::Error) -> NoteError {
    NoteError::SharePayloadInvalid(err.to_string())
}

fn invalid_msg(msg: &str) -> NoteError {
    NoteError::SharePayloadInvalid(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Note, NoteId};

    fn sample() -> NoteList {
        NoteList::validated(vec![
            Note::new(NoteId::new("1"), "buy milk", 1000),
            Note::new(NoteId::new("2"), "café ☕ & \"quotes\"", 2000),
        ])
        .unwrap()
    }

    fn invalid_reason(payload: &str) -> String {
        match decode(payload) {
            Err(NoteError::SharePayloadInvalid(reason)) => reason,
            other => panic!("expected invalid payload, got {:?}", other),
        }
    }

    #[test]
    fn test_payload_is_url_safe() {
        let payload = encode(&sample()).unwrap();
        assert!(payload
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_eq!(decode(&payload).unwrap(), sample());
    }

    #[test]
    fn test_empty_list_cannot_be_shared() {
        assert_eq!(encode(&NoteList::new()), Err(NoteError::EmptyShare));
    }

    #[test]
    fn test_legacy_payload_is_accepted() {
        // standard base64 over an encodeURIComponent'd JSON string
        let json = r#"[{"id":"1","content":"hi there","timestamp":5}]"#;
        let escaped: String = percent_encoding::utf8_percent_encode(json, percent_encoding::NON_ALPHANUMERIC).to_string();
        let payload = STANDARD.encode(escaped);
        let list = decode(&payload).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.as_slice()[0].content, "hi there");
    }

    #[test]
    fn test_unsorted_payload_is_sorted() {
        let json = r#"[{"id":"b","content":"late","timestamp":9},{"id":"a","content":"early","timestamp":1}]"#;
        let list = decode(&URL_SAFE_NO_PAD.encode(json)).unwrap();
        assert_eq!(list.as_slice()[0].id.as_str(), "a");
    }

    #[test]
    fn test_structurally_invalid_payloads() {
        assert!(invalid_reason("").contains("empty"));
        assert!(invalid_reason("!!!not base64!!!").contains("base64"));
        assert!(invalid_reason(&URL_SAFE_NO_PAD.encode("{\"id\":1}")).contains("array"));
        assert!(invalid_reason(&URL_SAFE_NO_PAD.encode("[1,2]")).contains("not an object"));
        assert!(invalid_reason(&URL_SAFE_NO_PAD.encode(r#"[{"id":"a","content":"x"}]"#))
            .contains("timestamp"));
        invalid_reason(&URL_SAFE_NO_PAD.encode("[{\"id\":\"a\""));
        invalid_reason(&URL_SAFE_NO_PAD.encode(r#"[{"id":"a","content":"x","timestamp":"soon"}]"#));
    }

    #[test]
    fn test_truncated_payload_is_invalid() {
        let payload = encode(&sample()).unwrap();
        let truncated = &payload[..payload.len() / 2];
        assert!(matches!(decode(truncated), Err(NoteError::SharePayloadInvalid(_))));
    }

    #[test]
    fn test_share_url() {
        assert_eq!(share_url("https://notes.example/", "notes", "abc"), "https://notes.example/?notes=abc");
        assert_eq!(share_url("https://notes.example", "notes", "abc"), "https://notes.example/?notes=abc");
    }

    #[test]
    fn test_payload_from_query() {
        assert_eq!(payload_from_query("?notes=abc", "notes").as_deref(), Some("abc"));
        assert_eq!(payload_from_query("?a=1&notes=x%2By", "notes").as_deref(), Some("x+y"));
        assert_eq!(payload_from_query("?notes=", "notes"), None);
        assert_eq!(payload_from_query("", "notes"), None);
        assert_eq!(payload_from_query("?other=abc", "notes"), None);
    }
}
