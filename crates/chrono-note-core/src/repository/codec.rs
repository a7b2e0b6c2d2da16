//! Persisted record codec
//!
//! Current format: `{"version":1,"notes":[...]}`. A bare JSON array of notes,
//! as written before the version field existed, reads as version 1.

use serde::Serialize;
use serde_json::Value;

use crate::domain::{NoteError, NoteList, NoteResult};

pub const FORMAT_VERSION: u64 = 1;

#[derive(Serialize)]
struct Record<'a> {
    version: u64,
    notes: &'a NoteList,
}

pub fn encode_record(notes: &NoteList) -> NoteResult<String> {
    serde_json::to_string(&Record {
        version: FORMAT_VERSION,
        notes,
    })
    .map_err(|e| NoteError::StorageUnavailable(format!("failed to serialize notes: {}", e)))
}

pub fn decode_record(raw: &str) -> NoteResult<NoteList> {
    let value: Value = serde_json::from_str(raw).map_err(corrupt)?;
    let notes = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut record) => {
            match record.get("version").and_then(Value::as_u64) {
                Some(FORMAT_VERSION) => {}
                Some(other) => {
                    return Err(NoteError::StorageCorrupt(format!(
                        "unsupported format version {}",
                        other
                    )))
                }
                None => {
                    return Err(NoteError::StorageCorrupt(
                        "record has no numeric `version`".to_string(),
                    ))
                }
            }
            record
                .remove("notes")
                .ok_or_else(|| NoteError::StorageCorrupt("record has no `notes`".to_string()))?
        }
        _ => {
            return Err(NoteError::StorageCorrupt(
                "expected an array or a versioned record".to_string(),
            ))
        }
    };
    serde_json::from_value(notes).map_err(corrupt)
}

fn corrupt(err: serde_json::Error) -> NoteError {
    NoteError::StorageCorrupt(err.to_string())
}
