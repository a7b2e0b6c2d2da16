//! Domain Errors
//!
//! No error here is fatal: each one maps to a notice for the user while the
//! store keeps its last good state.

use thiserror::Error;

/// Common result type for note operations
pub type NoteResult<T> = Result<T, NoteError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// Persisted record is unreadable or has the wrong shape
    #[error("stored notes are corrupt: {0}")]
    StorageCorrupt(String),
    /// Share link could not be decoded into a note list
    #[error("share payload is invalid: {0}")]
    SharePayloadInvalid(String),
    /// Sharing was requested with nothing to share
    #[error("there are no notes to share")]
    EmptyShare,
    /// The key/value backend refused a read or write
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl NoteError {
    /// User-facing notice for this error
    pub fn notice(&self) -> Notice {
        match self {
            NoteError::StorageCorrupt(_) => Notice::destructive(
                "Error loading notes",
                "Could not load notes from your browser's storage.",
            ),
            NoteError::SharePayloadInvalid(_) => Notice::destructive(
                "Error loading shared notes",
                "The share link appears to be corrupted or invalid.",
            ),
            NoteError::EmptyShare => Notice::destructive(
                "Cannot share empty notes",
                "Add some notes before sharing.",
            ),
            NoteError::StorageUnavailable(_) => Notice::destructive(
                "Error saving notes",
                "Your browser's storage rejected the change, so it was not applied.",
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// A transient message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: NoticeVariant::Destructive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_notices() {
        let notice = NoteError::EmptyShare.notice();
        assert_eq!(notice.title, "Cannot share empty notes");
        assert_eq!(notice.variant, NoticeVariant::Destructive);

        let notice = NoteError::SharePayloadInvalid("bad base64".into()).notice();
        assert_eq!(notice.title, "Error loading shared notes");
    }

    #[test]
    fn test_error_display_carries_detail() {
        let err = NoteError::StorageCorrupt("expected an array".into());
        assert_eq!(err.to_string(), "stored notes are corrupt: expected an array");
    }
}
