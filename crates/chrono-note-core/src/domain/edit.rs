//! Edit Session
//!
//! Lifecycle of one note while the user edits it in place:
//! `Viewing -> Editing -> Viewing | Deleted`, or back to `Viewing` on cancel.
//! The session never talks to the store; `commit` yields the store call to make.

/// What a committed edit asks the store to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Buffer matches the original, nothing to call
    Unchanged,
    /// Replace the note's content
    Update(String),
    /// Buffer was emptied, remove the note
    Delete,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Viewing,
    Editing {
        original: String,
        buffer: String,
    },
    /// Terminal
    Deleted,
}

impl EditSession {
    /// Start editing. Ignored unless currently viewing.
    pub fn begin(&mut self, original: &str) {
        if matches!(self, EditSession::Viewing) {
            *self = EditSession::Editing {
                original: original.to_string(),
                buffer: original.to_string(),
            };
        }
    }

    /// Replace the pending buffer
    pub fn input(&mut self, text: &str) {
        if let EditSession::Editing { buffer, .. } = self {
            buffer.clear();
            buffer.push_str(text);
        }
    }

    /// Finish editing. Returns `None` when no edit was in progress.
    pub fn commit(&mut self) -> Option<EditOutcome> {
        if !self.is_editing() {
            return None;
        }
        let EditSession::Editing { original, buffer } = std::mem::take(self) else {
            return None;
        };
        if buffer.trim().is_empty() {
            *self = EditSession::Deleted;
            return Some(EditOutcome::Delete);
        }
        *self = EditSession::Viewing;
        if buffer == original {
            Some(EditOutcome::Unchanged)
        } else {
            Some(EditOutcome::Update(buffer))
        }
    }

    /// Drop the pending buffer without touching the note
    pub fn cancel(&mut self) {
        if self.is_editing() {
            *self = EditSession::Viewing;
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, EditSession::Deleted)
    }

    pub fn buffer(&self) -> Option<&str> {
        match self {
            EditSession::Editing { buffer, .. } => Some(buffer),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_unchanged() {
        let mut session = EditSession::default();
        session.begin("buy milk");
        assert_eq!(session.commit(), Some(EditOutcome::Unchanged));
        assert_eq!(session, EditSession::Viewing);
    }

    #[test]
    fn test_commit_update() {
        let mut session = EditSession::default();
        session.begin("buy milk");
        session.input("buy oat milk");
        assert_eq!(session.buffer(), Some("buy oat milk"));
        assert_eq!(session.commit(), Some(EditOutcome::Update("buy oat milk".into())));
        assert!(!session.is_editing());
    }

    #[test]
    fn test_commit_empty_deletes() {
        let mut session = EditSession::default();
        session.begin("buy milk");
        session.input("  \n ");
        assert_eq!(session.commit(), Some(EditOutcome::Delete));
        assert!(session.is_deleted());

        // terminal
        session.begin("again");
        assert!(session.is_deleted());
        assert_eq!(session.commit(), None);
    }

    #[test]
    fn test_cancel_discards_buffer() {
        let mut session = EditSession::default();
        session.begin("buy milk");
        session.input("something else");
        session.cancel();
        assert_eq!(session, EditSession::Viewing);
        assert_eq!(session.commit(), None);
    }

    #[test]
    fn test_input_ignored_when_viewing() {
        let mut session = EditSession::default();
        session.input("ignored");
        assert_eq!(session.buffer(), None);
    }
}
