//! Plain-text export

use chrono::{DateTime, FixedOffset};

use crate::domain::{Note, NoteList};

const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One `[stamp]\ncontent` block per note, in list order, joined by `delimiter`
pub fn export_text(notes: &NoteList, delimiter: &str, offset: FixedOffset) -> String {
    notes
        .iter()
        .map(|note| block(note, offset))
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// `{prefix}-YYYY-MM-DD.txt` for the calendar date of `now_millis`
pub fn export_filename(prefix: &str, now_millis: i64, offset: FixedOffset) -> String {
    let date = DateTime::from_timestamp_millis(now_millis)
        .map(|dt| dt.with_timezone(&offset).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "undated".to_string());
    format!("{}-{}.txt", prefix, date)
}

fn block(note: &Note, offset: FixedOffset) -> String {
    let stamp = DateTime::from_timestamp_millis(note.timestamp)
        .map(|dt| dt.with_timezone(&offset).format(STAMP_FORMAT).to_string())
        .unwrap_or_else(|| note.timestamp.to_string());
    format!("[{}]\n{}", stamp, note.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteId;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_export_blocks_in_order() {
        let list = NoteList::validated(vec![
            Note::new(NoteId::new("b"), "call mom", 1_700_000_060_000),
            Note::new(NoteId::new("a"), "buy milk\nand eggs", 1_700_000_000_000),
        ])
        .unwrap();
        let text = export_text(&list, "\n\n---\n\n", utc());
        assert_eq!(
            text,
            "[2023-11-14 22:13:20]\nbuy milk\nand eggs\n\n---\n\n[2023-11-14 22:14:20]\ncall mom"
        );
    }

    #[test]
    fn test_export_uses_offset() {
        let list = NoteList::validated(vec![Note::new(NoteId::new("a"), "x", 0)]).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(export_text(&list, "|", tokyo), "[1970-01-01 09:00:00]\nx");
    }

    #[test]
    fn test_empty_export() {
        assert_eq!(export_text(&NoteList::new(), "|", utc()), "");
    }

    #[test]
    fn test_export_filename() {
        let west = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(export_filename("chrono-notes", 1_700_000_000_000, utc()), "chrono-notes-2023-11-14.txt");
        assert_eq!(export_filename("chrono-notes", 0, west), "chrono-notes-1969-12-31.txt");
    }
}
