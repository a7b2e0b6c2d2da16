//! Timeline presentation helpers
//!
//! Labels the UI draws next to each note: clock time, the gap since the
//! previous note, and day headings.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::domain::Note;

const SECOND: u64 = 1_000;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// A note with its rendered labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub note: Note,
    /// `HH:MM:SS`
    pub clock: String,
    /// Distance from the previous note, `None` for the first one
    pub gap: Option<String>,
}

/// Consecutive notes sharing a calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySection {
    pub heading: String,
    pub entries: Vec<TimelineEntry>,
}

pub fn clock_label(millis: i64, offset: FixedOffset) -> String {
    local(millis, offset)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "00:00:00".to_string())
}

/// Strict distance between two instants in the largest fitting unit,
/// rounded to the nearest whole value. Holds for any pair of `i64`s.
pub fn gap_label(previous: i64, current: i64) -> String {
    let diff = current.abs_diff(previous);
    let (value, unit) = if diff < MINUTE {
        (round_div(diff, SECOND), "second")
    } else if diff < HOUR {
        (round_div(diff, MINUTE), "minute")
    } else if diff < DAY {
        (round_div(diff, HOUR), "hour")
    } else if diff < MONTH {
        (round_div(diff, DAY), "day")
    } else if diff < YEAR {
        (round_div(diff, MONTH), "month")
    } else {
        (round_div(diff, YEAR), "year")
    };
    if value == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", value, unit)
    }
}

/// "Today", "Yesterday", or the ISO date
pub fn day_heading(millis: i64, now_millis: i64, offset: FixedOffset) -> String {
    let (Some(day), Some(today)) = (local_date(millis, offset), local_date(now_millis, offset)) else {
        return "Unknown date".to_string();
    };
    if day == today {
        "Today".to_string()
    } else if today.pred_opt() == Some(day) {
        "Yesterday".to_string()
    } else {
        day.format("%Y-%m-%d").to_string()
    }
}

/// Group an already sorted slice of notes into day sections
pub fn sections(notes: &[Note], now_millis: i64, offset: FixedOffset) -> Vec<DaySection> {
    let mut result: Vec<DaySection> = Vec::new();
    let mut previous: Option<i64> = None;
    for note in notes {
        let heading = day_heading(note.timestamp, now_millis, offset);
        let entry = TimelineEntry {
            note: note.clone(),
            clock: clock_label(note.timestamp, offset),
            gap: previous.map(|prev| gap_label(prev, note.timestamp)),
        };
        previous = Some(note.timestamp);
        match result.last_mut() {
            Some(section) if section.heading == heading => section.entries.push(entry),
            _ => result.push(DaySection {
                heading,
                entries: vec![entry],
            }),
        }
    }
    result
}

/// Half-up division without the overflow of `(value + unit / 2) / unit`
fn round_div(value: u64, unit: u64) -> u64 {
    value / unit + u64::from(value % unit >= unit - unit / 2)
}

fn local(millis: i64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.with_timezone(&offset))
}

fn local_date(millis: i64, offset: FixedOffset) -> Option<NaiveDate> {
    local(millis, offset).map(|dt| dt.date_naive())
}
