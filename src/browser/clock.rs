//! Browser wall clock and local timezone

use chrono::{FixedOffset, Offset, Utc};
use chrono_note_core::timeline::clock_label;
use chrono_note_core::Clock;

/// `Date.now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}

/// The browser's current UTC offset
pub fn local_offset() -> FixedOffset {
    // getTimezoneOffset is UTC minus local, in minutes
    let minutes = js_sys::Date::new_0().get_timezone_offset();
    FixedOffset::west_opt((minutes * 60.0) as i32).unwrap_or_else(|| Utc.fix())
}

/// Live `HH:MM:SS` for the input row
pub fn now_label() -> String {
    clock_label(BrowserClock.now_millis(), local_offset())
}
