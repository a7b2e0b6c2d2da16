//! Console Logger
//!
//! `log` backend for the browser: each record goes to the matching
//! `console.*` method and the most recent lines are kept in memory so the
//! UI can show them. On non-wasm targets lines go to stderr.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::DateTime;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    pub level: LevelFilter,
    /// Number of recent lines retained
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            capacity: 200,
        }
    }
}

/// Fixed-size buffer that drops the oldest line when full
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

pub struct ConsoleLogger {
    level: LevelFilter,
    recent: Mutex<RingBuffer>,
}

impl ConsoleLogger {
    fn new(config: LoggerConfig) -> Self {
        Self {
            level: config.level,
            recent: Mutex::new(RingBuffer::new(config.capacity)),
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            now_millis(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        emit(record.level(), &line);
        if let Ok(mut recent) = self.recent.lock() {
            recent.push(line);
        }
    }

    fn flush(&self) {}
}

/// Install the logger. Fails if a logger is already set.
pub fn init(config: LoggerConfig) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(config));
    log::set_logger(logger)?;
    log::set_max_level(config.level);
    Ok(())
}

/// Lines retained by the installed logger, oldest first
pub fn recent() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|logger| logger.recent.lock().ok().map(|recent| recent.lines()))
        .unwrap_or_default()
}

/// `[HH:MM:SS.mmm] LEVEL target: message` in UTC
pub fn format_line(millis: i64, level: Level, target: &str, message: &str) -> String {
    let stamp = DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%H:%M:%S%.3f").to_string())
        .unwrap_or_else(|| "--:--:--.---".to_string());
    format!("[{}] {:<5} {}: {}", stamp, level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line(1_700_000_000_123, Level::Warn, "chrono_note_core::store", "write failed");
        assert_eq!(line, "[22:13:20.123] WARN  chrono_note_core::store: write failed");
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut buffer = RingBuffer::new(2);
        buffer.push("a".into());
        buffer.push("b".into());
        buffer.push("c".into());
        assert_eq!(buffer.lines(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut buffer = RingBuffer::new(0);
        buffer.push("a".into());
        assert!(buffer.lines().is_empty());
    }

    #[test]
    fn test_second_init_is_reported_and_lines_are_retained() {
        let config = LoggerConfig {
            level: LevelFilter::Info,
            capacity: 4,
        };
        assert!(init(config).is_ok());
        assert!(init(config).is_err());

        log::info!(target: "chrono_note_ui", "opened note store");
        log::debug!(target: "chrono_note_ui", "filtered out");
        let recent = recent();
        assert_eq!(recent.len(), 1);
        assert!(recent[0].ends_with("INFO  chrono_note_ui: opened note store"));
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = ConsoleLogger::new(LoggerConfig {
            level: LevelFilter::Warn,
            capacity: 10,
        });
        let info = Metadata::builder().level(Level::Info).build();
        let error = Metadata::builder().level(Level::Error).build();
        assert!(!logger.enabled(&info));
        assert!(logger.enabled(&error));
    }
}
