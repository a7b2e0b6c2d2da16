//! Clock and id adapters

use std::cell::Cell;

use chrono::Utc;
use uuid::Uuid;

use super::traits::{Clock, IdGenerator};
use crate::domain::NoteId;

/// Host wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    pub fn new(now: i64) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn set(&self, now: i64) {
        self.now.set(now);
    }

    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

/// Random v4 UUIDs, independent of the clock
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> NoteId {
        NoteId::new(Uuid::new_v4().to_string())
    }
}

/// Predictable ids `note-1`, `note-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> NoteId {
        let n = self.next.get() + 1;
        self.next.set(n);
        NoteId::new(format!("note-{}", n))
    }
}
