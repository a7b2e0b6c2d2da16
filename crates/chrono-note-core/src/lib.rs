//! ChronoNote Engine
//!
//! Layered architecture:
//! - domain: Note entities, list invariants, errors and the edit state machine
//! - repository: Storage, clock and id ports plus the persisted record codec
//! - share / export / timeline: Pure transforms over a note list
//! - store: `NoteStore`, the only type that mutates and persists notes

pub mod config;
pub mod domain;
pub mod export;
pub mod repository;
pub mod share;
pub mod store;
pub mod timeline;

pub use config::StoreConfig;
pub use domain::{
    EditOutcome, EditSession, ListViolation, Note, NoteError, NoteId, NoteList, NoteResult,
    Notice, NoticeVariant,
};
pub use repository::{
    Clock, IdGenerator, KeyValueStorage, ManualClock, MemoryStorage, SequentialIds, SystemClock,
    UuidGenerator,
};
pub use store::NoteStore;
