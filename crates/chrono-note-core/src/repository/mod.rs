//! Repository Layer
//!
//! Ports the store depends on, their adapters, and the persisted record codec.

mod adapters;
pub mod codec;
mod memory;
mod traits;


pub use adapters::{ManualClock, SequentialIds, SystemClock, UuidGenerator};
pub use memory::MemoryStorage;
pub use traits::{Clock, IdGenerator, KeyValueStorage};
