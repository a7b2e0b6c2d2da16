//! UI Components
//!
//! Reusable Leptos components.

mod delete_note_button;
mod log_panel;
mod new_note_input;
mod note_item;
mod timeline;
mod title_bar;
mod toaster;

pub use delete_note_button::DeleteNoteButton;
pub use log_panel::LogPanel;
pub use new_note_input::NewNoteInput;
pub use note_item::NoteItem;
pub use timeline::Timeline;
pub use title_bar::TitleBar;
pub use toaster::Toaster;
