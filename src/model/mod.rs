//! Data models for the note store.
//!
//! - `NoteId` - opaque, filesystem-safe identifier
//! - `Note` - identifier plus content
//! - `NoteSummary` - identifier plus derived title, for listings

pub mod note;

pub use note::{derive_title, Note, NoteId, NoteSummary, TITLE_MAX_CHARS};
