//! File-backed storage layer for notes.
//!
//! This module provides the persistence layer with:
//! - One plain-text file per note, named by its id
//! - Atomic writes (temp file, fsync, rename)
//! - Collision-checked id allocation
//!
//! # Submodules
//!
//! - [`file`] - Atomic file writes
//! - [`notes_dir`] - Notes directory handle and id/file-name mapping
//! - [`repository`] - Note CRUD and listing

pub mod file;
pub mod notes_dir;
pub mod repository;

pub use notes_dir::NotesDir;
pub use repository::{IdSource, NoteRepository, UuidIds, MAX_ID_ATTEMPTS};
