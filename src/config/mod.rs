//! Configuration management.
//!
//! The only setting the note store consumes is the notes directory.
//!
//! # Resolution
//!
//! 1. `--dir <path>` on the command line
//! 2. `NOTES_DIR` environment variable
//! 3. `~/.notes/notes_data`
//!
//! The directory is created once, when the repository is opened at startup.
//! If it cannot be created the command fails; there is no silent fallback.

use crate::error::{Error, Result};
use crate::storage::{NoteRepository, NotesDir};

use std::path::{Path, PathBuf};

/// Environment variable naming the notes directory.
pub const NOTES_DIR_ENV: &str = "NOTES_DIR";

/// Get the global notes home (`~/.notes`).
#[must_use]
pub fn global_notes_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".notes"))
}

/// Default notes directory (`~/.notes/notes_data`).
#[must_use]
pub fn default_notes_dir() -> Option<PathBuf> {
    global_notes_home().map(|home| home.join("notes_data"))
}

/// Resolve the notes directory.
///
/// Priority:
/// 1. If `explicit_path` is provided, use it directly
/// 2. `NOTES_DIR` environment variable (blank values ignored)
/// 3. Default location: `~/.notes/notes_data`
///
/// # Errors
///
/// Returns `Config` if no explicit path or environment value is given and
/// the home directory cannot be determined.
pub fn resolve_notes_dir(explicit_path: Option<&Path>) -> Result<PathBuf> {
    resolve_notes_dir_from(explicit_path, std::env::var(NOTES_DIR_ENV).ok())
}

/// Resolution logic with the environment value passed in.
fn resolve_notes_dir_from(
    explicit_path: Option<&Path>,
    env_value: Option<String>,
) -> Result<PathBuf> {
    // Priority 1: Explicit path from CLI flag
    if let Some(path) = explicit_path {
        return Ok(path.to_path_buf());
    }

    // Priority 2: NOTES_DIR environment variable
    if let Some(dir) = env_value {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    // Priority 3: Default location
    default_notes_dir().ok_or_else(|| {
        Error::Config(
            "Could not determine home directory for the default notes location".to_string(),
        )
    })
}

/// Resolve, create, and open the notes directory as a repository.
///
/// This is the startup step: it runs once per process, before any note
/// operation.
///
/// # Errors
///
/// Returns `Config` if no directory can be resolved, or `StorageIo` if it
/// cannot be created.
pub fn open_repository(explicit_path: Option<&Path>) -> Result<NoteRepository> {
    let path = resolve_notes_dir(explicit_path)?;
    let dir = NotesDir::open(path)?;
    Ok(NoteRepository::new(dir))
}
