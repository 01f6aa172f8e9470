//! Handle to the on-disk notes directory.
//!
//! The directory is the single source of truth: one `<id>.txt` file per
//! note, no index or manifest. The mapping from id to file name lives here
//! and nowhere else.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::NoteId;

/// File extension used for note files.
pub const NOTE_EXTENSION: &str = "txt";

/// An existing, writable-by-intent notes directory.
///
/// Created once at startup via [`NotesDir::open`]; repository operations
/// never create the directory implicitly.
#[derive(Debug, Clone)]
pub struct NotesDir {
    root: PathBuf,
}

impl NotesDir {
    /// Ensure the directory exists and return a handle to it.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the path exists but is not a directory, or
    /// `StorageIo` if the directory cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let root = path.into();
        if root.exists() && !root.is_dir() {
            return Err(Error::Config(format!(
                "Notes path is not a directory: {}",
                root.display()
            )));
        }
        fs::create_dir_all(&root)?;
        debug!(path = %root.display(), "Notes directory ready");
        Ok(Self { root })
    }

    /// Path of the directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// File backing the note with this id.
    #[must_use]
    pub(crate) fn note_path(&self, id: &NoteId) -> PathBuf {
        self.root.join(note_file_name(id))
    }

    /// Scan the directory for note files.
    ///
    /// Hidden files (including in-flight temp files), subdirectories, and
    /// files whose stem is not a valid id are ignored.
    pub(crate) fn scan(&self) -> Result<Vec<(NoteId, PathBuf)>> {
        let mut notes = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if let Some(id) = note_id_from_file_name(&name.to_string_lossy()) {
                notes.push((id, entry.path()));
            }
        }
        Ok(notes)
    }
}

/// File name for a note id.
#[must_use]
pub fn note_file_name(id: &NoteId) -> String {
    format!("{id}.{NOTE_EXTENSION}")
}

/// Recover a note id from a file name, if the file is a note.
#[must_use]
pub fn note_id_from_file_name(name: &str) -> Option<NoteId> {
    if name.starts_with('.') {
        return None;
    }
    let stem = name.strip_suffix(NOTE_EXTENSION)?.strip_suffix('.')?;
    NoteId::parse(stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("notes");

        let dir = NotesDir::open(&path).unwrap();

        assert!(path.is_dir());
        assert_eq!(dir.path(), path.as_path());
    }

    #[test]
    fn test_open_fails_on_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("not_a_dir");
        fs::write(&path, "x").unwrap();

        assert!(matches!(NotesDir::open(&path), Err(Error::Config(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "x");
    }

    #[test]
    fn test_open_fails_below_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        assert!(matches!(
            NotesDir::open(blocker.join("notes")),
            Err(Error::StorageIo(_))
        ));
    }

    #[test]
    fn test_note_id_from_file_name() {
        assert_eq!(
            note_id_from_file_name("abc-123.txt").map(|id| id.to_string()),
            Some("abc-123".to_string())
        );
        assert!(note_id_from_file_name("abc.md").is_none());
        assert!(note_id_from_file_name(".abc.txt.tmp").is_none());
        assert!(note_id_from_file_name(".hidden.txt").is_none());
        assert!(note_id_from_file_name(".txt").is_none());
        assert!(note_id_from_file_name("has space.txt").is_none());
    }

    #[test]
    fn test_scan_ignores_non_notes() {
        let temp_dir = TempDir::new().unwrap();
        let dir = NotesDir::open(temp_dir.path()).unwrap();
        fs::write(temp_dir.path().join("one.txt"), "1").unwrap();
        fs::write(temp_dir.path().join("readme.md"), "x").unwrap();
        fs::write(temp_dir.path().join(".two.txt.tmp"), "x").unwrap();
        fs::create_dir(temp_dir.path().join("sub.txt")).unwrap();

        let found = dir.scan().unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0.as_str(), "one");
    }
}
