//! Note repository: create, read, update, delete, and list notes.
//!
//! The repository owns the mapping from note id to file. Every write goes
//! through [`atomic_write`] or [`atomic_create`], so a failed operation
//! leaves the store as it was. Identifiers come from an [`IdSource`]; a
//! candidate is rejected if it was retired earlier in this process or if a
//! file already holds it when the new note is committed.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::model::{derive_title, Note, NoteId, NoteSummary};
use crate::storage::file::{atomic_create, atomic_write};
use crate::storage::notes_dir::NotesDir;

/// How many candidate ids `create` tries before giving up.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Source of candidate note identifiers.
///
/// Candidates need not be unique; the repository rejects any that are
/// already taken and asks again.
pub trait IdSource {
    fn next_id(&mut self) -> NoteId;
}

/// Production id source: random UUID v4 strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> NoteId {
        NoteId::generate()
    }
}

/// File-backed note repository.
pub struct NoteRepository {
    dir: NotesDir,
    ids: Box<dyn IdSource>,
    /// Ids deleted during this process; never handed out again.
    retired: HashSet<NoteId>,
}

impl NoteRepository {
    /// Create a repository over an opened notes directory.
    #[must_use]
    pub fn new(dir: NotesDir) -> Self {
        Self::with_id_source(dir, Box::new(UuidIds))
    }

    /// Create a repository with a custom id source.
    #[must_use]
    pub fn with_id_source(dir: NotesDir, ids: Box<dyn IdSource>) -> Self {
        Self {
            dir,
            ids,
            retired: HashSet::new(),
        }
    }

    /// Path of the backing directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Store `content` as a new note and return its id.
    ///
    /// Never overwrites an existing note.
    ///
    /// # Errors
    ///
    /// Returns `CollisionExhausted` if no free id was found within
    /// [`MAX_ID_ATTEMPTS`] candidates, or `StorageIo` if the write fails.
    pub fn create(&mut self, content: &str) -> Result<NoteId> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_id();
            if self.retired.contains(&candidate) {
                debug!(id = %candidate, attempt, "Note id retired, drawing another");
                continue;
            }
            match atomic_create(&self.dir.note_path(&candidate), content.as_bytes()) {
                Ok(()) => {
                    debug!(id = %candidate, bytes = content.len(), "Note created");
                    return Ok(candidate);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    debug!(id = %candidate, attempt, "Note id taken, drawing another");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Err(Error::CollisionExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Read a note with its id.
    ///
    /// # Errors
    ///
    /// Same as [`NoteRepository::read`].
    pub fn get(&self, id: &str) -> Result<Note> {
        let id = parse_known(id)?;
        let content =
            fs::read_to_string(self.dir.note_path(&id)).map_err(|e| not_found_or_io(&id, e))?;
        Ok(Note { id, content })
    }

    /// Read a note's content.
    ///
    /// # Errors
    ///
    /// Returns `NoteNotFound` if no note has this id, or `StorageIo` if the
    /// file cannot be read.
    pub fn read(&self, id: &str) -> Result<String> {
        self.get(id).map(|note| note.content)
    }

    /// Replace a note's content. Does not create missing notes.
    ///
    /// # Errors
    ///
    /// Returns `NoteNotFound` if no note has this id, or `StorageIo` if the
    /// write fails.
    pub fn update(&mut self, id: &str, content: &str) -> Result<()> {
        let id = parse_known(id)?;
        let path = self.dir.note_path(&id);
        if !path.is_file() {
            return Err(Error::not_found(id.as_str()));
        }
        atomic_write(&path, content.as_bytes())?;
        debug!(id = %id, bytes = content.len(), "Note updated");
        Ok(())
    }

    /// Delete a note.
    ///
    /// # Errors
    ///
    /// Returns `NoteNotFound` if no note has this id (including a second
    /// delete of the same id), or `StorageIo` if removal fails.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let id = parse_known(id)?;
        fs::remove_file(self.dir.note_path(&id)).map_err(|e| not_found_or_io(&id, e))?;
        debug!(id = %id, "Note deleted");
        self.retired.insert(id);
        Ok(())
    }

    /// Whether a note with this id exists.
    #[must_use]
    pub fn exists(&self, id: &str) -> bool {
        NoteId::parse(id).is_some_and(|id| self.dir.note_path(&id).is_file())
    }

    /// List every note with its derived title.
    ///
    /// Sorted by case-insensitive title, then by id, so repeated listings
    /// come back in the same order.
    ///
    /// # Errors
    ///
    /// Returns `StorageIo` if the directory or a note file cannot be read.
    pub fn list(&self) -> Result<Vec<NoteSummary>> {
        let mut notes = Vec::new();
        for (id, path) in self.dir.scan()? {
            match read_first_line(&path) {
                Ok(line) => notes.push(NoteSummary {
                    title: derive_title(&line),
                    id,
                }),
                // Removed between scan and read
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    trace!(id = %id, "Note vanished during listing");
                }
                Err(e) => return Err(e.into()),
            }
        }

        notes.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(notes)
    }

    /// Number of notes currently stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageIo` if the directory cannot be read.
    pub fn count(&self) -> Result<usize> {
        Ok(self.dir.scan()?.len())
    }

    /// File backing a note, for streaming readers such as the exporter.
    pub(crate) fn open_note(&self, id: &NoteId) -> Result<File> {
        File::open(self.dir.note_path(id)).map_err(|e| not_found_or_io(id, e))
    }
}

/// Malformed ids cannot name a stored note.
fn parse_known(id: &str) -> Result<NoteId> {
    NoteId::parse(id).ok_or_else(|| Error::not_found(id))
}

fn not_found_or_io(id: &NoteId, err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::NotFound {
        Error::not_found(id.as_str())
    } else {
        Error::StorageIo(err)
    }
}

fn read_first_line(path: &Path) -> io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
