//! Zip import into the note repository.
//!
//! Import is additive and best-effort. Every note entry becomes a brand-new
//! note with a freshly minted id; entry names are never reused as ids, so an
//! import can never overwrite an existing note. Entries that are not notes
//! are skipped and entries that fail are recorded, and neither stops the
//! remaining entries from being processed.

use std::io::{Cursor, Read, Seek};

use tracing::{debug, info, warn};
use zip::ZipArchive;

use crate::archive::types::{EntryOutcome, ImportSummary, SkipReason};
use crate::error::{Error, Result};
use crate::storage::NoteRepository;

/// Largest entry (uncompressed) accepted as a note.
pub const MAX_ENTRY_BYTES: u64 = 10 * 1024 * 1024;

/// Importer for zip archives.
pub struct Importer<'a> {
    repo: &'a mut NoteRepository,
}

impl<'a> Importer<'a> {
    #[must_use]
    pub fn new(repo: &'a mut NoteRepository) -> Self {
        Self { repo }
    }

    /// Import every note entry from a zip archive.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArchive` only if the archive itself cannot be opened.
    /// Per-entry problems are reported in the returned summary.
    pub fn import<R: Read + Seek>(&mut self, reader: R) -> Result<ImportSummary> {
        let mut archive =
            ZipArchive::new(reader).map_err(|e| Error::InvalidArchive(e.to_string()))?;
        let mut summary = ImportSummary::default();

        for index in 0..archive.len() {
            let (entry, outcome) = self.import_entry(&mut archive, index);
            match &outcome {
                EntryOutcome::Imported { id } => info!(entry = %entry, id = %id, "Imported note"),
                EntryOutcome::Skipped { reason } => {
                    debug!(entry = %entry, %reason, "Skipped archive entry");
                }
                EntryOutcome::Failed { error } => {
                    warn!(entry = %entry, error = %error, "Failed to import archive entry");
                }
            }
            summary.record(entry, outcome);
        }

        info!(
            imported = summary.imported,
            skipped = summary.skipped,
            failed = summary.failed,
            "Notes import completed"
        );
        Ok(summary)
    }

    /// Import from an in-memory archive.
    ///
    /// # Errors
    ///
    /// Same as [`Importer::import`].
    pub fn import_bytes(&mut self, bytes: &[u8]) -> Result<ImportSummary> {
        self.import(Cursor::new(bytes))
    }

    fn import_entry<R: Read + Seek>(
        &mut self,
        archive: &mut ZipArchive<R>,
        index: usize,
    ) -> (String, EntryOutcome) {
        let mut file = match archive.by_index(index) {
            Ok(file) => file,
            Err(e) => {
                return (
                    format!("entry #{index}"),
                    EntryOutcome::Failed {
                        error: e.to_string(),
                    },
                );
            }
        };
        let name = file.name().to_string();

        if file.is_dir() {
            return (name, skipped(SkipReason::Directory));
        }
        if !is_note_entry(&name) {
            return (name, skipped(SkipReason::NotANote));
        }
        if file.size() > MAX_ENTRY_BYTES {
            return (name, skipped(SkipReason::TooLarge));
        }

        // Declared sizes can lie; cap the actual read as well
        let mut buf = Vec::new();
        if let Err(e) = file.by_ref().take(MAX_ENTRY_BYTES + 1).read_to_end(&mut buf) {
            return (
                name,
                EntryOutcome::Failed {
                    error: e.to_string(),
                },
            );
        }
        drop(file);
        if buf.len() as u64 > MAX_ENTRY_BYTES {
            return (name, skipped(SkipReason::TooLarge));
        }
        let Ok(content) = String::from_utf8(buf) else {
            return (name, skipped(SkipReason::NotText));
        };

        let outcome = match self.repo.create(&content) {
            Ok(id) => EntryOutcome::Imported { id },
            Err(e) => EntryOutcome::Failed {
                error: e.to_string(),
            },
        };
        (name, outcome)
    }
}

fn skipped(reason: SkipReason) -> EntryOutcome {
    EntryOutcome::Skipped { reason }
}

/// Whether an archive entry name looks like a note file.
///
/// Accepts `*.txt` at any depth, except hidden files and macOS resource
/// fork metadata under `__MACOSX/`.
#[must_use]
pub fn is_note_entry(name: &str) -> bool {
    if name.starts_with("__MACOSX/") {
        return false;
    }
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    !base.starts_with('.')
        && base.len() > ".txt".len()
        && base.to_ascii_lowercase().ends_with(".txt")
}
