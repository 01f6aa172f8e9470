//! Zip export of the whole note collection.
//!
//! # Snapshot Semantics
//!
//! The exporter lists the repository once, then streams each listed note
//! from disk into the archive. A note created after the listing is not
//! included; a note deleted after the listing is skipped and counted in
//! [`ExportStats::vanished`]. Single-writer use makes this window harmless.

use std::io::{self, Cursor, Seek, Write};

use chrono::Utc;
use tracing::{debug, info};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::archive::types::ExportStats;
use crate::error::{Error, Result};
use crate::storage::notes_dir::note_file_name;
use crate::storage::NoteRepository;

/// Exporter for zip archives.
pub struct Exporter<'a> {
    repo: &'a NoteRepository,
}

impl<'a> Exporter<'a> {
    #[must_use]
    pub fn new(repo: &'a NoteRepository) -> Self {
        Self { repo }
    }

    /// Write every note into a zip archive on `sink`.
    ///
    /// Each note becomes one deflated entry named `<id>.txt` holding the raw
    /// note content.
    ///
    /// # Errors
    ///
    /// Returns `StorageIo` if listing or reading notes fails or the sink
    /// cannot be written.
    pub fn export_to<W: Write + Seek>(&self, sink: W) -> Result<ExportStats> {
        let mut stats = ExportStats {
            exported_at: Utc::now().to_rfc3339(),
            ..ExportStats::default()
        };
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        let notes = self.repo.list()?;
        let mut zip = ZipWriter::new(sink);

        for summary in &notes {
            let mut file = match self.repo.open_note(&summary.id) {
                Ok(file) => file,
                Err(Error::NoteNotFound { .. }) => {
                    debug!(id = %summary.id, "Note deleted during export, skipping");
                    stats.vanished += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            zip.start_file(note_file_name(&summary.id), options)?;
            stats.bytes += io::copy(&mut file, &mut zip)?;
            stats.notes += 1;
        }

        zip.finish()?;
        info!(notes = stats.notes, bytes = stats.bytes, "Notes export completed");
        Ok(stats)
    }

    /// Export every note and return the archive bytes.
    ///
    /// # Errors
    ///
    /// Same as [`Exporter::export_to`].
    pub fn export(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.export_to(Cursor::new(&mut buf))?;
        Ok(buf)
    }
}
