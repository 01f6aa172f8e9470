//! Result types for archive export and import.

use std::fmt;

use serde::Serialize;

use crate::model::NoteId;

/// Statistics for an export operation.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ExportStats {
    /// Number of notes written to the archive.
    pub notes: usize,
    /// Uncompressed bytes of note content written.
    pub bytes: u64,
    /// Notes listed at the start but deleted before they could be read.
    pub vanished: usize,
    /// RFC 3339 timestamp when the export started.
    pub exported_at: String,
}

impl ExportStats {
    /// Returns true if the archive holds no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes == 0
    }
}

/// Why an archive entry was not imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// A directory entry.
    Directory,
    /// Not a `.txt` note file (wrong extension, hidden, or OS metadata).
    NotANote,
    /// Declared or actual size above the per-entry limit.
    TooLarge,
    /// Payload is not valid UTF-8 text.
    NotText,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::NotANote => write!(f, "not a note file"),
            Self::TooLarge => write!(f, "too large"),
            Self::NotText => write!(f, "not UTF-8 text"),
        }
    }
}

/// What happened to a single archive entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryOutcome {
    /// Stored as a new note under a freshly minted id.
    Imported { id: NoteId },
    /// Not a note; left alone.
    Skipped { reason: SkipReason },
    /// Looked like a note but could not be read or stored.
    Failed { error: String },
}

/// Outcome for one named entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    /// Entry name as stored in the archive.
    pub entry: String,
    #[serde(flatten)]
    pub outcome: EntryOutcome,
}

/// Summary of an import operation.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportSummary {
    /// Entries stored as new notes.
    pub imported: usize,
    /// Entries that were not notes.
    pub skipped: usize,
    /// Note entries that could not be read or stored.
    pub failed: usize,
    /// Per-entry outcomes, in archive order.
    pub entries: Vec<EntryReport>,
}

impl ImportSummary {
    /// Record the outcome of one entry and bump the matching counter.
    pub fn record(&mut self, entry: impl Into<String>, outcome: EntryOutcome) {
        match outcome {
            EntryOutcome::Imported { .. } => self.imported += 1,
            EntryOutcome::Skipped { .. } => self.skipped += 1,
            EntryOutcome::Failed { .. } => self.failed += 1,
        }
        self.entries.push(EntryReport {
            entry: entry.into(),
            outcome,
        });
    }

    /// Total entries processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.imported + self.skipped + self.failed
    }

    /// Ids minted for imported notes, in archive order.
    pub fn imported_ids(&self) -> impl Iterator<Item = &NoteId> {
        self.entries.iter().filter_map(|r| match &r.outcome {
            EntryOutcome::Imported { id } => Some(id),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_summary_counts() {
        let mut summary = ImportSummary::default();
        summary.record(
            "a.txt",
            EntryOutcome::Imported {
                id: NoteId::parse("n1").unwrap(),
            },
        );
        summary.record(
            "img.png",
            EntryOutcome::Skipped {
                reason: SkipReason::NotANote,
            },
        );
        summary.record(
            "b.txt",
            EntryOutcome::Failed {
                error: "disk full".into(),
            },
        );

        assert_eq!(summary.imported, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.imported_ids().count(), 1);
    }

    #[test]
    fn test_entry_report_json_shape() {
        let report = EntryReport {
            entry: "img.png".into(),
            outcome: EntryOutcome::Skipped {
                reason: SkipReason::NotANote,
            },
        };

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["entry"], "img.png");
        assert_eq!(json["status"], "skipped");
        assert_eq!(json["reason"], "not_a_note");
    }
}
