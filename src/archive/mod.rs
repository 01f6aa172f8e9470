//! Zip archive exchange for the whole note collection.
//!
//! - **Export**: every note → one `<id>.txt` entry in a zip archive
//! - **Import**: every `.txt` entry → a new note with a fresh id
//!
//! # Example
//!
//! ```ignore
//! use notes::archive::{Exporter, Importer};
//!
//! let bytes = Exporter::new(&repo).export()?;
//!
//! let summary = Importer::new(&mut other_repo).import_bytes(&bytes)?;
//! println!("{} imported, {} skipped, {} failed",
//!     summary.imported, summary.skipped, summary.failed);
//! ```

mod export;
mod import;
mod types;

pub use export::Exporter;
pub use import::{is_note_entry, Importer, MAX_ENTRY_BYTES};
pub use types::{EntryOutcome, EntryReport, ExportStats, ImportSummary, SkipReason};
