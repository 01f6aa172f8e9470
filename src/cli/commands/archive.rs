//! Archive command implementations (zip export/import).
//!
//! Export writes every note to a zip file in the current directory (or
//! `--output`). Import reads a zip file and adds each note entry as a new
//! note; the run succeeds even when some entries are skipped or fail, and
//! the summary says which.

use crate::archive::{EntryOutcome, Exporter, ImportSummary, Importer};
use crate::error::{Error, Result};
use crate::storage::NoteRepository;
use chrono::Utc;
use colored::Colorize;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Default export file name: `notes-export-<UTC timestamp>.zip`.
#[must_use]
pub fn default_export_name() -> PathBuf {
    PathBuf::from(format!(
        "notes-export-{}.zip",
        Utc::now().format("%Y%m%d-%H%M%S")
    ))
}

/// Execute `notes export`.
pub fn execute_export(
    output: Option<&PathBuf>,
    force: bool,
    repo: &NoteRepository,
    json: bool,
) -> Result<()> {
    let output = output.cloned().unwrap_or_else(default_export_name);
    let file = create_output(&output, force)?;

    let stats = match Exporter::new(repo).export_to(file) {
        Ok(stats) => stats,
        Err(e) => {
            // Don't leave a truncated archive behind
            let _ = fs::remove_file(&output);
            return Err(e);
        }
    };

    if crate::is_silent() {
        println!("{}", output.display());
        return Ok(());
    }

    if json {
        let payload = serde_json::json!({
            "success": true,
            "output": output.display().to_string(),
            "stats": stats,
        });
        println!("{}", serde_json::to_string(&payload)?);
    } else if stats.is_empty() {
        println!("No notes to export; wrote empty archive: {}", output.display());
    } else {
        println!("Export complete");
        println!();
        println!("  Notes:    {}", stats.notes);
        println!("  Location: {}", output.display().to_string().bold());
    }

    Ok(())
}

fn create_output(path: &Path, force: bool) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    options.open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            Error::InvalidArgument(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ))
        } else {
            Error::StorageIo(e)
        }
    })
}

/// Execute `notes import`.
pub fn execute_import(
    path: &Path,
    repo: &mut NoteRepository,
    verbose: bool,
    json: bool,
) -> Result<()> {
    let file = File::open(path)
        .map_err(|e| Error::InvalidArgument(format!("cannot open {}: {e}", path.display())))?;

    let summary = Importer::new(repo).import(file)?;

    if json {
        let payload = serde_json::json!({
            "success": true,
            "archive": path.display().to_string(),
            "summary": summary,
        });
        println!("{}", serde_json::to_string(&payload)?);
    } else if summary.total() == 0 {
        println!("Archive is empty: {}", path.display());
    } else {
        println!("Import complete: {}", path.display());
        println!();
        print_summary(&summary, verbose);
    }

    Ok(())
}

fn print_summary(summary: &ImportSummary, verbose: bool) {
    println!("  Imported: {}", summary.imported.to_string().green());
    println!("  Skipped:  {}", summary.skipped);
    if summary.failed > 0 {
        println!("  Failed:   {}", summary.failed.to_string().red());
    } else {
        println!("  Failed:   0");
    }

    // Failures are always listed; other entries only with -v
    let details: Vec<_> = summary
        .entries
        .iter()
        .filter(|r| verbose || matches!(r.outcome, EntryOutcome::Failed { .. }))
        .collect();
    if details.is_empty() {
        return;
    }

    println!();
    for report in details {
        match &report.outcome {
            EntryOutcome::Imported { id } => {
                println!("  {} {} -> {}", "+".green(), report.entry, id.to_string().dimmed());
            }
            EntryOutcome::Skipped { reason } => {
                println!("  {} {} ({reason})", "-".yellow(), report.entry);
            }
            EntryOutcome::Failed { error } => {
                println!("  {} {}: {error}", "!".red(), report.entry);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_export_name() {
        let name = default_export_name();
        let name = name.to_string_lossy();
        assert!(name.starts_with("notes-export-"));
        assert!(name.ends_with(".zip"));
    }

    #[test]
    fn test_create_output_refuses_existing_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.zip");
        fs::write(&path, "existing").unwrap();

        let result = create_output(&path, false);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing");

        assert!(create_output(&path, true).is_ok());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
