//! Status command implementation.

use crate::error::Result;
use crate::storage::NoteRepository;
use serde::Serialize;

/// Output for status command.
#[derive(Serialize)]
struct StatusOutput {
    notes_dir: String,
    note_count: usize,
}

/// Execute status command.
///
/// Reports the resolved notes directory and how many notes it holds.
pub fn execute(repo: &NoteRepository, json: bool) -> Result<()> {
    let output = StatusOutput {
        notes_dir: repo.path().display().to_string(),
        note_count: repo.count()?,
    };

    if json {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Notes directory: {}", output.notes_dir);
        println!("Notes:           {}", output.note_count);
    }

    Ok(())
}
