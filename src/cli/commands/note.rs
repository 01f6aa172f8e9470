//! Single-note command implementations (new, show, edit, delete, list).

use crate::cli::ContentArgs;
use crate::error::{Error, Result};
use crate::model::NoteSummary;
use crate::storage::NoteRepository;
use colored::Colorize;
use serde::Serialize;
use std::io::Read;
use tracing::debug;

/// Placeholder shown for notes whose first line is blank.
const NO_TITLE: &str = "(No Title)";

/// Output for note create/update/delete.
#[derive(Serialize)]
struct NoteMutationOutput<'a> {
    id: &'a str,
    action: &'a str,
}

/// Output for note show.
#[derive(Serialize)]
struct NoteShowOutput<'a> {
    id: &'a str,
    title: String,
    content: &'a str,
}

/// Output for note list.
#[derive(Serialize)]
struct NoteListOutput<'a> {
    notes: &'a [NoteSummary],
    count: usize,
}

/// Resolve note content from the positional argument, `--file`, or stdin.
fn read_content(input: &ContentArgs) -> Result<String> {
    if let Some(content) = &input.content {
        return Ok(content.clone());
    }
    if let Some(path) = &input.file {
        debug!(path = %path.display(), "Reading note content from file");
        return std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidArgument(format!("cannot read {}: {e}", path.display()))
        });
    }
    debug!("Reading note content from stdin");
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

/// Execute `notes new`.
pub fn execute_new(input: &ContentArgs, repo: &mut NoteRepository, json: bool) -> Result<()> {
    let content = read_content(input)?;
    if content.trim().is_empty() {
        return Err(Error::InvalidArgument(
            "note content is empty; nothing to save".to_string(),
        ));
    }

    let id = repo.create(&content)?;

    if crate::is_silent() {
        println!("{id}");
        return Ok(());
    }

    if json {
        let output = NoteMutationOutput {
            id: id.as_str(),
            action: "created",
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Created note: {}", id.to_string().bold());
    }

    Ok(())
}

/// Execute `notes show`.
pub fn execute_show(id: &str, repo: &NoteRepository, json: bool) -> Result<()> {
    let note = repo.get(id)?;

    if json {
        let output = NoteShowOutput {
            id: note.id.as_str(),
            title: note.title(),
            content: &note.content,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        print!("{}", note.content);
        if !note.content.is_empty() && !note.content.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}

/// Execute `notes edit`.
pub fn execute_edit(
    id: &str,
    input: &ContentArgs,
    repo: &mut NoteRepository,
    json: bool,
) -> Result<()> {
    // Fail before reading stdin if the note is missing
    if !repo.exists(id) {
        return Err(Error::not_found(id));
    }
    let content = read_content(input)?;

    // Saving an empty note removes it
    let action = if content.trim().is_empty() {
        repo.delete(id)?;
        "deleted"
    } else {
        repo.update(id, &content)?;
        "updated"
    };

    if crate::is_silent() {
        println!("{id}");
        return Ok(());
    }

    if json {
        let output = NoteMutationOutput { id, action };
        println!("{}", serde_json::to_string(&output)?);
    } else if action == "deleted" {
        println!("Deleted note: {} (content was empty)", id.bold());
    } else {
        println!("Updated note: {}", id.bold());
    }

    Ok(())
}

/// Execute `notes delete`.
pub fn execute_delete(id: &str, repo: &mut NoteRepository, json: bool) -> Result<()> {
    repo.delete(id)?;

    if crate::is_silent() {
        println!("{id}");
        return Ok(());
    }

    if json {
        let output = NoteMutationOutput {
            id,
            action: "deleted",
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Deleted note: {}", id.bold());
    }

    Ok(())
}

/// Execute `notes list`.
pub fn execute_list(repo: &NoteRepository, json: bool) -> Result<()> {
    let notes = repo.list()?;

    if crate::is_csv() {
        println!("id,title");
        for note in &notes {
            println!("{},{}", note.id, crate::csv_escape(&note.title));
        }
    } else if json {
        let output = NoteListOutput {
            notes: &notes,
            count: notes.len(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else if notes.is_empty() {
        println!("No notes found.");
    } else {
        println!("Notes ({} found):", notes.len());
        println!();
        for note in &notes {
            let title = if note.title.is_empty() {
                NO_TITLE.italic().to_string()
            } else {
                note.title.clone()
            };
            println!("  {}  {}", note.id.to_string().dimmed(), title);
        }
    }

    Ok(())
}
