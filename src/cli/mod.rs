//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for list/query commands.
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table (default)
    #[default]
    Table,
    /// JSON (same as --json)
    Json,
    /// Comma-separated values
    Csv,
}

pub mod commands;

/// Notes CLI - plain-text notes with zip backup and migration
#[derive(Parser, Debug)]
#[command(name = "notes", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Notes directory (default: ~/.notes/notes_data)
    #[arg(long, global = true, env = "NOTES_DIR")]
    pub dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (table, json, csv)
    #[arg(long, value_enum, global = true, default_value_t)]
    pub format: OutputFormat,

    /// Output only the note ID (for scripting)
    #[arg(long, global = true)]
    pub silent: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    New(ContentArgs),

    /// Print a note's content
    Show {
        /// Note ID
        id: String,
    },

    /// Replace a note's content (empty content deletes the note)
    Edit {
        /// Note ID
        id: String,

        #[command(flatten)]
        input: ContentArgs,
    },

    /// Delete a note
    Delete {
        /// Note ID
        id: String,
    },

    /// List notes with their titles
    List,

    /// Export all notes to a zip archive
    Export {
        /// Output file (default: ./notes-export-<timestamp>.zip)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite the output file if it exists
        #[arg(long)]
        force: bool,
    },

    /// Import notes from a zip archive (always as new notes)
    Import {
        /// Zip archive to import
        path: PathBuf,
    },

    /// Show the notes directory and note count
    Status,

    /// Print version information
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where note content comes from.
///
/// Positional text wins, then `--file`, then standard input.
#[derive(Args, Debug, Clone, Default)]
pub struct ContentArgs {
    /// Note content
    pub content: Option<String>,

    /// Read content from a file
    #[arg(short, long, conflicts_with = "content")]
    pub file: Option<PathBuf>,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}
