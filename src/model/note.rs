//! Note model.
//!
//! A note is an opaque identifier plus a free-form text body. The title is
//! never stored: it is derived from the first line of the content whenever
//! it is needed, so it cannot drift from the body.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of characters shown as a note title.
pub const TITLE_MAX_CHARS: usize = 50;

/// Maximum length of a note identifier.
pub const ID_MAX_LEN: usize = 64;

/// Stable, opaque note identifier.
///
/// Identifiers are restricted to `[A-Za-z0-9_-]` so they are always safe to
/// use as a file stem and can never name a path outside the notes directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Parse a caller-supplied identifier.
    ///
    /// Returns `None` if the string could not have been minted by the store.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        is_valid_id(raw).then(|| Self(raw.to_string()))
    }

    /// Mint a fresh random identifier (UUID v4, lowercase hyphenated).
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_valid_id(raw: &str) -> bool {
    !raw.is_empty()
        && raw.len() <= ID_MAX_LEN
        && raw
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// A note with its full content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: NoteId,
    pub content: String,
}

impl Note {
    /// Display title derived from the content.
    #[must_use]
    pub fn title(&self) -> String {
        derive_title(&self.content)
    }
}

/// One row of the note list: identifier and derived title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteSummary {
    pub id: NoteId,
    pub title: String,
}

/// Derive a display title from note content.
///
/// Takes the first line, trims surrounding whitespace (including a trailing
/// `\r`), and keeps at most [`TITLE_MAX_CHARS`] characters. Empty content
/// gives an empty title.
#[must_use]
pub fn derive_title(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or("");
    first_line.trim().chars().take(TITLE_MAX_CHARS).collect()
}
