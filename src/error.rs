//! Error types for the notes CLI.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (3=not_found, 6=archive, 8=storage, etc.)
//! - Context-aware recovery hints
//! - Structured JSON output for piped / non-TTY consumers

use thiserror::Error;

/// Result type alias for note store operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
///
/// Each code maps to a SCREAMING_SNAKE string and a category-based
/// exit code. Scripts match on the string or on the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Identity (exit 2)
    CollisionExhausted,

    // Not Found (exit 3)
    NoteNotFound,

    // Validation (exit 4)
    InvalidArgument,

    // Archive (exit 6)
    InvalidArchive,

    // Config (exit 7)
    ConfigError,

    // I/O (exit 8)
    StorageIo,
    JsonError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::CollisionExhausted => "COLLISION_EXHAUSTED",
            Self::NoteNotFound => "NOTE_NOT_FOUND",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::InvalidArchive => "INVALID_ARCHIVE",
            Self::ConfigError => "CONFIG_ERROR",
            Self::StorageIo => "STORAGE_IO",
            Self::JsonError => "JSON_ERROR",
        }
    }

    /// Category-based exit code (2-8).
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::CollisionExhausted => 2,
            Self::NoteNotFound => 3,
            Self::InvalidArgument => 4,
            Self::InvalidArchive => 6,
            Self::ConfigError => 7,
            Self::StorageIo | Self::JsonError => 8,
        }
    }

    /// Whether retrying the same request could plausibly succeed.
    ///
    /// True for id exhaustion (fresh candidates are drawn on every call)
    /// and for bad arguments once corrected.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::CollisionExhausted | Self::InvalidArgument)
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in note store and archive operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Note not found: {id}")]
    NoteNotFound { id: String },

    #[error("Invalid archive: {0}")]
    InvalidArchive(String),

    #[error("Storage error: {0}")]
    StorageIo(#[from] std::io::Error),

    #[error("Could not allocate a free note id after {attempts} attempts")]
    CollisionExhausted { attempts: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a missing note.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NoteNotFound { id: id.into() }
    }

    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::NoteNotFound { .. } => ErrorCode::NoteNotFound,
            Self::InvalidArchive(_) => ErrorCode::InvalidArchive,
            Self::StorageIo(_) => ErrorCode::StorageIo,
            Self::CollisionExhausted { .. } => ErrorCode::CollisionExhausted,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Json(_) => ErrorCode::JsonError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Context-aware recovery hint.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::NoteNotFound { id } => Some(format!(
                "No note with ID '{id}'. Use `notes list` to see available notes."
            )),

            Self::InvalidArchive(_) => Some(
                "Expected a zip file such as one produced by `notes export`.".to_string(),
            ),

            Self::CollisionExhausted { .. } => {
                Some("Retry the operation; a fresh set of ids will be tried.".to_string())
            }

            Self::Config(_) => Some(
                "Set the notes directory with `--dir <path>` or the NOTES_DIR environment variable."
                    .to_string(),
            ),

            Self::StorageIo(e) if e.kind() == std::io::ErrorKind::PermissionDenied => Some(
                "Check that the notes directory is writable by the current user.".to_string(),
            ),

            Self::StorageIo(_) | Self::InvalidArgument(_) | Self::Json(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    ///
    /// Includes error code, message, retryability, exit code, and
    /// optional recovery hint.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "retryable": code.is_retryable(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Self::StorageIo(e),
            other => Self::InvalidArchive(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(Error::not_found("abc").exit_code(), 3);
        assert_eq!(Error::InvalidArchive("bad".into()).exit_code(), 6);
        assert_eq!(Error::CollisionExhausted { attempts: 16 }.exit_code(), 2);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert_eq!(Error::from(io).exit_code(), 8);
    }

    #[test]
    fn test_structured_json_includes_hint() {
        let json = Error::not_found("abc").to_structured_json();
        assert_eq!(json["error"]["code"], "NOTE_NOT_FOUND");
        assert_eq!(json["error"]["retryable"], false);
        assert!(json["error"]["hint"].as_str().unwrap().contains("notes list"));
    }

    #[test]
    fn test_zip_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = Error::from(zip::result::ZipError::Io(io));
        assert_eq!(err.error_code(), ErrorCode::StorageIo);
        assert!(err.hint().is_some());

        let err = Error::from(zip::result::ZipError::InvalidArchive("no end header"));
        assert_eq!(err.error_code(), ErrorCode::InvalidArchive);
    }
}
