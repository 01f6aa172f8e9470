//! Atomic file operations for note storage.
//!
//! Note files are never written in place:
//! - Content goes to a hidden temporary file in the same directory
//! - The temp file is synced to disk, then renamed over the target
//!
//! Readers therefore see either the old content or the new content, never a
//! truncated file. Temp files start with `.` so directory scans ignore them.
//!
//! New files are committed with a hard link instead of a rename, so a file
//! that appeared at the target in the meantime is never replaced.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Temporary path used while writing `path`.
///
/// Lives next to the target so the final rename never crosses filesystems.
#[must_use]
pub fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

/// Write content to a file atomically.
///
/// This function:
/// 1. Writes content to a hidden temporary file beside the target
/// 2. Calls `fsync` to ensure data is on disk
/// 3. Atomically renames the temp file to the target path
///
/// If any step fails, the temp file is removed and the original file (if
/// any) remains untouched. The parent directory is not created here; the
/// notes directory is created once at startup.
///
/// # Errors
///
/// Returns an error if any file operation fails.
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let temp_path = temp_path_for(path);

    let result = write_synced(&temp_path, content).and_then(|()| fs::rename(&temp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Write content to a file that must not exist yet.
///
/// Same as [`atomic_write`], except the commit step hard-links the temp file
/// to the target and fails with `AlreadyExists` if the target is present,
/// leaving it untouched. The temp file is removed in every case.
///
/// # Errors
///
/// Returns `AlreadyExists` if `path` exists, or any other file error.
pub fn atomic_create(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let temp_path = temp_path_for(path);

    let result = write_synced(&temp_path, content).and_then(|()| fs::hard_link(&temp_path, path));
    let _ = fs::remove_file(&temp_path);
    result
}

fn write_synced(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("note.txt");

        atomic_write(&path, b"line 1\nline 2\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "line 1\nline 2\n");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("note.txt");

        atomic_write(&path, b"old").unwrap();
        atomic_write(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_atomic_write_missing_dir_leaves_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("note.txt");

        assert!(atomic_write(&path, b"content").is_err());
        assert!(!path.exists());
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_atomic_create_writes_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("note.txt");

        atomic_create(&path, b"fresh").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_atomic_create_never_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("note.txt");
        fs::write(&path, "written by someone else").unwrap();

        let err = atomic_create(&path, b"mine").unwrap_err();

        assert_eq!(err.kind(), std::io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), "written by someone else");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let path = Path::new("/data/notes/abc.txt");
        assert_eq!(temp_path_for(path), PathBuf::from("/data/notes/.abc.txt.tmp"));
    }
}
