//! File system utilities.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Writes content to a file atomically using a temp file and rename.
///
/// A reader never sees a half-written translation, even if the process is
/// interrupted. The temp file lives next to the target so the rename stays on
/// one filesystem.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .map_err(|e| Error::io("Failed to write temporary file", &temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::io("Failed to write output file", path, e)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out-translated.json");

        fs::write(&file_path, "old").unwrap();
        atomic_write(&file_path, "{\n    \"a\": \"b\"\n}\n".as_bytes()).unwrap();

        assert_eq!(
            fs::read_to_string(&file_path).unwrap(),
            "{\n    \"a\": \"b\"\n}\n"
        );
        assert!(!temp_dir.path().join(".out-translated.json.tmp").exists());
    }

    #[test]
    fn test_atomic_write_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing").join("out.txt");

        let err = atomic_write(&file_path, b"content").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
