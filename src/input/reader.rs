use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

pub const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

pub struct InputReader;

impl InputReader {
    /// Reads a UTF-8 file of at most [`MAX_INPUT_SIZE`] bytes.
    pub fn read_file(path: &Path) -> Result<String> {
        let metadata = fs::metadata(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::io("Failed to access file", path, e),
        })?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            return Err(Error::argument(format!(
                "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                 Consider splitting the file into smaller parts.",
                size as f64 / 1024.0 / 1024.0
            )));
        }

        fs::read_to_string(path).map_err(|e| Error::io("Failed to read file", path, e))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_file_unicode() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("greeting.txt");
        fs::write(&path, "こんにちは世界！\nadiós").unwrap();

        assert_eq!(InputReader::read_file(&path).unwrap(), "こんにちは世界！\nadiós");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let err = InputReader::read_file(Path::new("/nonexistent/path/to/file.txt")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_read_file_exceeds_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("large.txt");
        fs::write(&path, "x".repeat(MAX_INPUT_SIZE + 1)).unwrap();

        let err = InputReader::read_file(&path).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_file_at_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("max.txt");
        fs::write(&path, "x".repeat(MAX_INPUT_SIZE)).unwrap();

        assert_eq!(InputReader::read_file(&path).unwrap().len(), MAX_INPUT_SIZE);
    }

    #[test]
    fn test_read_file_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(InputReader::read_file(&path), Err(Error::Io { .. })));
    }
}
