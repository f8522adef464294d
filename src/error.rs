//! Error taxonomy shared by the library.
//!
//! Command handlers and `main` wrap these in `anyhow` for context; the library
//! itself always returns the typed [`Error`] so callers can match on the cause.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or missing command-line input (raised before any I/O).
    #[error("{0}")]
    Argument(String),

    /// The translation backend failed or returned something unusable.
    #[error("Translation failed: {message}")]
    Backend {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported file type: {} (expected .json or .txt)", .0.display())]
    UnsupportedFile(PathBuf),

    /// A leaf could not be serialized into the batch.
    #[error("Failed to encode batch: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The translated batch could not be split back into entries.
    #[error("Failed to decode translated batch: {0}")]
    Decoding(String),

    /// A decoded entry points at a record that was never extracted.
    #[error("Decoded index {index} is out of range ({len} records extracted)")]
    Rebuild { index: usize, len: usize },

    #[error("Invalid JSON document {}: {source}", path.display())]
    InvalidDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{context}: {}", path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    /// The library was driven in a way it does not support, such as
    /// reusing a finished pipeline.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument(message.into())
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
            source: None,
        }
    }

    pub fn http(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Backend {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            context,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebuild_error_message() {
        let err = Error::Rebuild { index: 7, len: 2 };
        assert_eq!(
            err.to_string(),
            "Decoded index 7 is out of range (2 records extracted)"
        );
    }

    #[test]
    fn test_io_error_includes_path() {
        let err = Error::io(
            "Failed to read file",
            "/tmp/missing.txt",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.to_string(), "Failed to read file: /tmp/missing.txt");
    }
}
