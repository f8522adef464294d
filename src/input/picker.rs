//! Discovery of files the `file` command can offer for translation.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};

pub const SUPPORTED_EXTENSIONS: &[&str] = &["json", "txt"];

/// Directories never descended into, besides hidden ones.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules"];

fn is_excluded(entry: &DirEntry) -> bool {
    // The root itself may be "." or a hidden directory the user chose.
    if entry.depth() == 0 {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || (entry.file_type().is_dir() && EXCLUDED_DIRS.contains(&&*name))
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Lists translatable files under `root`, sorted by path and relative to it.
///
/// Hidden files and directories and dependency directories are skipped.
pub fn find_candidates(root: &Path) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded(e))
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            Error::io("Failed to read directory entry", path, e.into())
        })?;

        if entry.file_type().is_file() && has_supported_extension(entry.path()) {
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            candidates.push(relative.to_path_buf());
        }
    }

    candidates.sort();
    Ok(candidates)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "{}").unwrap();
    }

    #[test]
    fn test_find_candidates_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for file in [
            "b.txt",
            "a.json",
            "notes.md",
            "locales/fr.JSON",
            ".env.json",
            ".git/config.json",
            "node_modules/pkg/package.json",
            "src/node_modules.txt",
        ] {
            touch(root, file);
        }

        let found = find_candidates(root).unwrap();

        assert_eq!(
            found,
            vec![
                PathBuf::from("a.json"),
                PathBuf::from("b.txt"),
                PathBuf::from("locales/fr.JSON"),
                PathBuf::from("src/node_modules.txt"),
            ]
        );
    }

    #[test]
    fn test_find_candidates_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(find_candidates(temp_dir.path()).unwrap().is_empty());
    }
}
