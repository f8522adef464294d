//! XDG-style path utilities for the configuration directory.
//!
//! XDG Base Directory conventions are preferred over OS-specific locations
//! so the config lives in the same place on every platform.

use std::path::PathBuf;

use crate::error::{Error, Result};

const APP_DIR: &str = "polyglot";

/// Returns the configuration directory.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/polyglot` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/polyglot` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    dirs::home_dir()
        .map(|home| home.join(".config").join(APP_DIR))
        .ok_or_else(|| Error::Config("Failed to determine home directory".to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_xdg<F: FnOnce()>(value: Option<&str>, f: F) {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        // SAFETY: serialised with other env-mutating tests
        unsafe {
            match value {
                Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        f();

        // SAFETY: see above
        unsafe {
            match original {
                Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_default() {
        with_xdg(None, || {
            assert!(config_dir().unwrap().ends_with(".config/polyglot"));
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        with_xdg(Some("/custom/config"), || {
            assert_eq!(
                config_dir().unwrap(),
                PathBuf::from("/custom/config/polyglot")
            );
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_ignores_empty_xdg() {
        with_xdg(Some(""), || {
            assert!(config_dir().unwrap().ends_with(".config/polyglot"));
        });
    }
}
