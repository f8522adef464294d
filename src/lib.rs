//! # polyglot - Translation CLI
//!
//! `polyglot` translates short phrases, plain text files and nested JSON
//! documents such as i18n message catalogs.
//!
//! ## Features
//!
//! - **Phrases**: `polyglot good morning` prints the translation
//! - **Files**: `polyglot file en.json` writes `en-translated.json`, keeping
//!   the document's nesting and key order
//! - **Single request per document**: every string of a JSON file is packed
//!   into one batch, translated in one call and put back where it came from
//! - **Default language**: `polyglot language` saves the target used when
//!   `--to` is not given
//!
//! ## Quick Start
//!
//! ```bash
//! polyglot --to fr good morning
//! polyglot --list
//! polyglot language
//! polyglot file            # pick a .json or .txt file interactively
//! polyglot file en.json --to ja
//! polyglot web
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/polyglot/config.toml`:
//!
//! ```toml
//! default_language = "fr"
//!
//! [backend]
//! kind = "openai"
//! endpoint = "http://localhost:11434"
//! model = "gemma3:12b"
//! ```
//!
//! Without a `[backend]` section the keyless Google Translate endpoint is used.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and the persisted language store.
pub mod config;

/// Document model and the batch re-translation pipeline.
pub mod document;

/// Error types.
pub mod error;

/// File system utilities.
pub mod fs;

/// Input reading and file discovery.
pub mod input;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation backends, language catalog and orchestration.
pub mod translation;

/// Terminal UI components (spinner, colors, prompts).
pub mod ui;

pub use error::{Error, Result};
