//! Subcommand implementations.

/// File translation command handler.
pub mod file;

/// Default language selection.
pub mod language;

/// Phrase translation.
pub mod translate;

/// Browser launcher for the translation website.
pub mod web;
