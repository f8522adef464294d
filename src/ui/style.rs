//! Color helpers for CLI output, built on owo-colors.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Section headers and result labels (e.g. "Translation:")
    pub fn header<T: Display>(text: T) -> String {
        format!("{}", text.bold())
    }

    /// Primary values such as file paths
    pub fn value<T: Display>(text: T) -> String {
        format!("{}", text.cyan())
    }

    pub fn success<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    /// Language codes
    pub fn code<T: Display>(text: T) -> String {
        format!("{}", text.yellow())
    }
}
