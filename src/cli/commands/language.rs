use anyhow::{Context, Result};
use inquire::Select;
use std::fmt;

use crate::config::LanguageStore;
use crate::translation::Language;
use crate::ui::{Style, handle_prompt_cancellation};

struct LanguageOption(Language);

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0.long_name, self.0.short_name)
    }
}

/// Lets the user pick a default target language and persists it.
pub fn run_set_language<S: LanguageStore>(store: &mut S) -> Result<()> {
    let Some(language) = handle_prompt_cancellation(|| select_language(store))? else {
        return Ok(());
    };

    store
        .set_default_language(&language.short_name)
        .context("Failed to save default language")?;

    println!(
        "{} Default language set to {} ({})",
        Style::success("✓"),
        language.long_name,
        Style::code(&language.short_name)
    );
    Ok(())
}

fn select_language<S: LanguageStore>(store: &S) -> Result<Language> {
    let languages = store.languages();
    let current = store.default_language();
    let starting_cursor = current
        .as_deref()
        .and_then(|code| languages.iter().position(|l| l.short_name == code))
        .unwrap_or(0);

    let options: Vec<LanguageOption> = languages.into_iter().map(LanguageOption).collect();

    let choice = Select::new("Default language:", options)
        .with_starting_cursor(starting_cursor)
        .with_help_message("Type to filter, ↑↓ to move, enter to select")
        .prompt()?;

    Ok(choice.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_option_display() {
        let option = LanguageOption(Language::new("French", "fr"));
        assert_eq!(option.to_string(), "French (fr)");
    }
}
