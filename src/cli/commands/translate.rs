use anyhow::Result;

use crate::config::LanguageStore;
use crate::translation::{Orchestrator, Translator};
use crate::ui::{Spinner, Style};

/// Translates the given words and prints `Translation: {text}`.
pub async fn run_translate<T, S>(
    orchestrator: &Orchestrator<T, S>,
    words: &[String],
    to: Option<&str>,
) -> Result<()>
where
    T: Translator,
    S: LanguageStore,
{
    let translation =
        Spinner::wrap("Translating...", orchestrator.translate_text(words, to)).await?;

    println!("{} {}", Style::header("Translation:"), translation.trim_end());
    Ok(())
}
