use anyhow::{Context, Result};
use inquire::Select;
use std::path::{Path, PathBuf};

use crate::config::LanguageStore;
use crate::error::Error;
use crate::input::find_candidates;
use crate::translation::{Orchestrator, Translator};
use crate::ui::{Spinner, Style, handle_prompt_cancellation};

/// Translates `path`, or a file picked from the current directory when no
/// path is given, and reports where the translation was written.
pub async fn run_file<T, S>(
    orchestrator: &Orchestrator<T, S>,
    path: Option<PathBuf>,
    to: Option<&str>,
) -> Result<()>
where
    T: Translator,
    S: LanguageStore,
{
    // Reject a bad --to before prompting or reading anything.
    orchestrator.resolve_target(to)?;

    let path = match path {
        Some(path) => path,
        None => match handle_prompt_cancellation(|| pick_file(Path::new(".")))? {
            Some(path) => path,
            None => return Ok(()),
        },
    };

    let output = Spinner::wrap(
        "Translating...",
        orchestrator.translate_file(&path, to),
    )
    .await?;

    println!(
        "{} Translated {} → {}",
        Style::success("✓"),
        Style::value(path.display()),
        Style::value(output.display())
    );
    Ok(())
}

fn pick_file(root: &Path) -> Result<PathBuf> {
    let candidates = find_candidates(root)?;
    if candidates.is_empty() {
        return Err(Error::argument(
            "No .json or .txt files found in the current directory.",
        )
        .into());
    }

    let options: Vec<String> = candidates
        .iter()
        .map(|path| path.display().to_string())
        .collect();

    let choice = Select::new("File to translate:", options)
        .with_help_message("Type to filter, ↑↓ to move, enter to select")
        .prompt()
        .context("File selection failed")?;

    Ok(root.join(choice))
}
