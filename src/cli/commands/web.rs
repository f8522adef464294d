use anyhow::{Context, Result, bail};
use std::process::Command;

use crate::translation::GOOGLE_TRANSLATE_WEB;
use crate::ui::Style;

/// Opens the Google Translate website in the default browser.
pub fn run_web() -> Result<()> {
    println!("Opening {}", Style::value(GOOGLE_TRANSLATE_WEB));
    open_url(GOOGLE_TRANSLATE_WEB)
}

const NO_ARGS: &[&str] = &[];
// `start` treats its first quoted argument as the window title.
const WINDOWS_START_ARGS: &[&str] = &["/C", "start", ""];

fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", NO_ARGS)
    } else if cfg!(target_os = "windows") {
        ("cmd", WINDOWS_START_ARGS)
    } else {
        ("xdg-open", NO_ARGS)
    }
}

fn open_url(url: &str) -> Result<()> {
    let (program, args) = opener();
    tracing::debug!(program, url, "launching browser");

    let status = Command::new(program)
        .args(args)
        .arg(url)
        .status()
        .with_context(|| format!("Failed to launch '{program}' to open {url}"))?;

    if !status.success() {
        bail!("'{program}' exited with {status} while opening {url}");
    }
    Ok(())
}
