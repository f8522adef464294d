use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "polyglot")]
#[command(about = "Translate phrases, text files and JSON documents")]
#[command(version)]
pub struct Args {
    /// Phrase to translate
    pub words: Vec<String>,

    /// List available languages
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Target language, by name or code (e.g. French, fr)
    #[arg(short = 't', long = "to", global = true)]
    pub to: Option<String>,

    /// Print debug logs to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Choose and save the default target language
    Language,
    /// Translate a .json or .txt file into a sibling "-translated" file
    File {
        /// File to translate (pick one interactively if omitted)
        path: Option<PathBuf>,
    },
    /// Open Google Translate in the browser
    Web,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_words_and_language() {
        let args = Args::try_parse_from(["polyglot", "-t", "fr", "good", "morning"]).unwrap();
        assert_eq!(args.words, ["good", "morning"]);
        assert_eq!(args.to.as_deref(), Some("fr"));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_file_subcommand_with_global_language() {
        let args = Args::try_parse_from(["polyglot", "file", "en.json", "--to", "de"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::File { path: Some(ref p) }) if p == &PathBuf::from("en.json")
        ));
        assert_eq!(args.to.as_deref(), Some("de"));
    }

    #[test]
    fn test_list_flag() {
        let args = Args::try_parse_from(["polyglot", "--list"]).unwrap();
        assert!(args.list);
        assert!(args.words.is_empty());
    }
}
