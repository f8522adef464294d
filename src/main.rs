use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use polyglot_cli::cli::commands::{file, language, translate, web};
use polyglot_cli::cli::{Args, Command};
use polyglot_cli::config::{ConfigManager, ConfigStore, LanguageStore, resolve_backend};
use polyglot_cli::translation::{Catalog, Orchestrator, print_languages};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,polyglot_cli=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut store = ConfigStore::open(ConfigManager::new()?)?;

    if args.list {
        print_languages(&store.languages());
        return Ok(());
    }

    if let Some(ref lang) = args.to {
        Catalog::new(store.languages()).resolve(lang)?;
    }

    match args.command {
        Some(Command::Language) => {
            language::run_set_language(&mut store)?;
        }
        Some(Command::Web) => {
            web::run_web()?;
        }
        Some(Command::File { path }) => {
            let translator = resolve_backend(&store.config().backend)?;
            let orchestrator = Orchestrator::new(translator, store);
            file::run_file(&orchestrator, path, args.to.as_deref()).await?;
        }
        None => {
            let translator = resolve_backend(&store.config().backend)?;
            let orchestrator = Orchestrator::new(translator, store);
            translate::run_translate(&orchestrator, &args.words, args.to.as_deref()).await?;
        }
    }

    Ok(())
}
