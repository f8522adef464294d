//! Coordinates target-language resolution, the document pipeline and file I/O.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::backend::Translator;
use super::language::{Catalog, FALLBACK_LANGUAGE};
use crate::config::LanguageStore;
use crate::document::{Document, decode, encode, extract, rebuild};
use crate::error::{Error, Result};
use crate::fs::atomic_write;
use crate::input::InputReader;

/// Suffix inserted between a file's stem and its extension on output.
pub const OUTPUT_SUFFIX: &str = "-translated";

/// Progress of a single [`Pipeline`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Extracting,
    Encoding,
    AwaitingBackend,
    Decoding,
    Rebuilding,
    Done,
    Failed,
}

/// The shapes of file the orchestrator can translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// The whole file is sent as one message.
    Text,
    /// A JSON document translated leaf by leaf in one batch.
    Json,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("txt") => Ok(Self::Text),
            _ => Err(Error::UnsupportedFile(path.to_path_buf())),
        }
    }
}

/// Returns the sibling path a translation of `input` is written to:
/// `notes.json` becomes `notes-translated.json`.
pub fn output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let file_name = match input.extension() {
        Some(ext) => format!("{stem}{OUTPUT_SUFFIX}.{}", ext.to_string_lossy()),
        None => format!("{stem}{OUTPUT_SUFFIX}"),
    };
    input.with_file_name(file_name)
}

/// One translation of one document through a backend.
///
/// A pipeline runs once. Any error moves it to [`Stage::Failed`] and nothing
/// is produced.
pub struct Pipeline<'a, T: ?Sized> {
    translator: &'a T,
    stage: Stage,
}

impl<'a, T: Translator + ?Sized> Pipeline<'a, T> {
    pub const fn new(translator: &'a T) -> Self {
        Self {
            translator,
            stage: Stage::Idle,
        }
    }

    pub const fn stage(&self) -> Stage {
        self.stage
    }

    fn enter(&mut self, stage: Stage) {
        debug!(from = ?self.stage, to = ?stage, "pipeline stage");
        self.stage = stage;
    }

    fn start(&self) -> Result<()> {
        if self.stage == Stage::Idle {
            Ok(())
        } else {
            Err(Error::Internal(format!(
                "pipeline already ran (stage {:?})",
                self.stage
            )))
        }
    }

    fn finish<R>(&mut self, result: Result<R>) -> Result<R> {
        self.enter(if result.is_ok() {
            Stage::Done
        } else {
            Stage::Failed
        });
        result
    }

    /// Translates every leaf of `document` with a single backend call.
    pub async fn run(&mut self, document: &Document, target_language: &str) -> Result<Document> {
        self.start()?;
        let result = self.run_document(document, target_language).await;
        self.finish(result)
    }

    /// Sends `text` to the backend as one message.
    pub async fn run_text(&mut self, text: &str, target_language: &str) -> Result<String> {
        self.start()?;
        self.enter(Stage::AwaitingBackend);
        let result = self.translator.translate(text, target_language).await;
        self.finish(result)
    }

    async fn run_document(
        &mut self,
        document: &Document,
        target_language: &str,
    ) -> Result<Document> {
        self.enter(Stage::Extracting);
        let records = extract(document);
        if records.is_empty() {
            debug!("document has no translatable leaves");
            return Ok(Document::new());
        }

        self.enter(Stage::Encoding);
        let batch = encode(&records)?;

        self.enter(Stage::AwaitingBackend);
        let translated = self.translator.translate(&batch, target_language).await?;

        self.enter(Stage::Decoding);
        let decoded = decode(&translated)?;
        if decoded.len() != records.len() {
            return Err(Error::Decoding(format!(
                "expected {} entries, got {}",
                records.len(),
                decoded.len()
            )));
        }

        self.enter(Stage::Rebuilding);
        rebuild(&records, decoded)
    }
}

/// Resolves target languages and runs translations against a backend.
pub struct Orchestrator<T, S> {
    translator: T,
    store: S,
}

impl<T: Translator, S: LanguageStore> Orchestrator<T, S> {
    pub const fn new(translator: T, store: S) -> Self {
        Self { translator, store }
    }

    pub const fn translator(&self) -> &T {
        &self.translator
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.store.languages())
    }

    /// Picks the target language: the explicit choice (validated against the
    /// catalog), then the stored default, then [`FALLBACK_LANGUAGE`].
    pub fn resolve_target(&self, explicit: Option<&str>) -> Result<String> {
        if let Some(name) = explicit {
            return self.catalog().resolve(name);
        }
        Ok(self
            .store
            .default_language()
            .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string()))
    }

    /// Translates a phrase given as separate words.
    pub async fn translate_text(
        &self,
        words: &[String],
        explicit: Option<&str>,
    ) -> Result<String> {
        let target = self.resolve_target(explicit)?;
        let text = words.join(" ");
        if text.trim().is_empty() {
            return Err(Error::argument(
                "Nothing to translate.\n\n\
                 Pass a phrase, e.g. 'polyglot good morning', or run 'polyglot --help'.",
            ));
        }

        Pipeline::new(&self.translator).run_text(&text, &target).await
    }

    pub async fn translate_document(
        &self,
        document: &Document,
        explicit: Option<&str>,
    ) -> Result<Document> {
        let target = self.resolve_target(explicit)?;
        Pipeline::new(&self.translator).run(document, &target).await
    }

    /// Translates a `.json` or `.txt` file and writes the result next to it.
    ///
    /// The output file is only written once the whole translation succeeded.
    /// Returns the output path.
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn translate_file(&self, path: &Path, explicit: Option<&str>) -> Result<PathBuf> {
        let target = self.resolve_target(explicit)?;
        if !path.is_file() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let kind = FileKind::from_path(path)?;
        let source = InputReader::read_file(path)?;

        let mut pipeline = Pipeline::new(&self.translator);
        let output = match kind {
            FileKind::Text => {
                if source.trim().is_empty() {
                    return Err(Error::argument(format!(
                        "{} is empty, nothing to translate",
                        path.display()
                    )));
                }
                pipeline.run_text(&source, &target).await?.into_bytes()
            }
            FileKind::Json => {
                let document: Document =
                    serde_json::from_str(&source).map_err(|source| Error::InvalidDocument {
                        path: path.to_path_buf(),
                        source,
                    })?;
                pipeline
                    .run(&document, &target)
                    .await?
                    .to_pretty_bytes()
                    .map_err(Error::Encoding)?
            }
        };

        let destination = output_path(path);
        atomic_write(&destination, &output)?;
        info!(output = %destination.display(), target = %target, "wrote translation");

        Ok(destination)
    }
}
