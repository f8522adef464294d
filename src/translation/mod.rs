mod backend;
mod client;
mod google;
mod language;
mod orchestrator;
mod prompt;
mod sse_parser;

pub use backend::{Translator, http_client};
pub use client::ChatTranslator;
pub use google::{GOOGLE_TRANSLATE_API, GOOGLE_TRANSLATE_WEB, GoogleTranslator};
pub use language::{BUILTIN_LANGUAGES, Catalog, FALLBACK_LANGUAGE, Language, print_languages};
pub use orchestrator::{FileKind, OUTPUT_SUFFIX, Orchestrator, Pipeline, Stage, output_path};
