use super::manager::{ConfigFile, ConfigManager};
use crate::error::Result;
use crate::translation::{Catalog, Language};

/// Persisted user settings the orchestrator reads: the default target
/// language and the language catalog.
pub trait LanguageStore {
    fn default_language(&self) -> Option<String>;

    fn set_default_language(&mut self, code: &str) -> Result<()>;

    fn languages(&self) -> Vec<Language>;
}

/// A [`LanguageStore`] backed by the config file. Writes are saved
/// immediately.
pub struct ConfigStore {
    manager: ConfigManager,
    config: ConfigFile,
}

impl ConfigStore {
    pub fn open(manager: ConfigManager) -> Result<Self> {
        let config = manager.load()?;
        Ok(Self { manager, config })
    }

    pub const fn config(&self) -> &ConfigFile {
        &self.config
    }

    pub const fn manager(&self) -> &ConfigManager {
        &self.manager
    }
}

impl LanguageStore for ConfigStore {
    fn default_language(&self) -> Option<String> {
        self.config.default_language.clone()
    }

    fn set_default_language(&mut self, code: &str) -> Result<()> {
        self.config.default_language = Some(code.to_string());
        self.manager.save(&self.config)
    }

    fn languages(&self) -> Vec<Language> {
        let Some(table) = &self.config.languages else {
            return Catalog::builtin().languages().to_vec();
        };

        table.to_languages().unwrap_or_else(|| {
            tracing::warn!(
                long_names = table.long_names.len(),
                short_names = table.short_names.len(),
                "language lists in config differ in length, using built-in catalog"
            );
            Catalog::builtin().languages().to_vec()
        })
    }
}

/// An in-process [`LanguageStore`].
#[derive(Debug, Clone)]
pub struct MemoryStore {
    default_language: Option<String>,
    languages: Vec<Language>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_default_language(mut self, code: impl Into<String>) -> Self {
        self.default_language = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_languages(mut self, languages: Vec<Language>) -> Self {
        self.languages = languages;
        self
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            default_language: None,
            languages: Catalog::builtin().languages().to_vec(),
        }
    }
}

impl LanguageStore for MemoryStore {
    fn default_language(&self) -> Option<String> {
        self.default_language.clone()
    }

    fn set_default_language(&mut self, code: &str) -> Result<()> {
        self.default_language = Some(code.to_string());
        Ok(())
    }

    fn languages(&self) -> Vec<Language> {
        self.languages.clone()
    }
}
