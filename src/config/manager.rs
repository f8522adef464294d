use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::paths;
use crate::translation::{ChatTranslator, GoogleTranslator, Language, Translator, http_client};

/// Request timeout used when the config does not set one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// The language catalog as two parallel lists aligned by index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTable {
    pub long_names: Vec<String>,
    pub short_names: Vec<String>,
}

impl LanguageTable {
    /// Pairs up the two lists. Returns `None` if their lengths differ.
    pub fn to_languages(&self) -> Option<Vec<Language>> {
        if self.long_names.len() != self.short_names.len() {
            return None;
        }
        Some(
            self.long_names
                .iter()
                .zip(&self.short_names)
                .map(|(long, short)| Language::new(long.clone(), short.clone()))
                .collect(),
        )
    }
}

impl From<&[Language]> for LanguageTable {
    fn from(languages: &[Language]) -> Self {
        Self {
            long_names: languages.iter().map(|l| l.long_name.clone()).collect(),
            short_names: languages.iter().map(|l| l.short_name.clone()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Keyless Google Translate web endpoint.
    #[default]
    Google,
    /// OpenAI-compatible chat completions endpoint.
    Openai,
}

/// The `[backend]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub kind: BackendKind,
    /// API endpoint URL (chat backends; overrides the Google endpoint).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl BackendConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    /// Returns `true` if this backend is configured to send an API key.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/polyglot/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Persisted default target language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    /// Custom language catalog; the built-in one is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<LanguageTable>,
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Builds the translation backend described by `config`.
///
/// # Errors
///
/// Returns an error if a chat backend lacks its endpoint, model or a
/// required API key.
pub fn resolve_backend(config: &BackendConfig) -> Result<Box<dyn Translator>> {
    let client = http_client(config.timeout())?;

    match config.kind {
        BackendKind::Google => Ok(Box::new(match &config.endpoint {
            Some(endpoint) => GoogleTranslator::with_endpoint(client, endpoint.clone()),
            None => GoogleTranslator::new(client),
        })),
        BackendKind::Openai => {
            let endpoint = config.endpoint.clone().ok_or_else(|| {
                Error::Config(
                    "Missing required setting: 'backend.endpoint'\n\n\
                     Add it to ~/.config/polyglot/config.toml, e.g.\n  \
                     [backend]\n  \
                     kind = \"openai\"\n  \
                     endpoint = \"http://localhost:11434\""
                        .to_string(),
                )
            })?;

            let model = config.model.clone().ok_or_else(|| {
                Error::Config(
                    "Missing required setting: 'backend.model'\n\n\
                     Add it to ~/.config/polyglot/config.toml, e.g.\n  \
                     model = \"gemma3:12b\""
                        .to_string(),
                )
            })?;

            let api_key = config.get_api_key();
            if config.requires_api_key() && api_key.is_none() {
                let env_var = config.api_key_env.as_deref().unwrap_or("API_KEY");
                return Err(Error::Config(format!(
                    "The backend requires an API key\n\n\
                     Set the {env_var} environment variable:\n  \
                     export {env_var}=\"your-api-key\"\n\n\
                     Or set backend.api_key in ~/.config/polyglot/config.toml"
                )));
            }

            Ok(Box::new(ChatTranslator::new(client, endpoint, model, api_key)))
        }
    }
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for `$XDG_CONFIG_HOME/polyglot/config.toml`
    /// or `~/.config/polyglot/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self::at(paths::config_dir()?.join("config.toml")))
    }

    pub const fn at(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Loads the config file. A missing file yields the defaults.
    pub fn load(&self) -> Result<ConfigFile> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.config_path.display(),
                    "no config file, using defaults"
                );
                return Ok(ConfigFile::default());
            }
            Err(e) => return Err(Error::io("Failed to read config file", &self.config_path, e)),
        };

        toml::from_str(&contents).map_err(|e| {
            Error::Config(format!(
                "Failed to parse {}: {e}",
                self.config_path.display()
            ))
        })
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::io("Failed to create config directory", parent, e))?;
        }

        let contents = toml::to_string_pretty(config)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        fs::write(&self.config_path, contents)
            .map_err(|e| Error::io("Failed to write config file", &self.config_path, e))
    }
}
