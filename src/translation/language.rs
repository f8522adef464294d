//! Language catalog and target-language validation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ui::Style;

/// Built-in catalog as (long name, short code) pairs, used when the
/// configuration does not carry its own.
pub const BUILTIN_LANGUAGES: &[(&str, &str)] = &[
    ("Afrikaans", "af"),
    ("Albanian", "sq"),
    ("Amharic", "am"),
    ("Arabic", "ar"),
    ("Armenian", "hy"),
    ("Azerbaijani", "az"),
    ("Basque", "eu"),
    ("Belarusian", "be"),
    ("Bengali", "bn"),
    ("Bosnian", "bs"),
    ("Bulgarian", "bg"),
    ("Catalan", "ca"),
    ("Chinese (Simplified)", "zh-CN"),
    ("Chinese (Traditional)", "zh-TW"),
    ("Croatian", "hr"),
    ("Czech", "cs"),
    ("Danish", "da"),
    ("Dutch", "nl"),
    ("English", "en"),
    ("Estonian", "et"),
    ("Filipino", "tl"),
    ("Finnish", "fi"),
    ("French", "fr"),
    ("Galician", "gl"),
    ("Georgian", "ka"),
    ("German", "de"),
    ("Greek", "el"),
    ("Gujarati", "gu"),
    ("Hebrew", "iw"),
    ("Hindi", "hi"),
    ("Hungarian", "hu"),
    ("Icelandic", "is"),
    ("Indonesian", "id"),
    ("Irish", "ga"),
    ("Italian", "it"),
    ("Japanese", "ja"),
    ("Kannada", "kn"),
    ("Kazakh", "kk"),
    ("Khmer", "km"),
    ("Korean", "ko"),
    ("Lao", "lo"),
    ("Latin", "la"),
    ("Latvian", "lv"),
    ("Lithuanian", "lt"),
    ("Macedonian", "mk"),
    ("Malay", "ms"),
    ("Malayalam", "ml"),
    ("Maltese", "mt"),
    ("Marathi", "mr"),
    ("Mongolian", "mn"),
    ("Myanmar (Burmese)", "my"),
    ("Nepali", "ne"),
    ("Norwegian", "no"),
    ("Pashto", "ps"),
    ("Persian", "fa"),
    ("Polish", "pl"),
    ("Portuguese", "pt"),
    ("Punjabi", "pa"),
    ("Romanian", "ro"),
    ("Russian", "ru"),
    ("Serbian", "sr"),
    ("Sinhala", "si"),
    ("Slovak", "sk"),
    ("Slovenian", "sl"),
    ("Spanish", "es"),
    ("Swahili", "sw"),
    ("Swedish", "sv"),
    ("Tamil", "ta"),
    ("Telugu", "te"),
    ("Thai", "th"),
    ("Turkish", "tr"),
    ("Ukrainian", "uk"),
    ("Urdu", "ur"),
    ("Uzbek", "uz"),
    ("Vietnamese", "vi"),
    ("Welsh", "cy"),
];

/// Fallback target when neither an explicit nor a default language is set.
pub const FALLBACK_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub long_name: String,
    pub short_name: String,
}

impl Language {
    pub fn new(long_name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            long_name: long_name.into(),
            short_name: short_name.into(),
        }
    }
}

/// An ordered list of supported languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    languages: Vec<Language>,
}

impl Catalog {
    pub const fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_LANGUAGES
                .iter()
                .map(|(long, short)| Language::new(*long, *short))
                .collect(),
        )
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn find(&self, name: &str) -> Option<&Language> {
        self.languages.iter().find(|lang| {
            lang.short_name == name || lang.long_name.eq_ignore_ascii_case(name)
        })
    }

    /// Resolves a long name or short code to its short code.
    ///
    /// Short codes match exactly, long names ignore ASCII case.
    pub fn resolve(&self, name: &str) -> Result<String> {
        self.find(name)
            .map(|lang| lang.short_name.clone())
            .ok_or_else(|| {
                Error::argument(format!(
                    "Invalid language: '{name}'\n\n\
                     Use a language name or code, e.g. French or fr.\n\
                     Run 'polyglot --list' to see all supported languages."
                ))
            })
    }
}

/// Prints every language as `{long} ({short})`, one per line.
pub fn print_languages(languages: &[Language]) {
    for lang in languages {
        println!("{} ({})", lang.long_name, Style::code(&lang.short_name));
    }
}
