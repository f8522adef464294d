use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::error::{Error, Result};

/// A machine translation backend.
///
/// Takes text and a target language code and returns the translated text.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String>;
}

#[async_trait]
impl<T: Translator + ?Sized> Translator for Box<T> {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        (**self).translate(text, target_language).await
    }
}

/// Builds the HTTP client shared by the network backends.
pub fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::http("Failed to build HTTP client", e))
}
