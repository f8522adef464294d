use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use super::backend::Translator;
use crate::error::{Error, Result};

/// Public web endpoint used by the browser extension and the website.
pub const GOOGLE_TRANSLATE_API: &str = "https://translate.googleapis.com/translate_a/single";

/// Website opened by the `web` command.
pub const GOOGLE_TRANSLATE_WEB: &str = "https://translate.google.com";

/// Translator backed by the keyless Google Translate web endpoint.
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, GOOGLE_TRANSLATE_API)
    }

    pub fn with_endpoint(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// The batch goes in a form body; a 1 MiB input does not fit in a URL.
    fn request(&self, text: &str, target_language: &str) -> RequestBuilder {
        self.client
            .post(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_language),
                ("dt", "t"),
            ])
            .form(&[("q", text)])
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        tracing::debug!(
            endpoint = %self.endpoint,
            target_language,
            chars = text.len(),
            "requesting translation"
        );

        let response = self
            .request(text, target_language)
            .send()
            .await
            .map_err(|e| Error::http("Failed to reach Google Translate", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::backend(format!(
                "Google Translate responded with status {status}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::http("Google Translate returned malformed JSON", e))?;

        parse_response(&body)
    }
}

/// Joins the translated segments of a `translate_a/single` reply.
///
/// The reply looks like `[[["Hola","Hello",null,null,10], ...], null, "en"]`.
fn parse_response(body: &Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::backend("Unexpected Google Translate response shape"))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(Error::backend("Google Translate returned no text"));
    }

    Ok(translated)
}
