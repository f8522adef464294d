use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use serde::Serialize;
use std::borrow::Cow;

use super::backend::Translator;
use super::prompt::build_system_prompt;
use super::sse_parser::sse_to_text_stream;
use crate::error::{Error, Result};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

/// Translator backed by an OpenAI-compatible chat completions endpoint.
///
/// Responses are streamed and concatenated into a single string.
pub struct ChatTranslator {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl ChatTranslator {
    pub const fn new(
        client: Client,
        endpoint: String,
        model: String,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            endpoint,
            model,
            api_key,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl Translator for ChatTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        let url = self.completions_url();

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Owned(build_system_prompt(target_language)),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(text),
                },
            ],
            stream: true,
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.bearer_auth(api_key);
        }

        tracing::debug!(%url, model = %self.model, "sending chat completion request");

        let response = http_request
            .send()
            .await
            .map_err(|e| Error::http(format!("Failed to connect to API endpoint: {url}"), e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::backend(format!(
                "API request failed with status {status}: {body}"
            )));
        }

        let mut stream = std::pin::pin!(sse_to_text_stream(response.bytes_stream()));
        let mut translated = String::new();
        while let Some(chunk) = stream.next().await {
            translated.push_str(&chunk?);
        }

        if translated.is_empty() {
            return Err(Error::backend("API returned an empty translation"));
        }

        Ok(translated)
    }
}
