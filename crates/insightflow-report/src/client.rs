//! HTTP client for the chat-completions service.
//!
//! Speaks the OpenAI-compatible `/chat/completions` wire format (OpenRouter
//! in production). One prompt in, one completion text out; every way the
//! response can disappoint (non-2xx, bad JSON, no choices, empty content)
//! maps to a distinct [`ReportError`] so the retry layer can tell transient
//! from hopeless.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::types::ReportConfig;

pub(crate) struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    temperature: f64,
    completions_url: Url,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

impl LlmClient {
    /// Creates a client for the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ReportError::MalformedResponse`] if the
    /// base URL is not a valid URL.
    pub(crate) fn new(config: &ReportConfig) -> Result<Self, ReportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("insightflow/0.1 (weekly-reporting)")
            .build()?;

        let normalised = format!("{}/", config.base_url.trim_end_matches('/'));
        let completions_url = Url::parse(&normalised)
            .and_then(|base| base.join("chat/completions"))
            .map_err(|e| {
                ReportError::MalformedResponse(format!(
                    "invalid base URL '{}': {e}",
                    config.base_url
                ))
            })?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            completions_url,
        })
    }

    /// Sends one prompt and returns the completion text.
    ///
    /// # Errors
    ///
    /// - [`ReportError::Http`] on network failure or timeout.
    /// - [`ReportError::Api`] on a non-2xx response.
    /// - [`ReportError::MalformedResponse`] when the body is not valid JSON
    ///   or carries no non-empty completion text.
    pub(crate) async fn complete(&self, prompt: &str) -> Result<String, ReportError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(self.completions_url.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("error")
                        .and_then(|e| e.get("message"))
                        .and_then(serde_json::Value::as_str)
                        .map(ToString::to_string)
                })
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(ReportError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| ReportError::MalformedResponse(format!("invalid JSON body: {e}")))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(ReportError::MalformedResponse(
                "response carried no completion text".to_string(),
            ));
        }

        Ok(content)
    }
}
