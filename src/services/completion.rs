//! Client for an OpenAI-compatible `chat/completions` endpoint.
//!
//! [`CompletionClient`] is the seam the relay depends on; [`OpenAiClient`] is
//! the reqwest-backed implementation wired up in `main`. Tests substitute
//! their own implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client as HttpClient, StatusCode,
    header::{AUTHORIZATION, HeaderValue},
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Every way an upstream call can fail. The `Display` text is what the
/// caller sees appended to the apology, so keep it human readable.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("no API key configured (set OPENAI_API_KEY)")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error code: {status} - {message}")]
    Api { status: StatusCode, message: String },

    #[error("couldn't decode completion response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("completion response contained no choices")]
    EmptyChoices,

    #[error("completion choice contained no text")]
    EmptyContent,
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run one non-streaming completion over `messages` and return the text
    /// of the first choice.
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, CompletionError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Shares a single `reqwest::Client`, so cloning is cheap.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: Option<String>,
    http: HttpClient,
    base: String,
}

impl OpenAiClient {
    /// Build a client with its own `reqwest::Client` using `timeout` per request.
    ///
    /// A missing key is accepted here; every call then fails with
    /// [`CompletionError::MissingApiKey`].
    pub fn new(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self::with_http(api_key, http, base_url))
    }

    pub fn with_http(api_key: Option<String>, http: HttpClient, base_url: Option<String>) -> Self {
        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            http,
            base: base.trim_end_matches('/').to_owned(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        let api_key = self.api_key.as_deref().ok_or(CompletionError::MissingApiKey)?;
        let auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| CompletionError::Api {
            status: StatusCode::UNAUTHORIZED,
            message: "API key contains characters that cannot be sent in a header".to_owned(),
        })?;

        let url = format!("{}/chat/completions", self.base);
        let resp = self
            .http
            .post(url)
            .header(AUTHORIZATION, auth)
            .json(&ChatCompletionRequest { model, messages })
            .send()
            .await?;

        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            return Err(CompletionError::Api { status, message: api_error_message(&bytes) });
        }

        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        let choice = parsed.choices.into_iter().next().ok_or(CompletionError::EmptyChoices)?;
        choice.message.content.ok_or(CompletionError::EmptyContent)
    }
}

// Prefer the `{"error": {"message": ..}}` envelope, fall back to the raw body.
fn api_error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<ApiErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => String::from_utf8_lossy(body).trim().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(ChatMessage::system("be brief")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "system", "content": "be brief"}));
        let json = serde_json::to_value(ChatMessage::user("UK")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "UK"}));
    }

    #[test]
    fn error_message_prefers_envelope() {
        let body = br#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(api_error_message(body), "Incorrect API key provided");
        assert_eq!(api_error_message(b" upstream exploded \n"), "upstream exploded");
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let client = OpenAiClient::with_http(Some("  ".into()), HttpClient::new(), None);
        assert!(!client.has_api_key());
    }
}
