//! LLM Client — the single point of entry for chat-completion calls.
//!
//! No other module talks to the provider directly. The service layer depends on the
//! `ChatCompletion` trait so it can be exercised without a network.
//!
//! Provider: OpenRouter (OpenAI-compatible `chat/completions` envelope).
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Model identifier sent with every completion request.
pub const MODEL: &str = "deepseek/deepseek-chat:free";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed completion envelope: {0}")]
    Envelope(#[from] serde_json::Error),

    #[error("LLM returned no completion choice")]
    EmptyContent,
}

impl LlmError {
    /// Upstream HTTP status, when the provider answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::Api { status, .. } => Some(*status),
            LlmError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    /// Kept untyped: providers occasionally send `null` or a non-string here.
    #[serde(default)]
    pub content: serde_json::Value,
}

impl ChatResponse {
    /// Text of the first choice. `None` only when there is no first choice;
    /// a null or non-string `content` reads as empty text.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|c| c.message.content.as_str().unwrap_or_default())
    }
}

/// One system + user exchange against a chat-completion provider.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError>;
}

/// HTTP client for the OpenRouter chat-completion endpoint.
/// Issues exactly one request per call; there is no retry loop.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            api_url,
        })
    }

    /// Makes a raw call to the provider, returning the decoded envelope.
    pub async fn call(&self, system: &str, prompt: &str) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let envelope: ChatResponse = serde_json::from_str(&body)?;

        debug!(
            model = MODEL,
            choices = envelope.choices.len(),
            "LLM call succeeded"
        );

        Ok(envelope)
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(system, prompt).await?;
        response
            .text()
            .map(str::to_owned)
            .ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, key: &str) -> LlmClient {
        LlmClient::new(
            key.to_string(),
            format!("{}/api/v1/chat/completions", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_complete_sends_two_messages_and_returns_first_choice() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": MODEL,
                "messages": [
                    { "role": "system", "content": "sys" },
                    { "role": "user", "content": "hello" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    { "message": { "role": "assistant", "content": "first" } },
                    { "message": { "role": "assistant", "content": "second" } }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server, "test-key")
            .complete("sys", "hello")
            .await
            .unwrap();
        assert_eq!(text, "first");
    }

    #[tokio::test]
    async fn test_auth_failure_surfaces_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("no auth"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server, "")
            .complete("sys", "hello")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server, "key")
            .complete("sys", "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_empty_choices_is_empty_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let err = client_for(&server, "key")
            .complete("sys", "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_non_json_envelope_is_an_envelope_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server, "key")
            .complete("sys", "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Envelope(_)));
    }

    #[tokio::test]
    async fn test_null_content_reads_as_empty_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": null } }]
            })))
            .mount(&server)
            .await;

        let text = client_for(&server, "key")
            .complete("sys", "hello")
            .await
            .unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_non_string_or_missing_content_reads_as_empty_text() {
        let envelope: ChatResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "content": { "general": "A" } } }]
        }))
        .unwrap();
        assert_eq!(envelope.text(), Some(""));

        let envelope: ChatResponse =
            serde_json::from_value(json!({ "choices": [{ "message": {} }] })).unwrap();
        assert_eq!(envelope.text(), Some(""));

        let envelope: ChatResponse = serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert_eq!(envelope.text(), None);
    }
}
