use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::application::ChatClient;
use crate::domain::{ChatMessage, DomainError};

const CHAT_PATH: &str = "/api/chat";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
    options: ApiOptions,
}

#[derive(Serialize)]
struct ApiOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct ApiResponse {
    message: ApiMessage,
}

#[derive(Deserialize)]
struct ApiMessage {
    content: String,
}

/// HTTP client for a local Ollama server's non-streaming chat endpoint.
///
/// Before each request the client sends a `HEAD /` probe with a 2-second
/// timeout, so a stopped Ollama daemon fails fast instead of waiting for the
/// full request timeout.
pub struct OllamaClient {
    client: reqwest::Client,
    probe_client: reqwest::Client,
    model: String,
    /// Full endpoint URL (base + CHAT_PATH).
    url: String,
    /// Base URL used for the probe (e.g. `http://localhost:11434/`).
    base_url: String,
}

impl OllamaClient {
    pub fn new(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let trimmed = base.trim_end_matches('/');
        let url = format!("{trimmed}{CHAT_PATH}");
        let base_url = format!("{trimmed}/");
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            probe_client: reqwest::Client::builder()
                .connect_timeout(PROBE_TIMEOUT)
                .timeout(PROBE_TIMEOUT)
                .build()
                .unwrap_or_default(),
            model: model.into(),
            url,
            base_url,
        }
    }
}

#[async_trait]
impl ChatClient for OllamaClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, DomainError> {
        // Any HTTP response, even 4xx/5xx, means the server is up.
        match self.probe_client.head(&self.base_url).send().await {
            Err(e) if e.is_connect() || e.is_timeout() => {
                return Err(DomainError::provider(format!(
                    "OllamaClient: server not reachable at {}: {e}",
                    self.base_url.trim_end_matches('/')
                )));
            }
            _ => {}
        }

        let request = ApiRequest {
            model: &self.model,
            messages,
            stream: false,
            options: ApiOptions { temperature },
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::provider(format!("OllamaClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OllamaClient: API returned {status}: {body}");
            return Err(DomainError::provider(format!(
                "OllamaClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::provider(format!("OllamaClient: failed to parse response: {e}"))
        })?;

        Ok(api_response.message.content)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn prompt() -> Vec<ChatMessage> {
        vec![
            ChatMessage::system("You are a helpful travel assistant."),
            ChatMessage::human("Create an itinerary for my day trip"),
        ]
    }

    #[tokio::test]
    async fn complete_posts_non_streaming_chat_request() {
        let server = MockServer::start_async().await;

        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/chat").json_body(json!({
                    "model": "qwen3-vl:30b-a3b-instruct",
                    "messages": [
                        {"role": "system", "content": "You are a helpful travel assistant."},
                        {"role": "user", "content": "Create an itinerary for my day trip"}
                    ],
                    "stream": false,
                    "options": {"temperature": 0.2}
                }));
                then.status(200).json_body(json!({
                    "model": "qwen3-vl:30b-a3b-instruct",
                    "message": {"role": "assistant", "content": "- Morning: Louvre"},
                    "done": true
                }));
            })
            .await;

        let client = OllamaClient::new("qwen3-vl:30b-a3b-instruct", server.base_url());
        let text = client.complete(&prompt(), 0.2).await.unwrap();

        assert_eq!(text, "- Morning: Louvre");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn complete_maps_error_status_to_provider_error() {
        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/chat");
                then.status(404)
                    .json_body(json!({"error": "model 'missing' not found"}));
            })
            .await;

        let client = OllamaClient::new("missing", server.base_url());
        let err = client.complete(&prompt(), 0.2).await.unwrap_err();

        assert!(err.is_provider());
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn complete_maps_malformed_body_to_provider_error() {
        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/chat");
                then.status(200).body("not json");
            })
            .await;

        let client = OllamaClient::new("m", server.base_url());
        let err = client.complete(&prompt(), 0.2).await.unwrap_err();

        assert!(err.is_provider());
        assert!(err.to_string().contains("failed to parse response"));
    }

    #[tokio::test]
    async fn complete_fails_fast_when_server_is_down() {
        let client = OllamaClient::new("any", "http://127.0.0.1:1");
        let err = client.complete(&prompt(), 0.2).await.unwrap_err();

        assert!(err.is_provider());
        assert!(err.to_string().contains("not reachable"));
    }

    #[test]
    fn new_normalizes_trailing_slash() {
        let client = OllamaClient::new("m", "http://localhost:11434/");
        assert_eq!(client.url, "http://localhost:11434/api/chat");
        assert_eq!(client.base_url, "http://localhost:11434/");
    }
}
