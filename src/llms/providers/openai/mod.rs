//! OpenAI-compatible chat-completion delegate.
//!
//! Posts `{model, messages: [system, user]}` to `{base_url}/chat/completions`
//! with bearer authentication and returns the first choice's content,
//! trimmed. One attempt per call, bounded by the configured timeout.

use async_trait::async_trait;
use serde_json::Value;

use crate::llms::base_llm::{ChatMessage, SlangDelegate, SYSTEM_PROMPT};
use crate::utilities::config::DelegateConfig;
use crate::utilities::errors::DelegateError;

/// Slang delegate backed by an OpenAI-compatible Chat Completions API.
#[derive(Debug, Clone)]
pub struct ChatCompletionDelegate {
    config: DelegateConfig,
    http: reqwest::Client,
}

impl ChatCompletionDelegate {
    /// Create a delegate with its own pooled HTTP client.
    pub fn new(config: DelegateConfig) -> Result<Self, DelegateError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    /// Full URL of the completions endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Build the request body for the Chat Completions API.
    pub fn build_request_body(&self, text: &str) -> Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": [
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(text),
            ],
        })
    }
}

/// Pull `choices[0].message.content` out of a completion response.
fn parse_completion(response: &Value) -> Result<String, DelegateError> {
    response
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(|content| content.trim().to_string())
        .ok_or_else(|| DelegateError::request("No message content in completion response"))
}

#[async_trait]
impl SlangDelegate for ChatCompletionDelegate {
    async fn rewrite(&self, text: &str) -> Result<String, DelegateError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(DelegateError::missing_api_key)?;

        tracing::debug!(
            model = %self.config.model,
            chars = text.chars().count(),
            "Sending slang delegate request"
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&self.build_request_body(text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(200).collect();
            return Err(DelegateError::request(format!(
                "API returned {}: {}",
                status, snippet
            )));
        }

        let json: Value = response.json().await?;
        parse_completion(&json)
    }

    fn provider(&self) -> &str {
        "openai-compatible"
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};

    use super::*;

    /// Serve `router` on an ephemeral local port and return its base URL.
    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/v1", addr)
    }

    fn config(base_url: String, api_key: Option<&str>) -> DelegateConfig {
        DelegateConfig {
            api_key: api_key.map(String::from),
            base_url,
            model: "test-model".to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    async fn echo_completion(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        let authorized = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            == Some("Bearer secret");
        if !authorized {
            return (StatusCode::UNAUTHORIZED, Json(serde_json::json!({"error": "nope"})));
        }
        let user = body["messages"][1]["content"].as_str().unwrap_or_default();
        let reply = format!("  {} no cap \n", user);
        (
            StatusCode::OK,
            Json(serde_json::json!({
                "model": body["model"],
                "choices": [{"message": {"role": "assistant", "content": reply}}],
            })),
        )
    }

    #[test]
    fn test_build_request_body() {
        let delegate = ChatCompletionDelegate::new(config("http://x/v1".into(), None)).unwrap();
        let body = delegate.build_request_body("hello there");
        assert_eq!(body["model"], "test-model");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], SYSTEM_PROMPT);
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "hello there");
        assert_eq!(delegate.endpoint(), "http://x/v1/chat/completions");
    }

    #[test]
    fn test_parse_completion() {
        let ok = serde_json::json!({"choices": [{"message": {"content": "  bet  "}}]});
        assert_eq!(parse_completion(&ok).unwrap(), "bet");

        let empty = serde_json::json!({"choices": []});
        assert!(matches!(parse_completion(&empty), Err(DelegateError::Request { .. })));
    }

    #[tokio::test]
    async fn test_missing_api_key_is_configuration_error() {
        // Unroutable URL: the call must fail before any request is made.
        let delegate = ChatCompletionDelegate::new(config("http://127.0.0.1:1/v1".into(), None)).unwrap();
        let err = delegate.rewrite("hi").await.unwrap_err();
        assert!(matches!(err, DelegateError::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_rewrite_round_trip() {
        let base = spawn(Router::new().route("/v1/chat/completions", post(echo_completion))).await;
        let delegate = ChatCompletionDelegate::new(config(base, Some("secret"))).unwrap();
        let reply = delegate.rewrite("hello friend").await.unwrap();
        assert_eq!(reply, "hello friend no cap");
    }

    #[tokio::test]
    async fn test_http_error_is_request_failure() {
        let base = spawn(Router::new().route("/v1/chat/completions", post(echo_completion))).await;
        let delegate = ChatCompletionDelegate::new(config(base, Some("wrong"))).unwrap();
        let err = delegate.rewrite("hi").await.unwrap_err();
        match err {
            DelegateError::Request { message } => assert!(message.contains("401")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_request_failure() {
        let delegate =
            ChatCompletionDelegate::new(config("http://127.0.0.1:1/v1".into(), Some("secret"))).unwrap();
        let err = delegate.rewrite("hi").await.unwrap_err();
        assert!(matches!(err, DelegateError::Request { .. }));
    }
}
