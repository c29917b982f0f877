use super::LLMClient;
use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Instant;

const MAX_ERROR_BODY_CHARS: usize = 300;

/// Client for OpenAI-compatible `/chat/completions` endpoints (GLM, OpenRouter, local servers)
pub struct ChatCompletionsClient {
    client: reqwest::Client,
}

impl ChatCompletionsClient {
    pub fn new(config: &LLMConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(config.timeout())
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    fn api_key(config: &LLMConfig) -> Result<String> {
        config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::LLMError("Missing API key".to_string()))
    }

    fn endpoint(base_url: &str) -> String {
        if base_url.ends_with('/') {
            format!("{}chat/completions", base_url)
        } else {
            format!("{}/chat/completions", base_url)
        }
    }

    /// Error text for a non-success reply, naming the usual causes
    fn status_error(status: reqwest::StatusCode, body: &str) -> AppError {
        let reason = match status.as_u16() {
            401 | 403 => "API key rejected",
            404 => "model or endpoint not found",
            429 => "rate limited",
            500..=599 => "provider unavailable",
            _ => "request rejected",
        };
        let body: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        AppError::LLMError(format!("{} ({}): {}", reason, status, body.trim()))
    }

    /// `choices[0].message.content`, rejecting empty content
    fn message_content(payload: &Value) -> Result<String> {
        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AppError::LLMError("Reply has no message content".to_string()))
    }
}

#[async_trait]
impl LLMClient for ChatCompletionsClient {
    async fn generate(&self, config: &LLMConfig, system: &str, user: &str) -> Result<String> {
        let api_key = Self::api_key(config)?;
        let url = Self::endpoint(&config.base_url);

        let body = json!({
            "model": config.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ],
            "max_tokens": config.max_tokens,
            "temperature": config.temperature,
            "response_format": { "type": "json_object" },
        });

        let started = Instant::now();
        tracing::debug!(model = %config.model, url = %url, "Requesting content titles");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let kind = if e.is_timeout() { "timed out" } else { "failed" };
                AppError::LLMError(format!("Request to {} {}: {}", url, kind, e))
            })?;

        let status = response.status();
        tracing::debug!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Chat completion answered"
        );

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, &text));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| AppError::LLMError(format!("Reply is not JSON: {}", e)))?;

        Self::message_content(&payload)
    }
}
