//! OpenAI-compatible chat-completion client
//!
//! One stateless round trip per call: build the request, POST it, validate
//! the response into exactly three suggestions. No retries, no caching.

use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use super::AiError;
use crate::ai::prompt::{SYSTEM_PROMPT, build_user_prompt, is_requestable};
use crate::ai::suggestion::parse_suggestions;
use crate::config::AiConfig;

/// Default OpenAI chat-completion endpoint
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI-compatible suggestion client
///
/// All generation parameters are captured from [`AiConfig`] at construction
/// and immutable afterwards.
#[derive(Debug)]
pub struct OpenAiClient {
    api_key: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
    endpoint: String,
    http: reqwest::Client,
}

impl OpenAiClient {
    /// Create a suggestion client from configuration
    ///
    /// A missing or empty API key is a construction-time error: no part of
    /// the app can use the client without one.
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        if !config.enabled {
            return Err(AiError::NotConfigured(
                "AI suggestions are disabled in config".to_string(),
            ));
        }

        let api_key = config
            .api_key
            .as_ref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                AiError::NotConfigured(
                    "Missing or empty api_key in [ai] config (or $OPENAI_API_KEY)".to_string(),
                )
            })?;

        Ok(OpenAiClient {
            api_key: api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature.clamp(0.0, 1.0),
            max_tokens: config.max_tokens.max(1),
            endpoint: resolve_endpoint(config.base_url.as_deref()),
            http: reqwest::Client::new(),
        })
    }

    /// Generate exactly three inspiring rephrasings of a task title
    ///
    /// Inputs shorter than three characters return an empty list without
    /// contacting the service. A response that does not normalize to
    /// exactly three suggestions also returns an empty list; transport,
    /// HTTP, and decoding failures surface as typed errors instead.
    pub async fn generate_options(&self, source_text: &str) -> Result<Vec<String>, AiError> {
        if !is_requestable(source_text) {
            return Ok(Vec::new());
        }

        let body = self.build_request_body(source_text)?;

        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Keep the error body for diagnostics; never log the API key
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log::debug!("OpenAI error response ({}): {}", status.as_u16(), message);
            return Err(AiError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;
        let decoded: ChatCompletionResponse =
            serde_json::from_str(&text).map_err(|e| AiError::Parse(e.to_string()))?;

        // A response with no choices is unusable but not an error
        let content = decoded
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .unwrap_or("");

        Ok(parse_suggestions(content))
    }

    /// Generate suggestions, racing the call against a cancellation token
    pub async fn generate_options_with_cancel(
        &self,
        source_text: &str,
        cancel_token: CancellationToken,
    ) -> Result<Vec<String>, AiError> {
        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => Err(AiError::Cancelled),
            result = self.generate_options(source_text) => result,
        }
    }

    /// Serialize the chat-completion request body
    pub fn build_request_body(&self, source_text: &str) -> Result<String, AiError> {
        let request_body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": SYSTEM_PROMPT
                },
                {
                    "role": "user",
                    "content": build_user_prompt(source_text)
                }
            ],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature
        });

        serde_json::to_string(&request_body).map_err(|e| AiError::Parse(e.to_string()))
    }

    /// The endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Resolve the endpoint from an optional base URL override
///
/// Appends `/chat/completions` unless the override already ends with it.
fn resolve_endpoint(base_url: Option<&str>) -> String {
    match base_url {
        None => OPENAI_API_URL.to_string(),
        Some(url) => {
            let trimmed = url.trim_end_matches('/');
            if trimmed.ends_with("/chat/completions") {
                trimmed.to_string()
            } else {
                format!("{}/chat/completions", trimmed)
            }
        }
    }
}

// Response models: only choices[0].message.content is consulted
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[cfg(test)]
#[path = "openai_tests.rs"]
mod openai_tests;
