//! AI provider abstraction
//!
//! Defines the AiError taxonomy and re-exports the OpenAI-compatible
//! suggestion client.

use thiserror::Error;

mod openai;

pub use openai::OpenAiClient;

/// Errors that can occur during AI operations
#[derive(Debug, Error)]
pub enum AiError {
    /// AI is not configured (missing API key or disabled)
    #[error("AI not configured: {0}")]
    NotConfigured(String),

    /// Network error during the API request (timeout, connection loss)
    #[error("Network error: {0}")]
    Network(String),

    /// API returned a non-2xx response; the body is kept for diagnostics
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to decode the API response body
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request was cancelled before completion
    #[error("Request cancelled")]
    Cancelled,
}
