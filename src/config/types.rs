// Configuration type definitions

use serde::Deserialize;

/// AI suggestion configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Whether the "Be Creative" suggestion feature is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// OpenAI API key; falls back to $OPENAI_API_KEY when absent
    #[serde(default)]
    pub api_key: Option<String>,
    /// Chat-completion model
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature in [0, 1]
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum tokens to generate per response
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Custom chat-completion endpoint (Ollama, Groq, test stubs, ...)
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    100
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            enabled: default_enabled(),
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            base_url: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,
}
