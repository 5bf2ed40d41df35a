//! Configuration for the question-of-the-day model client.

use serde::{Deserialize, Serialize};

use super::error::{QotdError, QotdResult};

/// OpenAI-compatible endpoint used by default.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
/// Default model.
pub const DEFAULT_MODEL: &str = "openai/gpt-4o";

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "SESSION_BOARD_LLM_BASE_URL";
/// Environment variable overriding the model.
pub const MODEL_ENV: &str = "SESSION_BOARD_MODEL";

/// Model client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the chat-completions API.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Provider API key.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Output token cap.
    pub max_tokens: u32,
    /// Nucleus sampling.
    pub top_p: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            temperature: 1.0,
            max_tokens: 2048,
            top_p: 1.0,
        }
    }
}

impl LlmConfig {
    /// Defaults overridden by the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            config.base_url = url;
        }
        if let Ok(model) = std::env::var(MODEL_ENV) {
            config.model = model;
        }
        config.api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        config
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Chat-completions URL.
    ///
    /// # Errors
    /// Returns an error if the base URL does not parse.
    pub fn completions_url(&self) -> QotdResult<url::Url> {
        let base = url::Url::parse(&format!("{}/", self.base_url.trim_end_matches('/')))?;
        Ok(base.join("chat/completions")?)
    }

    /// Check configuration values.
    ///
    /// # Errors
    /// Returns an error if any value is out of range.
    pub fn validate(&self) -> QotdResult<()> {
        self.completions_url()?;

        if self.model.trim().is_empty() {
            return Err(QotdError::Config("model must not be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(QotdError::Config("temperature must be within 0..=2".to_string()));
        }
        if self.max_tokens == 0 {
            return Err(QotdError::Config("max_tokens must be > 0".to_string()));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(QotdError::Config("top_p must be within 0..=1".to_string()));
        }

        Ok(())
    }
}
