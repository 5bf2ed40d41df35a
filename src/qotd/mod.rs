//! Ice-breaker question generation.
//!
//! Each request shuffles the example bank, builds one prompt and makes one
//! model call. The model's JSON is passed through as-is; its shape is only
//! enforced by the provider's structured-output schema.

pub mod bank;
pub mod client;
pub mod config;
pub mod error;
pub mod prompt;

pub use client::{OpenAiCompatClient, QuestionModel};
pub use config::LlmConfig;
pub use error::{QotdError, QotdResult};

use std::sync::Arc;

/// Generates question lists through a [`QuestionModel`].
#[derive(Clone)]
pub struct QotdService {
    model: Arc<dyn QuestionModel>,
}

impl QotdService {
    /// Wrap a model.
    #[must_use]
    pub fn new(model: Arc<dyn QuestionModel>) -> Self {
        Self { model }
    }

    /// Service backed by an OpenAI-compatible provider.
    ///
    /// # Errors
    /// Returns an error if the client cannot be created.
    pub fn from_config(config: LlmConfig) -> QotdResult<Self> {
        let client = OpenAiCompatClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Generate questions for `location` on `date`.
    ///
    /// Returns the model's raw JSON content.
    ///
    /// # Errors
    /// Returns [`QotdError::MissingParams`] if either argument is empty, or the
    /// model error otherwise.
    pub async fn generate(&self, location: &str, date: &str) -> QotdResult<String> {
        if location.is_empty() || date.is_empty() {
            return Err(QotdError::MissingParams);
        }

        let prompt = {
            let mut rng = rand::thread_rng();
            let examples = prompt::shuffled_bank(&mut rng);
            prompt::build_prompt(&examples, location, date)
        };

        tracing::info!("Generating ice-breaker questions for {location} on {date}");
        self.model.complete(&prompt).await
    }
}
