//! Application state shared across all request handlers.

use std::path::PathBuf;
use std::sync::Arc;

use crate::qotd::{QotdResult, QotdService};

use super::config::ServerConfig;

/// Shared application state.
pub struct AppState {
    /// Question-of-the-day generator.
    pub qotd: QotdService,
    /// Directory served as the front-end.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create the application state from a configuration.
    ///
    /// # Errors
    /// Returns an error if the model client cannot be created.
    pub fn new(config: &ServerConfig) -> QotdResult<Arc<Self>> {
        let qotd = QotdService::from_config(config.llm.clone())?;
        Ok(Self::with_service(qotd, config.static_dir.clone()))
    }

    /// Build the state around an existing service.
    #[must_use]
    pub fn with_service(qotd: QotdService, static_dir: PathBuf) -> Arc<Self> {
        Arc::new(Self { qotd, static_dir })
    }
}
