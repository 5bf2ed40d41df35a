//! Server configuration loaded from the environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::qotd::LlmConfig;

use super::DEFAULT_PORT;

/// Environment variable for the listening port.
pub const PORT_ENV: &str = "SESSION_BOARD_PORT";
/// Environment variable for the static front-end directory.
pub const STATIC_DIR_ENV: &str = "SESSION_BOARD_STATIC_DIR";

/// Default directory served as the front-end.
const DEFAULT_STATIC_DIR: &str = "static";

/// Everything the server needs to start.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listening port.
    pub port: u16,
    /// Directory of static files served as the router fallback.
    pub static_dir: PathBuf,
    /// Model client settings.
    pub llm: LlmConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            llm: LlmConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let port = std::env::var(PORT_ENV)
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let static_dir = std::env::var(STATIC_DIR_ENV)
            .map_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);

        Self {
            port,
            static_dir,
            llm: LlmConfig::from_env(),
        }
    }

    /// Set the port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the model settings.
    #[must_use]
    pub fn with_llm(mut self, llm: LlmConfig) -> Self {
        self.llm = llm;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.llm.model, "openai/gpt-4o");
    }

    #[test]
    fn test_config_builder() {
        let config = ServerConfig::default()
            .with_port(8080)
            .with_llm(LlmConfig::default().with_model("local"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.llm.model, "local");
    }
}
