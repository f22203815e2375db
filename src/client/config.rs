//! Client Configuration
//!
//! Session-scoped configuration: base URLs plus the bearer token for the
//! authenticated user.

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Session configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let server_url =
            std::env::var("CHAT_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let app = AppConfig::builder()
            .server_url(server_url)
            .build()
            .unwrap_or_default();
        Self { app, token: None }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app, token: None })
    }

    /// Set the bearer token
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the bearer token
    pub fn get_token(&self) -> Option<&String> {
        self.token.as_ref()
    }

    /// Clear the token (logout)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Socket gateway base URL; the server URL when none was configured
    pub fn socket_url(&self) -> &str {
        self.app
            .socket_url
            .as_deref()
            .unwrap_or_else(|| self.server_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert!(config.get_token().is_none());
        assert!(config.server_url().starts_with("http"));
    }

    #[test]
    fn test_set_and_clear_token() {
        let mut config = Config::new();
        config.set_token(Some("test_token".to_string()));
        assert_eq!(config.get_token(), Some(&"test_token".to_string()));
        config.clear_token();
        assert!(config.get_token().is_none());
    }

    #[test]
    fn test_api_url() {
        let config = Config::with_builder(
            AppConfig::builder().server_url("http://localhost:3000".to_string()),
        )
        .unwrap();
        assert_eq!(
            config.api_url("/chat/conversations"),
            "http://localhost:3000/chat/conversations"
        );
    }

    #[test]
    fn test_socket_url_falls_back_to_server_url() {
        let config = Config::with_builder(
            AppConfig::builder().server_url("http://localhost:3000".to_string()),
        )
        .unwrap();
        assert_eq!(config.socket_url(), "http://localhost:3000");

        let config = Config::with_builder(
            AppConfig::builder()
                .server_url("http://localhost:3000".to_string())
                .socket_url("http://localhost:3001".to_string()),
        )
        .unwrap();
        assert_eq!(config.socket_url(), "http://localhost:3001");
    }
}
