//! Application configuration module
//!
//! Base configuration types for the chat client: the REST API base URL and
//! the socket gateway URL, builder-validated before use.

use thiserror::Error;

/// Base application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// REST API base URL
    pub server_url: Option<String>,
    /// Socket gateway URL; falls back to the server URL when absent
    pub socket_url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    socket_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the REST API base URL
    pub fn server_url(mut self, url: String) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Set the socket gateway URL
    pub fn socket_url(mut self, url: String) -> Self {
        self.socket_url = Some(url);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        for url in [&self.server_url, &self.socket_url].into_iter().flatten() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(AppConfig {
            server_url: self.server_url,
            socket_url: self.socket_url,
        })
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accepts_http_urls() {
        let config = AppConfig::builder()
            .server_url("http://127.0.0.1:3000".to_string())
            .socket_url("http://127.0.0.1:3001".to_string())
            .build()
            .unwrap();
        assert_eq!(config.server_url.as_deref(), Some("http://127.0.0.1:3000"));
        assert_eq!(config.socket_url.as_deref(), Some("http://127.0.0.1:3001"));
    }

    #[test]
    fn test_builder_rejects_bad_scheme() {
        let result = AppConfig::builder()
            .server_url("ftp://example.com".to_string())
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_empty_builder_is_valid() {
        assert!(AppConfig::builder().build().is_ok());
    }
}
