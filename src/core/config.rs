//! Configuration management for the tool server.
//!
//! This module provides a centralized configuration structure populated once
//! at startup from environment variables (and an optional `.env` file), then
//! injected into the components that need it.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default base URL of the news provider.
pub const DEFAULT_NEWS_API_BASE_URL: &str = "https://newsapi.org/v2";

/// Main configuration structure for the tool server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// News provider endpoint configuration.
    pub news: NewsApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// NewsAPI key. Optional at startup; each `get_news` call fails without it.
    pub news_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "news_api_key",
                &self.news_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// News provider endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsApiConfig {
    /// Base URL; requests go to `{base_url}/everything`.
    pub base_url: String,

    /// User-Agent header sent with every request. The provider rejects
    /// requests that carry none.
    pub user_agent: String,
}

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NEWS_API_BASE_URL.to_string(),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "news-tools-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            news: NewsApiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `NEWS_API_KEY` and `PORT` keep their conventional names; the remaining
    /// settings are prefixed with `TOOLS_` or `NEWS_API_`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("TOOLS_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("TOOLS_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        match std::env::var("NEWS_API_KEY") {
            Ok(api_key) if !api_key.is_empty() => {
                config.credentials.news_api_key = Some(api_key);
                info!("News API key loaded from environment");
            }
            _ => {
                warn!("NEWS_API_KEY not set - get_news calls will fail until it is provided");
            }
        }

        if let Ok(base_url) = std::env::var("NEWS_API_BASE_URL") {
            config.news.base_url = base_url;
        }

        if let Ok(user_agent) = std::env::var("NEWS_API_USER_AGENT") {
            config.news.user_agent = user_agent;
        }

        config
    }

    /// Check the configuration for values that cannot work.
    pub fn validate(&self) -> Result<()> {
        reqwest::Url::parse(&self.news.base_url).map_err(|e| {
            Error::config(format!(
                "NEWS_API_BASE_URL '{}' is not a valid URL: {}",
                self.news.base_url, e
            ))
        })?;

        if self.news.user_agent.trim().is_empty() {
            return Err(Error::config("NEWS_API_USER_AGENT must not be empty"));
        }

        self.transport.validate()
    }
}
