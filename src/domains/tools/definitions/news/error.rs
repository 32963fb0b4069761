//! News provider error types.

use thiserror::Error;

/// Errors raised while fetching news from the provider.
#[derive(Debug, Error)]
pub enum NewsError {
    /// No API key was supplied.
    #[error("NEWS_API_KEY is not defined")]
    MissingApiKey,

    /// The provider answered with a failure, or could not be reached.
    #[error("News API request failed: {0}")]
    Upstream(String),

    /// The provider answered with a body that does not match the expected shape.
    #[error("News API returned a malformed response: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to build News API client: {0}")]
    Client(String),
}

impl NewsError {
    /// Create a new upstream error.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Create an upstream error from a transport failure.
    ///
    /// The request URL carries the API key, so it is stripped before the
    /// message is rendered.
    pub fn transport(err: reqwest::Error) -> Self {
        Self::Upstream(err.without_url().to_string())
    }

    /// Create a new decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
