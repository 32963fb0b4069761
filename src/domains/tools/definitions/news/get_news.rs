//! `get_news` tool definition.
//!
//! Wires invocations to [`NewsApiClient::fetch`], injecting the API key held
//! in the process configuration.

use std::sync::Arc;

use rmcp::{handler::server::tool::cached_schema_for_type, model::JsonObject};
use tracing::{info, instrument, warn};

use super::client::NewsApiClient;
use super::types::{Article, NewsParams};
use crate::core::config::Config;
use crate::domains::tools::ToolError;
use crate::domains::tools::discovery::{ParameterManifest, ParameterType};
use crate::domains::tools::handlers::ToolHandler;

/// News search tool.
#[derive(Clone)]
pub struct GetNewsTool {
    client: NewsApiClient,
    api_key: Option<String>,
}

impl GetNewsTool {
    /// Tool name as registered with the host.
    pub const NAME: &'static str = "get_news";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Fetch latest news articles based on a search query and optional filters.";

    /// Build the tool from the startup configuration.
    pub fn new(config: &Config) -> Result<Self, ToolError> {
        Ok(Self {
            client: NewsApiClient::new(&config.news)?,
            api_key: config.credentials.news_api_key.clone(),
        })
    }

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(&self, params: &NewsParams) -> Result<Vec<Article>, ToolError> {
        let Some(api_key) = self.api_key.as_deref().filter(|k| !k.is_empty()) else {
            warn!("get_news called without a configured NEWS_API_KEY");
            return Err(ToolError::configuration(
                "NEWS_API_KEY environment variable is not set",
            ));
        };

        info!("get_news tool called");
        Ok(self.client.fetch(params, Some(api_key)).await?)
    }

    /// Parse raw invocation arguments. A missing body means "all defaults".
    pub fn parse_arguments(arguments: serde_json::Value) -> Result<NewsParams, ToolError> {
        if arguments.is_null() {
            return Ok(NewsParams::default());
        }

        serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
    }
}

impl std::fmt::Debug for GetNewsTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetNewsTool")
            .field("endpoint", &self.client.endpoint())
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[async_trait::async_trait]
impl ToolHandler for GetNewsTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn parameters(&self) -> Vec<ParameterManifest> {
        vec![
            ParameterManifest::new(
                "query",
                ParameterType::String,
                true,
                "Search query, e.g., 'technology'",
            ),
            ParameterManifest::new(
                "language",
                ParameterType::String,
                false,
                "Language code (default: en)",
            ),
            ParameterManifest::new(
                "pageSize",
                ParameterType::Number,
                false,
                "Number of articles per page (default: 5)",
            ),
            ParameterManifest::new(
                "page",
                ParameterType::Number,
                false,
                "Page number (default: 1)",
            ),
            ParameterManifest::new(
                "sortBy",
                ParameterType::String,
                false,
                "Sort by relevancy, popularity, or publishedAt (default: publishedAt)",
            ),
        ]
    }

    fn input_schema(&self) -> Arc<JsonObject> {
        cached_schema_for_type::<NewsParams>()
    }

    async fn invoke(&self, arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params = Self::parse_arguments(arguments)?;
        let articles = self.execute(&params).await?;

        serde_json::to_value(articles).map_err(|e| ToolError::internal(e.to_string()))
    }
}
