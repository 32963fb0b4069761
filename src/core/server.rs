//! Tool server implementation.
//!
//! `ToolServer` owns the tool registry and is what every transport serves.
//! It also implements the MCP `ServerHandler` so the same tools can be
//! reached by MCP clients.
//!
//! Tools are registered in `domains/tools/registry.rs`; the rmcp
//! `ToolRouter` and the discovery manifest are both derived from it, so
//! adding a tool does not require modifying this file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use super::error;
use crate::domains::tools::{DiscoveryDocument, ToolError, ToolRegistry, build_tool_router};

/// Instructions reported to MCP clients.
const INSTRUCTIONS: &str = "This server provides a get_news tool that searches recent news \
     articles by query, language, page and sort order.";

/// The main server handler.
#[derive(Clone)]
pub struct ToolServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registered tools.
    registry: Arc<ToolRegistry>,

    /// Tool router for MCP tool calls.
    tool_router: ToolRouter<Self>,
}

impl ToolServer {
    /// Create a new server with the built-in tools.
    pub fn new(config: Config) -> error::Result<Self> {
        let registry = Arc::new(ToolRegistry::new(&config)?);
        Ok(Self::with_registry(config, registry))
    }

    /// Create a server around an existing registry.
    pub fn with_registry(config: Config, registry: Arc<ToolRegistry>) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(&registry),
            config: Arc::new(config),
            registry,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// MCP instructions string.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    /// Discovery manifest for the tool host.
    pub fn discovery(&self) -> DiscoveryDocument {
        self.registry.discovery()
    }

    /// List all available tools in MCP form (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        self.registry.call_tool(name, arguments).await
    }

    /// Call the tool served at an invocation endpoint such as `/tools/get-news`.
    pub async fn invoke_endpoint(
        &self,
        endpoint: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match self.registry.find_by_endpoint(endpoint) {
            Some(tool) => tool.invoke(arguments).await,
            None => Err(ToolError::not_found(endpoint)),
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for ToolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
