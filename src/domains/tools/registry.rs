//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - The discovery manifest served to the host
//! - Dispatch of invocation requests by tool name or endpoint

use std::sync::Arc;
use tracing::{info, warn};

use crate::core::config::Config;

use super::definitions::GetNewsTool;
use super::discovery::DiscoveryDocument;
use super::error::ToolError;
use super::handlers::ToolHandler;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - owns every tool handler served by this process.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Create the registry with every built-in tool.
    ///
    /// This is the single place where tools are registered; discovery, HTTP
    /// invocation and the MCP router are all derived from it.
    pub fn new(config: &Config) -> Result<Self, ToolError> {
        let tools: Vec<Arc<dyn ToolHandler>> = vec![Arc::new(GetNewsTool::new(config)?)];
        Ok(Self::with_tools(tools))
    }

    /// Create a registry from explicit handlers.
    pub fn with_tools(tools: Vec<Arc<dyn ToolHandler>>) -> Self {
        for tool in &tools {
            info!("Registering tool: {} at {}", tool.name(), tool.endpoint());
        }
        Self { tools }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Get all registered handlers.
    pub fn tools(&self) -> &[Arc<dyn ToolHandler>] {
        &self.tools
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// Look up a tool by its invocation endpoint path.
    pub fn find_by_endpoint(&self, endpoint: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.tools.iter().find(|t| t.endpoint() == endpoint)
    }

    /// Build the discovery manifest.
    pub fn discovery(&self) -> DiscoveryDocument {
        DiscoveryDocument {
            functions: self.tools.iter().map(|t| t.manifest()).collect(),
        }
    }

    /// Dispatch a tool call to the appropriate handler.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match self.get(name) {
            Some(tool) => tool.invoke(arguments).await,
            None => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .finish()
    }
}
