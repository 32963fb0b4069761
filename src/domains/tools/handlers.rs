//! Tool handler trait.
//!
//! Every tool served by this process implements [`ToolHandler`]. The registry
//! dispatches discovery/invocation requests through it and the MCP router
//! wraps each handler in a route, so a tool is written once and reachable
//! from every transport.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};

use super::discovery::{FunctionManifest, ParameterManifest, endpoint_for};
use super::error::ToolError;

/// A callable tool.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Get the name of this tool.
    fn name(&self) -> &'static str;

    /// Get the description of this tool.
    fn description(&self) -> &'static str;

    /// Parameters as declared to the discovery host.
    fn parameters(&self) -> Vec<ParameterManifest>;

    /// JSON schema of the arguments, as advertised to MCP clients.
    fn input_schema(&self) -> Arc<JsonObject>;

    /// Execute the tool with the given arguments.
    async fn invoke(&self, arguments: serde_json::Value) -> Result<serde_json::Value, ToolError>;

    /// Invocation endpoint path.
    fn endpoint(&self) -> String {
        endpoint_for(self.name())
    }

    /// Discovery entry for this tool.
    fn manifest(&self) -> FunctionManifest {
        FunctionManifest {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
            endpoint: self.endpoint(),
            http_method: "POST".to_string(),
        }
    }

    /// MCP tool model for this tool (metadata).
    fn to_tool(&self) -> Tool {
        Tool {
            name: self.name().into(),
            description: Some(self.description().into()),
            input_schema: self.input_schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
