//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Each registered handler becomes a `ToolRoute`, so MCP clients see exactly
//! the tools advertised on the discovery endpoint.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::{CallToolResult, Content},
};
use tracing::warn;

use super::error::ToolError;
use super::handlers::ToolHandler;
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .tools()
        .iter()
        .fold(ToolRouter::new(), |router, tool| {
            router.with_route(create_route(tool.clone()))
        })
}

/// Create a ToolRoute dispatching to `tool`.
fn create_route<S>(tool: Arc<dyn ToolHandler>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(tool.to_tool(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let tool = tool.clone();
        async move {
            let result = tool.invoke(serde_json::Value::Object(args)).await;
            into_call_result(result)
        }
        .boxed()
    })
}

/// Convert a tool outcome into an MCP tool result.
///
/// Bad arguments are a protocol error; every other failure is reported as a
/// tool error result carrying the message.
pub fn into_call_result(
    result: Result<serde_json::Value, ToolError>,
) -> Result<CallToolResult, McpError> {
    match result {
        Ok(value) => {
            let text = serde_json::to_string_pretty(&value)
                .map_err(|e| McpError::internal_error(e.to_string(), None))?;
            Ok(CallToolResult::success(vec![Content::text(text)]))
        }
        Err(ToolError::InvalidArguments(msg)) => Err(McpError::invalid_params(msg, None)),
        Err(e) => {
            warn!("Tool call failed: {}", e);
            Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
        }
    }
}
