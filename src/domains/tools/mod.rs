//! Tools domain module.
//!
//! This module handles all tool-related functionality for the server.
//! Tools are callable functions advertised to a host through the discovery
//! endpoint and to MCP clients through `tools/list`.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations
//! - `handlers.rs` - The `ToolHandler` trait every tool implements
//! - `registry.rs` - Central tool registry, discovery and dispatch
//! - `discovery.rs` - Discovery manifest wire types
//! - `router.rs` - rmcp ToolRouter built from the registry
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new module in `definitions/`
//! 2. Implement `ToolHandler` for it
//! 3. Register it in `ToolRegistry::new`
//!
//! Discovery, HTTP invocation and the MCP router pick it up from the registry.

pub mod definitions;
pub mod discovery;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use discovery::{DiscoveryDocument, FunctionManifest, ParameterManifest, ParameterType};
pub use error::ToolError;
pub use handlers::ToolHandler;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
