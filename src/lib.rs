//! News Tools Server Library
//!
//! This crate exposes a `get_news` tool, backed by the NewsAPI search
//! endpoint, to tool-orchestration hosts over an HTTP discovery/invocation
//! protocol and to MCP clients over JSON-RPC or stdio.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server and its transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: tool registry, discovery manifest and tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use news_tools_server::core::{Config, ToolServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = ToolServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, ToolServer};
