//! Transport layer for the tool server.
//!
//! This module provides different transport implementations:
//! - **HTTP**: discovery and invocation endpoints for the tool host, plus
//!   JSON-RPC (MCP) over POST - feature: `http`
//! - **STDIO**: MCP over standard input/output - feature: `stdio`
//!
//! Each transport handles the connection lifecycle and delegates tool calls
//! to the server's registry.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
