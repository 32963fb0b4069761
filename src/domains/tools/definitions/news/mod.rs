//! News tools module.
//!
//! - `client`: NewsAPI client (one outbound GET per call)
//! - `get_news`: the `get_news` tool exposed to hosts
//! - `types`: parameters, resolved query and article records
//! - `error`: provider error type

pub mod client;
pub mod error;
pub mod get_news;
pub mod types;

pub use client::NewsApiClient;
pub use error::NewsError;
pub use get_news::GetNewsTool;
pub use types::{Article, NewsParams, NewsQuery};
