//! Parameter and record types for the news tool.
//!
//! `NewsParams` is what callers send, `NewsQuery` is the same request with
//! defaults applied, and `Article` is the normalized record handed back.
//! The `Raw*` types mirror the provider's JSON and are only used for decoding.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

pub const DEFAULT_QUERY: &str = "latest";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_SORT_BY: &str = "publishedAt";

/// Sort orders understood by the provider. Other values are forwarded untouched.
pub const KNOWN_SORT_ORDERS: [&str; 3] = ["relevancy", "popularity", "publishedAt"];

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters accepted by the `get_news` tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsParams {
    /// Search text.
    #[schemars(description = "Search query, e.g., 'technology'")]
    #[serde(default)]
    pub query: Option<String>,

    /// Language code.
    #[schemars(description = "Language code (default: en)")]
    #[serde(default)]
    pub language: Option<String>,

    /// Number of articles per page.
    #[schemars(description = "Number of articles per page (default: 5)")]
    #[serde(default, deserialize_with = "whole_number")]
    pub page_size: Option<Number>,

    /// Page number, starting at 1.
    #[schemars(description = "Page number (default: 1)")]
    #[serde(default, deserialize_with = "whole_number")]
    pub page: Option<Number>,

    /// Sort order.
    #[schemars(description = "Sort by relevancy, popularity, or publishedAt (default: publishedAt)")]
    #[serde(default)]
    pub sort_by: Option<String>,
}

/// A news request with every default resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub query: String,
    pub language: String,
    pub page_size: Number,
    pub page: Number,
    pub sort_by: String,
}

impl NewsQuery {
    /// Apply defaults to each omitted parameter independently.
    pub fn resolve(params: &NewsParams) -> Self {
        Self {
            query: params
                .query
                .clone()
                .unwrap_or_else(|| DEFAULT_QUERY.to_string()),
            language: params
                .language
                .clone()
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            page_size: params
                .page_size
                .clone()
                .unwrap_or_else(|| DEFAULT_PAGE_SIZE.into()),
            page: params.page.clone().unwrap_or_else(|| DEFAULT_PAGE.into()),
            sort_by: params
                .sort_by
                .clone()
                .unwrap_or_else(|| DEFAULT_SORT_BY.to_string()),
        }
    }

    /// Whether `sort_by` is one of the provider's documented orders.
    pub fn has_known_sort_order(&self) -> bool {
        KNOWN_SORT_ORDERS.contains(&self.sort_by.as_str())
    }
}

/// Accept any JSON number, folding integral floats such as `10.0` to `10`.
///
/// Range checks are left to the provider.
fn whole_number<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Number>::deserialize(deserializer)?.map(|n| {
        match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Number::from(f as i64)
            }
            _ => n,
        }
    }))
}

// ============================================================================
// Output Record
// ============================================================================

/// Normalized article record returned by the tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    /// Display name of the publishing source.
    pub source: String,
    pub published_at: String,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Self {
            title: raw.title,
            description: raw.description,
            url: raw.url,
            source: raw.source.name,
            published_at: raw.published_at,
        }
    }
}

// ============================================================================
// Provider Payloads
// ============================================================================

/// Body of a provider response, discriminated by its `status` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub(crate) enum EverythingResponse {
    Ok {
        #[serde(rename = "totalResults", default)]
        total_results: u64,
        articles: Vec<RawArticle>,
    },
    Error {
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawArticle {
    pub source: RawSource,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSource {
    pub name: String,
}

/// Error body the provider sends with non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_applies_all_defaults() {
        let query = NewsQuery::resolve(&NewsParams::default());
        assert_eq!(query.query, "latest");
        assert_eq!(query.language, "en");
        assert_eq!(query.page_size, Number::from(5));
        assert_eq!(query.page, Number::from(1));
        assert_eq!(query.sort_by, "publishedAt");
    }

    #[test]
    fn test_resolve_defaults_independently() {
        let params = NewsParams {
            language: Some("fr".to_string()),
            page: Some(3.into()),
            ..Default::default()
        };
        let query = NewsQuery::resolve(&params);
        assert_eq!(query.query, "latest");
        assert_eq!(query.language, "fr");
        assert_eq!(query.page_size, Number::from(5));
        assert_eq!(query.page, Number::from(3));
        assert_eq!(query.sort_by, "publishedAt");
    }

    #[test]
    fn test_params_use_camel_case() {
        let json = r#"{"query": "rust", "pageSize": 20, "sortBy": "popularity"}"#;
        let params: NewsParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.query.as_deref(), Some("rust"));
        assert_eq!(params.page_size, Some(20.into()));
        assert_eq!(params.sort_by.as_deref(), Some("popularity"));
        assert_eq!(params.language, None);
    }

    #[test]
    fn test_params_accept_any_json_number() {
        let json = r#"{"pageSize": 10.0, "page": -1}"#;
        let params: NewsParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.page_size, Some(Number::from(10)));
        assert_eq!(params.page, Some(Number::from(-1)));

        let params: NewsParams = serde_json::from_str(r#"{"pageSize": 2.5}"#).unwrap();
        assert_eq!(params.page_size.map(|n| n.to_string()).as_deref(), Some("2.5"));

        let params: NewsParams = serde_json::from_str(r#"{"page": null}"#).unwrap();
        assert_eq!(params.page, None);
    }

    #[test]
    fn test_known_sort_orders() {
        for order in KNOWN_SORT_ORDERS {
            let params = NewsParams {
                sort_by: Some(order.to_string()),
                ..Default::default()
            };
            assert!(NewsQuery::resolve(&params).has_known_sort_order());
        }

        let params = NewsParams {
            sort_by: Some("newest".to_string()),
            ..Default::default()
        };
        assert!(!NewsQuery::resolve(&params).has_known_sort_order());
    }

    #[test]
    fn test_article_serializes_five_fields() {
        let article = Article {
            title: "Title".to_string(),
            description: None,
            url: "https://example.com/a".to_string(),
            source: "Example".to_string(),
            published_at: "2024-01-01T00:00:00Z".to_string(),
        };
        let value = serde_json::to_value(&article).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        for key in ["title", "description", "url", "source", "publishedAt"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
    }

    #[test]
    fn test_raw_article_drops_extra_fields() {
        let json = r#"{
            "source": {"id": "bbc-news", "name": "BBC News"},
            "author": "Someone",
            "title": "Headline",
            "description": "Summary",
            "url": "https://bbc.co.uk/x",
            "urlToImage": "https://bbc.co.uk/x.jpg",
            "publishedAt": "2024-05-01T10:00:00Z",
            "content": "Body"
        }"#;
        let raw: RawArticle = serde_json::from_str(json).unwrap();
        let article = Article::from(raw);
        assert_eq!(article.source, "BBC News");
        assert_eq!(article.description.as_deref(), Some("Summary"));
    }

    #[test]
    fn test_raw_article_requires_title() {
        let json = r#"{
            "source": {"name": "BBC News"},
            "url": "https://bbc.co.uk/x",
            "publishedAt": "2024-05-01T10:00:00Z"
        }"#;
        assert!(serde_json::from_str::<RawArticle>(json).is_err());
    }

    #[test]
    fn test_everything_response_error_variant() {
        let json = r#"{"status": "error", "code": "apiKeyInvalid", "message": "invalid key"}"#;
        match serde_json::from_str::<EverythingResponse>(json).unwrap() {
            EverythingResponse::Error { code, message } => {
                assert_eq!(code.as_deref(), Some("apiKeyInvalid"));
                assert_eq!(message.as_deref(), Some("invalid key"));
            }
            other => panic!("Expected error variant, got {:?}", other),
        }
    }
}
