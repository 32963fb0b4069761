//! NewsAPI client.
//!
//! Issues a single `GET {base_url}/everything` per call and reshapes the
//! provider's payload into [`Article`] records. There is no retry and no
//! caching: every failure is reported to the caller as-is.

use reqwest::Client;
use serde::Serialize;
use serde_json::Number;
use tracing::{debug, error, info, instrument};

use super::error::NewsError;
use super::types::{Article, ErrorBody, EverythingResponse, NewsParams, NewsQuery};
use crate::core::config::NewsApiConfig;

/// Query string sent to the `everything` endpoint.
#[derive(Serialize)]
struct EverythingRequest<'a> {
    q: &'a str,
    language: &'a str,
    #[serde(rename = "pageSize")]
    page_size: &'a Number,
    page: &'a Number,
    #[serde(rename = "sortBy")]
    sort_by: &'a str,
    #[serde(rename = "apiKey")]
    api_key: &'a str,
}

/// HTTP client for the news provider.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    http: Client,
    endpoint: String,
}

impl NewsApiClient {
    /// Build a client from the provider configuration.
    pub fn new(config: &NewsApiConfig) -> Result<Self, NewsError> {
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| NewsError::Client(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!("{}/everything", config.base_url.trim_end_matches('/')),
        })
    }

    /// Full URL of the search endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the articles matching `params`.
    ///
    /// Fails with [`NewsError::MissingApiKey`] before touching the network
    /// when `api_key` is absent or empty.
    #[instrument(skip_all, fields(query))]
    pub async fn fetch(
        &self,
        params: &NewsParams,
        api_key: Option<&str>,
    ) -> Result<Vec<Article>, NewsError> {
        let api_key = match api_key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(NewsError::MissingApiKey),
        };

        let query = NewsQuery::resolve(params);
        tracing::Span::current().record("query", query.query.as_str());

        if !query.has_known_sort_order() {
            debug!("Forwarding unrecognized sortBy value: {}", query.sort_by);
        }

        info!(
            "Fetching news: q='{}', language={}, pageSize={}, page={}, sortBy={}",
            query.query, query.language, query.page_size, query.page, query.sort_by
        );

        let request = EverythingRequest {
            q: &query.query,
            language: &query.language,
            page_size: &query.page_size,
            page: &query.page,
            sort_by: &query.sort_by,
            api_key,
        };

        let response = self
            .http
            .get(&self.endpoint)
            .query(&request)
            .send()
            .await
            .map_err(|e| {
                let err = NewsError::transport(e);
                error!("{}", err);
                err
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(NewsError::transport)?;

        if !status.is_success() {
            let message = upstream_message(&body)
                .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
            error!("News API returned {}: {}", status, message);
            return Err(NewsError::upstream(message));
        }

        let articles = decode_articles(&body)?;
        info!("Fetched {} article(s)", articles.len());
        Ok(articles)
    }
}

/// The provider's own `message`, if the error body carries one.
fn upstream_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}

/// Decode a success body into article records.
fn decode_articles(body: &[u8]) -> Result<Vec<Article>, NewsError> {
    let response: EverythingResponse =
        serde_json::from_slice(body).map_err(|e| NewsError::decode(e.to_string()))?;

    match response {
        EverythingResponse::Ok {
            total_results,
            articles,
        } => {
            debug!(
                "Provider reports {} total result(s), {} in this page",
                total_results,
                articles.len()
            );
            Ok(articles.into_iter().map(Article::from).collect())
        }
        EverythingResponse::Error { code, message } => {
            let message = message
                .or(code)
                .unwrap_or_else(|| "provider reported an error".to_string());
            error!("News API reported an error: {}", message);
            Err(NewsError::upstream(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;

    const TEST_KEY: &str = "test-key";

    fn client_for(server: &ServerGuard) -> NewsApiClient {
        NewsApiClient::new(&NewsApiConfig {
            base_url: server.url(),
            user_agent: "news-tools-test".to_string(),
        })
        .unwrap()
    }

    fn articles_body(count: usize) -> String {
        let articles: Vec<_> = (0..count)
            .map(|i| {
                json!({
                    "source": {"id": null, "name": format!("Source {i}")},
                    "author": "Reporter",
                    "title": format!("Headline {i}"),
                    "description": format!("Summary {i}"),
                    "url": format!("https://news.example.com/{i}"),
                    "urlToImage": null,
                    "publishedAt": "2024-05-01T10:00:00Z",
                    "content": "Full text"
                })
            })
            .collect();

        json!({
            "status": "ok",
            "totalResults": 120,
            "articles": articles
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/everything")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let client = client_for(&server);

        let combinations = [
            NewsParams::default(),
            NewsParams {
                query: Some("technology".to_string()),
                language: Some("de".to_string()),
                page_size: Some(50.into()),
                page: Some(2.into()),
                sort_by: Some("relevancy".to_string()),
            },
            NewsParams {
                sort_by: Some("bogus".to_string()),
                ..Default::default()
            },
        ];

        for params in &combinations {
            for key in [None, Some("")] {
                let err = client.fetch(params, key).await.unwrap_err();
                assert!(matches!(err, NewsError::MissingApiKey));
                assert!(err.to_string().contains("not defined"));
            }
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_defaults_are_sent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/everything")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "latest".into()),
                Matcher::UrlEncoded("language".into(), "en".into()),
                Matcher::UrlEncoded("pageSize".into(), "5".into()),
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("sortBy".into(), "publishedAt".into()),
                Matcher::UrlEncoded("apiKey".into(), TEST_KEY.into()),
            ]))
            .match_header("user-agent", "news-tools-test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(articles_body(1))
            .expect(1)
            .create_async()
            .await;

        let articles = client_for(&server)
            .fetch(&NewsParams::default(), Some(TEST_KEY))
            .await
            .unwrap();

        assert_eq!(articles.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_returns_one_record_per_article() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/everything")
            .match_query(Matcher::UrlEncoded("q".into(), "technology".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(articles_body(3))
            .create_async()
            .await;

        let params = NewsParams {
            query: Some("technology".to_string()),
            ..Default::default()
        };
        let articles = client_for(&server)
            .fetch(&params, Some(TEST_KEY))
            .await
            .unwrap();

        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].title, "Headline 0");
        assert_eq!(articles[1].source, "Source 1");
        assert_eq!(articles[2].url, "https://news.example.com/2");
        assert_eq!(articles[2].published_at, "2024-05-01T10:00:00Z");

        for article in &articles {
            let value = serde_json::to_value(article).unwrap();
            assert_eq!(value.as_object().unwrap().len(), 5);
        }
    }

    #[tokio::test]
    async fn test_empty_result_page() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/everything")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(articles_body(0))
            .create_async()
            .await;

        let articles = client_for(&server)
            .fetch(&NewsParams::default(), Some(TEST_KEY))
            .await
            .unwrap();
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_provider_message_is_surfaced() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/everything")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"invalid key"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .fetch(&NewsParams::default(), Some("wrong"))
            .await
            .unwrap_err();

        assert!(matches!(err, NewsError::Upstream(_)));
        assert!(err.to_string().contains("invalid key"));
    }

    #[tokio::test]
    async fn test_generic_message_without_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/everything")
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let err = client_for(&server)
            .fetch(&NewsParams::default(), Some(TEST_KEY))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "News API request failed: Request failed with status code 502"
        );
    }

    #[tokio::test]
    async fn test_unknown_sort_order_is_forwarded() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/everything")
            .match_query(Matcher::UrlEncoded("sortBy".into(), "newest".into()))
            .with_status(200)
            .with_body(articles_body(2))
            .expect(1)
            .create_async()
            .await;

        let params = NewsParams {
            sort_by: Some("newest".to_string()),
            ..Default::default()
        };
        let articles = client_for(&server)
            .fetch(&params, Some(TEST_KEY))
            .await
            .unwrap();

        assert_eq!(articles.len(), 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_float_page_size_is_sent_as_integer() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/everything")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("pageSize".into(), "10".into()),
                Matcher::UrlEncoded("page".into(), "-1".into()),
            ]))
            .with_status(200)
            .with_body(articles_body(1))
            .expect(1)
            .create_async()
            .await;

        let params: NewsParams =
            serde_json::from_value(json!({ "pageSize": 10.0, "page": -1 })).unwrap();
        let articles = client_for(&server)
            .fetch(&params, Some(TEST_KEY))
            .await
            .unwrap();

        assert_eq!(articles.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/everything")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"status":"ok","articles":[{"title":"No source"}]}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .fetch(&NewsParams::default(), Some(TEST_KEY))
            .await
            .unwrap_err();
        assert!(matches!(err, NewsError::Decode(_)));
    }

    #[tokio::test]
    async fn test_error_status_in_success_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/everything")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"status":"error","code":"rateLimited","message":"too many requests"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .fetch(&NewsParams::default(), Some(TEST_KEY))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("too many requests"));
    }

    #[tokio::test]
    async fn test_network_failure_hides_key() {
        let client = NewsApiClient::new(&NewsApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            user_agent: "news-tools-test".to_string(),
        })
        .unwrap();

        let err = client
            .fetch(&NewsParams::default(), Some("secret-key-123"))
            .await
            .unwrap_err();

        assert!(matches!(err, NewsError::Upstream(_)));
        assert!(!err.to_string().contains("secret-key-123"));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = NewsApiClient::new(&NewsApiConfig {
            base_url: "https://newsapi.org/v2/".to_string(),
            user_agent: "news-tools-test".to_string(),
        })
        .unwrap();
        assert_eq!(client.endpoint(), "https://newsapi.org/v2/everything");
    }
}
