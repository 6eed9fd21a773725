use crate::config::{ORGANIC_LIVE_ENDPOINT, SerpConfig};
use crate::error::{Result, SerpError};
use crate::limiter::RateLimiter;
use crate::result::{ApiResponse, SearchResultItem, TaskRequest};
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// Provider status code for a successful task.
pub const PROVIDER_OK: u32 = 20000;

/// Search results client. Every outbound call first claims a slot on the
/// shared [`RateLimiter`].
pub struct SerpClient {
    client: Client,
    config: SerpConfig,
    endpoint: Url,
    limiter: Arc<RateLimiter>,
}

impl SerpClient {
    pub fn new(config: SerpConfig) -> Result<Self> {
        let limiter = Arc::new(RateLimiter::new(config.min_delay()));
        Self::with_rate_limiter(config, limiter)
    }

    /// Build a client that shares an existing limiter, so several clients
    /// still respect one global spacing.
    pub fn with_rate_limiter(config: SerpConfig, limiter: Arc<RateLimiter>) -> Result<Self> {
        if !config.has_credentials() {
            return Err(SerpError::MissingCredentials);
        }

        let endpoint = Url::parse(&format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            ORGANIC_LIVE_ENDPOINT
        ))
        .map_err(|e| SerpError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let client = Client::builder()
            .user_agent(concat!("gapscout/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            config,
            endpoint,
            limiter,
        })
    }

    pub fn config(&self) -> &SerpConfig {
        &self.config
    }

    pub fn rate_limiter(&self) -> Arc<RateLimiter> {
        self.limiter.clone()
    }

    /// Ranked results for `keyword`, or `None` when no data could be had.
    ///
    /// Transport errors, timeouts, HTTP failures and provider error codes all
    /// end up as `None`; callers treat that as an ordinary outcome.
    pub async fn fetch(&self, keyword: &str) -> Option<Vec<SearchResultItem>> {
        match self.try_fetch(keyword).await {
            Ok(Some(items)) => Some(items),
            Ok(None) => {
                warn!("No result items for \"{}\"", keyword.trim());
                None
            }
            Err(SerpError::EmptyKeyword) => None,
            Err(e) => {
                warn!("Search request failed for \"{}\": {}", keyword.trim(), e);
                None
            }
        }
    }

    /// Like [`fetch`](Self::fetch) but keeps the failure reason.
    pub async fn try_fetch(&self, keyword: &str) -> Result<Option<Vec<SearchResultItem>>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(SerpError::EmptyKeyword);
        }

        let task = [TaskRequest {
            keyword,
            location_code: self.config.location_code,
            language_code: &self.config.language_code,
            device: &self.config.device,
            depth: self.config.depth,
        }];

        self.limiter.acquire().await;
        info!("Search request: \"{}\"", keyword);

        let response = self
            .client
            .post(self.endpoint.clone())
            .basic_auth(&self.config.login, Some(&self.config.password))
            .json(&task)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SerpError::Status(status.as_u16()));
        }

        let body: ApiResponse = response.json().await?;
        if body.status_code != PROVIDER_OK {
            return Err(SerpError::Provider {
                code: body.status_code,
                message: body.status_message,
            });
        }

        let items = body.into_items();
        debug!(
            "Search response for \"{}\": {} items",
            keyword,
            items.as_ref().map(Vec::len).unwrap_or(0)
        );
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, header_exists, method, path},
    };

    const ENDPOINT_PATH: &str = "/v3/serp/google/organic/live/advanced";

    fn test_client(server: &MockServer) -> SerpClient {
        let config = SerpConfig::new("login", "secret")
            .with_base_url(format!("{}/v3", server.uri()))
            .with_timeout(Duration::from_millis(300))
            .with_min_delay(Duration::ZERO);
        SerpClient::new(config).unwrap()
    }

    fn ok_body(domains: &[&str]) -> serde_json::Value {
        let items: Vec<_> = domains
            .iter()
            .map(|d| json!({"type": "organic", "domain": d, "title": format!("{} page", d)}))
            .collect();
        json!({
            "status_code": 20000,
            "status_message": "Ok.",
            "tasks": [{"result": [{"items": items}]}]
        })
    }

    #[tokio::test]
    async fn test_fetch_returns_ranked_items() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(ENDPOINT_PATH))
            .and(header_exists("authorization"))
            .and(body_partial_json(json!([{
                "keyword": "cheap hershey bears tickets",
                "location_code": 2840,
                "language_code": "en",
                "device": "desktop"
            }])))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(ok_body(&["stubhub.com", "hersheybears.com"])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let items = client
            .fetch("  cheap hershey bears tickets ")
            .await
            .expect("expected live items");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].rank, 1);
        assert_eq!(items[0].domain, "stubhub.com");
        assert_eq!(items[1].rank, 2);
        assert_eq!(items[1].title.as_deref(), Some("hersheybears.com page"));
    }

    #[tokio::test]
    async fn test_empty_keyword_makes_no_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(&[])))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        assert!(client.fetch("   ").await.is_none());
        assert!(matches!(
            client.try_fetch("").await,
            Err(SerpError::EmptyKeyword)
        ));
    }

    #[tokio::test]
    async fn test_http_failure_is_no_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        assert!(client.fetch("hershey bears parking tips").await.is_none());
        assert!(matches!(
            client.try_fetch("hershey bears parking tips").await,
            Err(SerpError::Status(500))
        ));
    }

    #[tokio::test]
    async fn test_provider_error_code_is_no_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status_code": 40100,
                "status_message": "You are not authorized to access this resource."
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        assert!(client.fetch("best parking hershey bears").await.is_none());
        match client.try_fetch("best parking hershey bears").await {
            Err(SerpError::Provider { code, .. }) => assert_eq!(code, 40100),
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout_is_no_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(ok_body(&["stubhub.com"]))
                    .set_delay(Duration::from_millis(1500)),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        assert!(client.fetch("first time hershey bears game").await.is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_no_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        assert!(client.fetch("hershey bears ticket deals").await.is_none());
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let result = SerpClient::new(SerpConfig::default());
        assert!(matches!(result, Err(SerpError::MissingCredentials)));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = SerpConfig::new("login", "secret").with_base_url("not a url");
        assert!(matches!(
            SerpClient::new(config),
            Err(SerpError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_clients_can_share_a_limiter() {
        let limiter = Arc::new(RateLimiter::new(Duration::from_millis(3000)));
        let a = SerpClient::with_rate_limiter(SerpConfig::new("a", "b"), limiter.clone()).unwrap();
        let b = SerpClient::with_rate_limiter(SerpConfig::new("a", "b"), limiter.clone()).unwrap();
        assert!(Arc::ptr_eq(&a.rate_limiter(), &b.rate_limiter()));
    }
}
