/*
[INPUT]:  Client credentials, base URL and transport timeouts
[OUTPUT]: Configured reqwest client and the generic POST executor
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::http::error::or_unknown;
use crate::http::{LipayError, Result, WithdrawSigner};
use crate::types::responses::provider_text;

/// Default base URL for the LiPayKripto API
pub const DEFAULT_BASE_URL: &str = "https://lipaykripto.com/api";

const JSON_MIME: &str = "application/json";

/// Client configuration: credentials plus transport settings
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Configuration with the default base URL and timeouts
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Main HTTP client for the LiPayKripto API
#[derive(Debug, Clone)]
pub struct LipayClient {
    http_client: Client,
    config: ClientConfig,
    base_url: String,
    signer: WithdrawSigner,
}

impl LipayClient {
    /// Create a new client from configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| LipayError::Config(format!("invalid base url {base_url:?}: {e}")))?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| LipayError::Config(format!("failed to build HTTP client: {e}")))?;

        let signer = WithdrawSigner::new(&config.client_secret)?;

        Ok(Self {
            http_client,
            config,
            base_url,
            signer,
        })
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn client_id(&self) -> &str {
        &self.config.client_id
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Signer keyed by this client's secret
    pub fn signer(&self) -> &WithdrawSigner {
        &self.signer
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// POST `body` as JSON to `endpoint` and return the parsed JSON response
    ///
    /// A bearer header is attached only for a non-empty token. Non-success
    /// statuses become [`LipayError::Api`]; every other fault becomes
    /// [`LipayError::RequestFailed`].
    pub(crate) async fn api_request<B>(
        &self,
        endpoint: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint);
        let token = token.filter(|token| !token.is_empty());

        let mut builder = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, JSON_MIME)
            .header(ACCEPT, JSON_MIME)
            .json(body);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        debug!(endpoint, bearer = token.is_some(), "sending request");
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(endpoint, status = status.as_u16(), "received response");

        let parsed = serde_json::from_slice::<Value>(&bytes);
        if !status.is_success() {
            let message = parsed
                .ok()
                .and_then(|body| body.get("error").and_then(provider_text));
            return Err(LipayError::api_error(status, or_unknown(message)));
        }

        Ok(parsed?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::error::UNKNOWN_ERROR;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new("id", "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_debug_redacts_secret() {
        let config = ClientConfig::new("client-1", "top-secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("client-1"));
        assert!(!debug.contains("top-secret"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client =
            LipayClient::new(ClientConfig::new("id", "secret").with_base_url("http://host/api/"))
                .unwrap();
        assert_eq!(client.base_url(), "http://host/api");
        assert_eq!(client.endpoint_url("/withdraw"), "http://host/api/withdraw");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = LipayClient::new(ClientConfig::new("id", "secret").with_base_url("not a url"))
            .unwrap_err();
        assert!(matches!(err, LipayError::Config(_)));
    }

    #[tokio::test]
    async fn test_api_request_posts_json_with_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/echo"))
            .and(header("content-type", "application/json"))
            .and(header("accept", "application/json"))
            .and(header("authorization", "Bearer tok"))
            .and(body_json(json!({ "a": 1 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        let client = LipayClient::new(
            ClientConfig::new("id", "secret").with_base_url(format!("{}/api", server.uri())),
        )
        .unwrap();

        let value = client
            .api_request("/echo", &json!({ "a": 1 }), Some("tok"))
            .await
            .expect("api_request failed");
        assert_eq!(value, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn test_api_request_empty_token_sends_no_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client =
            LipayClient::new(ClientConfig::new("id", "secret").with_base_url(server.uri())).unwrap();
        client.api_request("/echo", &json!({}), Some("")).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_api_request_non_json_error_body_keeps_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let client =
            LipayClient::new(ClientConfig::new("id", "secret").with_base_url(server.uri())).unwrap();
        let err = client.api_request("/echo", &json!({}), None).await.unwrap_err();

        match err {
            LipayError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, UNKNOWN_ERROR);
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }
}
