//! HTTP client for PayPal API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the PayPal REST API with token refresh and retry handling.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::{AccessToken, TokenCache};
use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::retry::RetryPolicy;
use crate::config::ClientConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound honored for a server supplied `Retry-After`.
const MAX_RETRY_AFTER: Duration = Duration::from_secs(60);

/// HTTP client for making requests to the PayPal API.
///
/// The client handles:
/// - URL construction from the configured environment and a base path
/// - Default headers including User-Agent and the bearer token
/// - The per-request timeout
/// - One token refresh and replay when the API answers 401
/// - Retries with exponential backoff for idempotent requests
///
/// Every HTTP status is returned as an [`HttpResponse`]. Only failures that
/// produced no response at all become [`TransportError`]s.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
/// The only shared mutable state is the [`TokenCache`].
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use paypal_subscriptions::auth::{ClientCredentialsProvider, TokenCache};
/// use paypal_subscriptions::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let tokens = Arc::new(TokenCache::new(Arc::new(
///     ClientCredentialsProvider::from_config(&config)?,
/// )));
/// let client = HttpClient::new("/v1", &config, tokens)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "catalogs/products")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api-m.sandbox.paypal.com`).
    base_uri: String,
    /// Base path (e.g., "/v1").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    tokens: Arc<TokenCache>,
    retry_policy: RetryPolicy,
    timeout: Duration,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path for API requests (e.g., "/v1")
    /// * `config` - Environment, timeout, retry and user agent settings
    /// * `tokens` - The token cache supplying bearer tokens
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(
        base_path: impl Into<String>,
        config: &ClientConfig,
        tokens: Arc<TokenCache>,
    ) -> Result<Self, TransportError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}PayPal Subscriptions Rust v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .map_err(TransportError::Network)?;

        Ok(Self {
            client,
            base_uri: config.base_url().to_string(),
            base_path: base_path.into(),
            default_headers,
            tokens,
            retry_policy: RetryPolicy::from_config(config),
            timeout: config.timeout(),
        })
    }

    /// Replaces the retry policy.
    #[must_use]
    pub const fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the token cache shared by this client.
    #[must_use]
    pub const fn token_cache(&self) -> &Arc<TokenCache> {
        &self.tokens
    }

    /// Returns the retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Sends an HTTP request to the PayPal API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction and header merging
    /// - Bearer token injection, with one refresh and replay on 401
    /// - Retries of GET requests on network failures, timeouts, and
    ///   429/500/502/503/504 responses
    ///
    /// POST and PATCH requests are never retried automatically. Once retries
    /// are used up on a transient status, the last response is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - No token can be obtained (`Auth`)
    /// - The request times out (`Timeout`) or cannot be sent (`Network`)
    /// - A retried request keeps failing without a response (`RetriesExhausted`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let method = request.http_method;
        let mut retries: u32 = 0;
        let mut token_replayed = false;

        loop {
            let token = self.tokens.token().await?;

            match self.send_once(&request, &url, &headers, &token).await {
                Ok(response) => {
                    if response.code == 401 && !token_replayed {
                        tracing::warn!(
                            path = %request.path,
                            "access token rejected with 401, refreshing and replaying request"
                        );
                        token_replayed = true;
                        self.tokens.refresh(Some(token.value())).await?;
                        continue;
                    }

                    if RetryPolicy::is_retryable_status(response.code)
                        && self.retry_policy.should_retry(method, retries)
                    {
                        let delay = self.retry_delay(&response, retries);
                        tracing::warn!(
                            path = %request.path,
                            status = response.code,
                            attempt = retries + 1,
                            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                            "transient response, retrying"
                        );
                        retries += 1;
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    return Ok(response);
                }
                Err(error) if error.is_transient() => {
                    if self.retry_policy.should_retry(method, retries) {
                        let delay = self.retry_policy.delay(retries);
                        tracing::warn!(
                            path = %request.path,
                            error = %error,
                            attempt = retries + 1,
                            "request failed, retrying"
                        );
                        retries += 1;
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    if retries > 0 {
                        return Err(TransportError::RetriesExhausted {
                            attempts: retries + 1,
                            last_failure: error.to_string(),
                            last_status: None,
                        });
                    }
                    return Err(error);
                }
                Err(error) => return Err(error),
            }
        }
    }

    /// Sends a single attempt of `request`.
    async fn send_once(
        &self,
        request: &HttpRequest,
        url: &str,
        headers: &HashMap<String, String>,
        token: &AccessToken,
    ) -> Result<HttpResponse, TransportError> {
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Patch => self.client.patch(url),
        };

        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.header("Authorization", token.authorization_header());

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "sending request");

        let res = req_builder
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e, &request.path))?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res
            .text()
            .await
            .map_err(|e| self.map_reqwest_error(e, &request.path))?;

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                if code >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        };

        let response = HttpResponse::new(code, res_headers, body);

        tracing::debug!(
            path = %request.path,
            status = code,
            debug_id = response.debug_id().unwrap_or_default(),
            "received response"
        );

        Ok(response)
    }

    fn map_reqwest_error(&self, error: reqwest::Error, path: &str) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout {
                path: path.to_string(),
                timeout: self.timeout,
            }
        } else {
            TransportError::Network(error)
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Backoff delay, or the server's `Retry-After` for 429 responses.
    fn retry_delay(&self, response: &HttpResponse, retry: u32) -> Duration {
        if response.code == 429 {
            if let Some(delay) = response
                .retry_request_after
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            {
                return delay.min(MAX_RETRY_AFTER);
            }
        }
        self.retry_policy.delay(retry)
    }
}
