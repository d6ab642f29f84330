//! REST client implementation for the PayPal v1 REST API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! with automatic path normalization, authentication and retry handling.

use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::{ClientCredentialsProvider, TokenCache, TokenProvider};
use crate::clients::{
    DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse, InvalidHttpRequestError,
    RetryPolicy, TransportError,
};
use crate::config::ClientConfig;

/// Versioned base path of the catalog and billing APIs.
pub const API_BASE_PATH: &str = "/v1";

/// REST API client for the PayPal v1 REST API.
///
/// Provides `get`, `post` and `patch` for REST API requests. Paths are
/// relative to `/v1` (e.g., `"billing/plans"`).
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
/// Clients created from the same [`TokenCache`] share one bearer token.
///
/// # Example
///
/// ```rust,ignore
/// use paypal_subscriptions::{ClientConfig, RestClient};
///
/// let config = ClientConfig::from_env()?;
/// let client = RestClient::new(&config)?;
///
/// let response = client.get("catalogs/products", None).await?;
///
/// let body = serde_json::json!({"name": "The Collegian", "type": "PHYSICAL"});
/// let response = client.post("catalogs/products", Some(body), None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client that authenticates with the client credentials in
    /// `config` and owns a fresh token cache.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Auth`] or [`TransportError::Network`] if an
    /// HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let provider = ClientCredentialsProvider::from_config(config)?;
        Self::with_token_provider(config, Arc::new(provider))
    }

    /// Creates a client that obtains tokens from `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the HTTP client cannot be created.
    pub fn with_token_provider(
        config: &ClientConfig,
        provider: Arc<dyn TokenProvider>,
    ) -> Result<Self, TransportError> {
        Self::with_token_cache(config, Arc::new(TokenCache::new(provider)))
    }

    /// Creates a client sharing an existing token cache.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the HTTP client cannot be created.
    pub fn with_token_cache(
        config: &ClientConfig,
        tokens: Arc<TokenCache>,
    ) -> Result<Self, TransportError> {
        tracing::debug!(
            environment = %config.environment(),
            "creating REST client for {}{API_BASE_PATH}",
            config.base_url()
        );

        Ok(Self {
            http_client: HttpClient::new(API_BASE_PATH, config, tokens)?,
        })
    }

    /// Replaces the retry policy of the underlying HTTP client.
    #[must_use]
    pub fn with_retry_policy(self, retry_policy: RetryPolicy) -> Self {
        Self {
            http_client: self.http_client.with_retry_policy(retry_policy),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the token cache used by this client.
    #[must_use]
    pub const fn token_cache(&self) -> &Arc<TokenCache> {
        self.http_client.token_cache()
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidRequest`] if the path is empty.
    /// Returns other [`TransportError`]s for failures without a response.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = HashMap::new();
    /// query.insert("product_id".to_string(), "PROD-XXCD1234QWER65782".to_string());
    /// let response = client.get("billing/plans", Some(query)).await?;
    /// ```
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, TransportError> {
        self.make_request(HttpMethod::Get, path, None, query, None)
            .await
    }

    /// Sends a POST request to the specified path.
    ///
    /// Lifecycle actions such as `activate` are POSTs without a body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidRequest`] if the path is empty.
    /// Returns other [`TransportError`]s for failures without a response.
    pub async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, TransportError> {
        self.make_request(HttpMethod::Post, path, body, None, headers)
            .await
    }

    /// Sends a PATCH request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidRequest`] if the path is empty.
    /// Returns other [`TransportError`]s for failures without a response.
    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
        headers: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, TransportError> {
        self.make_request(HttpMethod::Patch, path, Some(body), None, headers)
            .await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, TransportError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        for (key, value) in headers.into_iter().flatten() {
            builder = builder.header(key, value);
        }

        let request = builder.build()?;
        self.http_client.request(request).await
    }
}

/// Normalizes a REST API path.
///
/// Strips leading `/` characters and a redundant `v1/` prefix, and rejects
/// empty paths.
fn normalize_path(path: &str) -> Result<String, InvalidHttpRequestError> {
    let path = path.trim_start_matches('/');
    let path = path.strip_prefix("v1/").unwrap_or(path);
    let path = path.trim_end_matches('/');

    if path.is_empty() {
        return Err(InvalidHttpRequestError::InvalidPath {
            path: String::new(),
        });
    }

    Ok(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticTokenProvider;
    use crate::config::{ClientId, ClientSecret};
    use crate::AccessToken;

    fn create_test_config() -> ClientConfig {
        ClientConfig::builder()
            .client_id(ClientId::new("test-client").unwrap())
            .client_secret(ClientSecret::new("test-secret").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_normalize_path_strips_leading_slash() {
        assert_eq!(normalize_path("/billing/plans").unwrap(), "billing/plans");
        assert_eq!(normalize_path("//billing/plans").unwrap(), "billing/plans");
    }

    #[test]
    fn test_normalize_path_strips_version_prefix() {
        assert_eq!(
            normalize_path("/v1/catalogs/products").unwrap(),
            "catalogs/products"
        );
    }

    #[test]
    fn test_normalize_path_keeps_nested_paths() {
        assert_eq!(
            normalize_path("billing/subscriptions/I-BW452GLLEP1G/suspend").unwrap(),
            "billing/subscriptions/I-BW452GLLEP1G/suspend"
        );
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        for path in ["", "/", "/v1/"] {
            assert!(matches!(
                normalize_path(path),
                Err(InvalidHttpRequestError::InvalidPath { .. })
            ));
        }
    }

    #[test]
    fn test_rest_client_uses_versioned_base_path() {
        let client = RestClient::with_token_provider(
            &create_test_config(),
            Arc::new(StaticTokenProvider::new(AccessToken::new("t"))),
        )
        .unwrap();

        assert_eq!(client.http_client().base_path(), "/v1");
        assert_eq!(
            client.http_client().base_uri(),
            "https://api-m.sandbox.paypal.com"
        );
    }

    #[test]
    fn test_clients_can_share_token_cache() {
        let config = create_test_config();
        let tokens = Arc::new(TokenCache::new(Arc::new(StaticTokenProvider::new(
            AccessToken::new("shared"),
        ))));

        let a = RestClient::with_token_cache(&config, Arc::clone(&tokens)).unwrap();
        let b = RestClient::with_token_cache(&config, Arc::clone(&tokens)).unwrap();

        assert!(Arc::ptr_eq(a.token_cache(), b.token_cache()));
    }
}
