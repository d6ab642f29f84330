//! Token providers.
//!
//! A [`TokenProvider`] knows how to obtain a fresh [`AccessToken`]. The
//! [`TokenCache`](crate::auth::TokenCache) decides *when* to call it.

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;

use crate::auth::token::TokenResponse;
use crate::auth::{AccessToken, AuthError};
use crate::clients::SDK_VERSION;
use crate::config::{ClientConfig, ClientId, ClientSecret};

const TOKEN_PATH: &str = "/v1/oauth2/token";
const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// Source of bearer tokens.
///
/// Implementations must be cheap to call concurrently; the cache guarantees
/// that only one refresh runs at a time.
#[async_trait]
pub trait TokenProvider: Send + Sync + std::fmt::Debug {
    /// Fetches a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the token cannot be obtained.
    async fn fetch_token(&self) -> Result<AccessToken, AuthError>;
}

/// Obtains tokens with the OAuth 2.0 client credentials grant.
///
/// Sends `POST {base}/v1/oauth2/token` with HTTP Basic credentials and the
/// form body `grant_type=client_credentials`.
///
/// # Example
///
/// ```rust,ignore
/// use paypal_subscriptions::auth::{ClientCredentialsProvider, TokenProvider};
///
/// let provider = ClientCredentialsProvider::from_config(&config)?;
/// let token = provider.fetch_token().await?;
/// println!("expires at {:?}", token.expires_at());
/// ```
#[derive(Debug)]
pub struct ClientCredentialsProvider {
    client: reqwest::Client,
    token_url: String,
    client_id: ClientId,
    client_secret: ClientSecret,
}

// Verify ClientCredentialsProvider is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientCredentialsProvider>();
};

impl ClientCredentialsProvider {
    /// Creates a provider for the credentials and environment in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Network`] if the underlying HTTP client cannot
    /// be built with the configured timeout and TLS backend.
    pub fn from_config(config: &ClientConfig) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .user_agent(format!("PayPal Subscriptions Rust v{SDK_VERSION}"))
            .build()?;

        Ok(Self {
            client,
            token_url: format!("{}{TOKEN_PATH}", config.base_url()),
            client_id: config.client_id().clone(),
            client_secret: config.client_secret().clone(),
        })
    }

    /// Returns the token endpoint URL.
    #[must_use]
    pub fn token_url(&self) -> &str {
        &self.token_url
    }
}

/// OAuth style error body: `{"error": ..., "error_description": ...}`.
#[derive(Debug, Deserialize)]
struct OAuthErrorBody {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

#[async_trait]
impl TokenProvider for ClientCredentialsProvider {
    async fn fetch_token(&self) -> Result<AccessToken, AuthError> {
        tracing::debug!(url = %self.token_url, "requesting access token");

        let issued_at = Utc::now();
        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(self.client_id.as_ref(), Some(self.client_secret.as_ref()))
            .header("Accept", "application/json")
            .form(&[("grant_type", CLIENT_CREDENTIALS_GRANT_TYPE)])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            let message = serde_json::from_str::<OAuthErrorBody>(&body).map_or(body, |e| {
                e.error_description
                    .map_or_else(|| e.error.clone(), |d| format!("{}: {d}", e.error))
            });
            return Err(AuthError::TokenRequestFailed { status, message });
        }

        let token_response: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::InvalidTokenResponse(e.to_string()))?;

        Ok(token_response.into_access_token(issued_at))
    }
}

/// Hands out a token supplied by the caller.
///
/// Useful when tokens are issued by another service, and in tests.
///
/// # Example
///
/// ```rust
/// use paypal_subscriptions::auth::{StaticTokenProvider, TokenProvider};
/// use paypal_subscriptions::AccessToken;
///
/// # tokio_test::block_on(async {
/// let provider = StaticTokenProvider::new(AccessToken::new("pre-fetched"));
/// let token = provider.fetch_token().await.unwrap();
/// assert_eq!(token.value(), "pre-fetched");
/// # });
/// ```
#[derive(Clone, Debug)]
pub struct StaticTokenProvider {
    token: AccessToken,
}

impl StaticTokenProvider {
    /// Creates a provider that always returns `token`.
    #[must_use]
    pub const fn new(token: AccessToken) -> Self {
        Self { token }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn fetch_token(&self) -> Result<AccessToken, AuthError> {
        Ok(self.token.clone())
    }
}
