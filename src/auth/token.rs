//! Bearer access tokens issued by the OAuth 2.0 token endpoint.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::fmt;

/// Tokens are treated as expired this many seconds before their real expiry,
/// so a request never leaves with a token that dies in flight.
pub const EXPIRY_SKEW_SECONDS: i64 = 60;

/// A bearer token used to authorize API requests.
///
/// The `Debug` implementation masks the token value.
///
/// # Example
///
/// ```rust
/// use paypal_subscriptions::AccessToken;
///
/// let token = AccessToken::new("A21AAF...");
/// assert_eq!(token.token_type(), "Bearer");
/// assert!(!token.expired());
/// assert!(!format!("{token:?}").contains("A21AAF"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    token_type: String,
    scope: Option<String>,
    app_id: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Creates a bearer token with no known expiry.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            token_type: "Bearer".to_string(),
            scope: None,
            app_id: None,
            expires_at: None,
        }
    }

    /// Sets the absolute expiry time.
    #[must_use]
    pub const fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the token type, usually `Bearer`.
    #[must_use]
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Returns the space separated scopes granted to the token.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Returns the application ID the token was issued to.
    #[must_use]
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    /// Returns the expiry time, if the issuer reported one.
    #[must_use]
    pub const fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Returns `true` if the token is expired or about to expire.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires_at.is_some_and(|expires_at| {
            Utc::now() + Duration::seconds(EXPIRY_SKEW_SECONDS) >= expires_at
        })
    }

    /// Returns the value of the `Authorization` header for this token.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.value)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"*****")
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .field("app_id", &self.app_id)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Response body of `POST /v1/oauth2/token`.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub nonce: Option<String>,
}

impl TokenResponse {
    /// Converts the wire response into an [`AccessToken`], anchoring
    /// `expires_in` at `issued_at`.
    pub(crate) fn into_access_token(self, issued_at: DateTime<Utc>) -> AccessToken {
        AccessToken {
            value: self.access_token,
            token_type: self.token_type.unwrap_or_else(|| "Bearer".to_string()),
            scope: self.scope,
            app_id: self.app_id,
            expires_at: self
                .expires_in
                .map(|seconds| issued_at + Duration::seconds(seconds)),
        }
    }
}
