//! Authentication error types.

use thiserror::Error;

/// Errors that can occur while obtaining an access token.
///
/// # Example
///
/// ```rust
/// use paypal_subscriptions::AuthError;
///
/// let error = AuthError::TokenRequestFailed {
///     status: 401,
///     message: "Client Authentication failed".to_string(),
/// };
/// assert!(error.to_string().contains("401"));
/// ```
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint rejected the request.
    #[error("Token request failed with status {status}: {message}")]
    TokenRequestFailed {
        /// HTTP status code returned by the token endpoint.
        status: u16,
        /// Error description reported by the endpoint.
        message: String,
    },

    /// The token endpoint returned a body that is not a token response.
    #[error("Failed to parse token response: {0}")]
    InvalidTokenResponse(String),

    /// The token endpoint could not be reached.
    #[error("Network error while requesting token: {0}")]
    Network(#[from] reqwest::Error),
}

impl AuthError {
    /// Returns the HTTP status reported by the token endpoint, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::TokenRequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
