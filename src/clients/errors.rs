//! Transport error types for the PayPal subscriptions SDK.
//!
//! Transport errors are local faults: the request never produced an HTTP
//! response the caller can inspect. Non-2xx responses are *not* transport
//! errors; they are returned as [`HttpResponse`](crate::clients::HttpResponse)
//! values and mapped to [`RemoteError`](crate::rest::RemoteError) by the
//! resource layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use paypal_subscriptions::clients::TransportError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{}: {}", response.code, response.body),
//!     Err(TransportError::Timeout { .. }) => println!("timed out"),
//!     Err(TransportError::RetriesExhausted { attempts, .. }) => {
//!         println!("gave up after {attempts} attempts");
//!     }
//!     Err(e) => println!("transport failure: {e}"),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

use crate::auth::AuthError;

/// Error returned when an HTTP request fails validation before it is sent.
///
/// # Example
///
/// ```rust
/// use paypal_subscriptions::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "patch".to_string(),
/// };
/// assert_eq!(error.to_string(), "Cannot use patch without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is empty after normalization.
    #[error("Invalid request path: '{path}'")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },
}

/// Error type for failures below the HTTP response level.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    #[error("Request to {path} timed out after {timeout:?}")]
    Timeout {
        /// The request path.
        path: String,
        /// The configured timeout.
        timeout: Duration,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// A retryable request kept failing until the retry budget ran out.
    #[error("Exceeded maximum retry count of {attempts} attempts. Last failure: {last_failure}")]
    RetriesExhausted {
        /// The number of attempts made.
        attempts: u32,
        /// Description of the last failure.
        last_failure: String,
        /// The last HTTP status, if the last failure was a response.
        last_status: Option<u16>,
    },

    /// No bearer token could be obtained.
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl TransportError {
    /// Returns `true` for failures worth retrying on an idempotent request.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::Network(e) => e.is_connect() || e.is_request() || e.is_body(),
            _ => false,
        }
    }
}
