//! Resource-specific error types for REST API operations.
//!
//! Failures fall into two groups:
//!
//! - **Remote errors**: the server answered with a 4xx/5xx status. These are
//!   returned as data in [`ResourceError::Remote`] carrying a structured
//!   [`RemoteError`] so the caller can inspect the `name`, `debug_id` and
//!   per-field `details`.
//! - **Local faults**: the request never produced a usable answer
//!   ([`ResourceError::Transport`]), the answer could not be decoded
//!   ([`ResourceError::Decode`]), or the request could not be built.
//!
//! # Status Mapping
//!
//! | Status | [`RemoteErrorKind`] |
//! |--------|---------------------|
//! | 400    | `BadRequest`        |
//! | 401    | `Unauthorized`      |
//! | 403    | `Forbidden`         |
//! | 404    | `NotFound`          |
//! | 409    | `Conflict`          |
//! | 422    | `Unprocessable`     |
//! | 429    | `RateLimited`       |
//! | 5xx    | `Server`            |
//!
//! # Example
//!
//! ```rust,ignore
//! use paypal_subscriptions::rest::{RestResource, ResourceError};
//!
//! match subscription.cancel(&client, "Not satisfied with the service").await {
//!     Ok(()) => println!("cancelled"),
//!     Err(ResourceError::Remote(e)) if e.has_issue("SUBSCRIPTION_STATUS_INVALID") => {
//!         println!("already cancelled (debug id {:?})", e.debug_id);
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::clients::{HttpResponse, TransportError};

/// Classification of a remote error by HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteErrorKind {
    /// 400: malformed request or failed schema validation.
    BadRequest,
    /// 401: the bearer token was rejected.
    Unauthorized,
    /// 403: the caller lacks permission.
    Forbidden,
    /// 404: the resource does not exist.
    NotFound,
    /// 409: the request conflicts with the resource's current state.
    Conflict,
    /// 422: the request violates a business rule.
    Unprocessable,
    /// 429: too many requests.
    RateLimited,
    /// 5xx: the server failed.
    Server,
    /// Any other non-2xx status.
    Other,
}

impl RemoteErrorKind {
    /// Maps an HTTP status code to its kind.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            422 => Self::Unprocessable,
            429 => Self::RateLimited,
            500..=599 => Self::Server,
            _ => Self::Other,
        }
    }
}

/// One entry of the `details` array of a PayPal error body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RemoteErrorDetail {
    /// JSON pointer to the offending field.
    #[serde(default)]
    pub field: Option<String>,
    /// The offending value.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    /// Where the field lives (`body`, `path` or `query`).
    #[serde(default)]
    pub location: Option<String>,
    /// Machine readable issue code (e.g., `DUPLICATE_BILLING_CYCLE_SEQUENCE`).
    #[serde(default)]
    pub issue: Option<String>,
    /// Human readable description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A server-reported failure with structured detail.
///
/// # Example
///
/// ```rust
/// use paypal_subscriptions::rest::{RemoteError, RemoteErrorKind};
/// use serde_json::json;
///
/// let error = RemoteError::from_parts(
///     422,
///     &json!({
///         "name": "UNPROCESSABLE_ENTITY",
///         "message": "The requested action could not be performed.",
///         "debug_id": "b1d1f06c7246c",
///         "details": [{
///             "field": "/pricing_schemes/1/billing_cycle_sequence",
///             "issue": "DUPLICATE_BILLING_CYCLE_SEQUENCE",
///             "description": "Duplicate billing cycle sequence."
///         }]
///     }),
///     None,
/// );
///
/// assert_eq!(error.kind, RemoteErrorKind::Unprocessable);
/// assert!(error.is_validation());
/// assert!(error.has_issue("DUPLICATE_BILLING_CYCLE_SEQUENCE"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    /// The HTTP status code.
    pub status: u16,
    /// The status classification.
    pub kind: RemoteErrorKind,
    /// The error name (e.g., `RESOURCE_NOT_FOUND`).
    pub name: String,
    /// The error message.
    pub message: String,
    /// PayPal debug ID from the body or the `PayPal-Debug-Id` header.
    pub debug_id: Option<String>,
    /// Per-field details.
    pub details: Vec<RemoteErrorDetail>,
}

impl RemoteError {
    /// Builds a remote error from a non-2xx response.
    #[must_use]
    pub fn from_http_response(response: &HttpResponse) -> Self {
        Self::from_parts(response.code, &response.body, response.debug_id())
    }

    /// Builds a remote error from a status, body and header debug ID.
    ///
    /// Understands both the REST error body (`name`, `message`, `debug_id`,
    /// `details`) and the OAuth style body (`error`, `error_description`).
    #[must_use]
    pub fn from_parts(status: u16, body: &serde_json::Value, header_debug_id: Option<&str>) -> Self {
        let text = |key: &str| {
            body.get(key)
                .and_then(serde_json::Value::as_str)
                .map(ToString::to_string)
        };

        let name = text("name")
            .or_else(|| text("error"))
            .unwrap_or_else(|| format!("HTTP_{status}"));

        let message = text("message")
            .or_else(|| text("error_description"))
            .or_else(|| text("raw_body"))
            .unwrap_or_default();

        // Entries that do not match the detail shape are skipped.
        let details: Vec<RemoteErrorDetail> = body
            .get("details")
            .and_then(serde_json::Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            status,
            kind: RemoteErrorKind::from_status(status),
            name,
            message,
            debug_id: text("debug_id").or_else(|| header_debug_id.map(ToString::to_string)),
            details,
        }
    }

    /// Returns `true` for validation failures (400 or 422).
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self.kind,
            RemoteErrorKind::BadRequest | RemoteErrorKind::Unprocessable
        )
    }

    /// Returns `true` for 404 responses.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == RemoteErrorKind::NotFound
    }

    /// Returns `true` if any detail carries the issue code `issue`.
    #[must_use]
    pub fn has_issue(&self, issue: &str) -> bool {
        self.details
            .iter()
            .any(|detail| detail.issue.as_deref() == Some(issue))
    }

    /// Returns the issue codes of all details.
    pub fn issues(&self) -> impl Iterator<Item = &str> {
        self.details.iter().filter_map(|d| d.issue.as_deref())
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.status, self.message)?;
        for issue in self.issues() {
            write!(f, " [{issue}]")?;
        }
        if let Some(debug_id) = &self.debug_id {
            write!(f, " (debug id: {debug_id})")?;
        }
        Ok(())
    }
}

impl std::error::Error for RemoteError {}

/// A response body that does not match the expected resource schema.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body could not be deserialized into the resource type.
    #[error("Failed to decode {resource}: {message}")]
    InvalidBody {
        /// The resource type name.
        resource: &'static str,
        /// The deserializer's message.
        message: String,
    },

    /// A returned resource has no `id`.
    #[error("{resource} in response has no id")]
    MissingId {
        /// The resource type name.
        resource: &'static str,
    },
}

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use paypal_subscriptions::rest::{RemoteError, ResourceError};
/// use serde_json::json;
///
/// let error = ResourceError::from(RemoteError::from_parts(
///     404,
///     &json!({"name": "RESOURCE_NOT_FOUND", "message": "The specified resource does not exist."}),
///     Some("abc123"),
/// ));
///
/// assert!(error.is_not_found());
/// assert_eq!(error.debug_id(), Some("abc123"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The server rejected the request.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The request produced no response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body did not match the resource schema.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The request body or query could not be serialized.
    #[error("Failed to encode {resource}: {message}")]
    Encode {
        /// The resource type name.
        resource: &'static str,
        /// The serializer's message.
        message: String,
    },

    /// No path is defined for the operation, or a required ID is missing.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The resource type name.
        resource: &'static str,
        /// The operation being attempted (e.g., "find", "all", "activate").
        operation: &'static str,
    },
}

impl ResourceError {
    /// Returns the attached remote error, if the server rejected the request.
    #[must_use]
    pub const fn remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Remote(e) => Some(e),
            _ => None,
        }
    }

    /// Returns `true` if the server answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.remote().is_some_and(RemoteError::is_not_found)
    }

    /// Returns the PayPal debug ID if available.
    ///
    /// Useful for debugging and error reporting.
    #[must_use]
    pub fn debug_id(&self) -> Option<&str> {
        self.remote().and_then(|e| e.debug_id.as_deref())
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RemoteError>();
    assert_send_sync::<ResourceError>();
};
