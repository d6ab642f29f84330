//! Error types for the PayPal subscriptions SDK.
//!
//! This module contains the configuration error type. Errors raised while
//! talking to the API live next to the layer that produces them:
//!
//! - [`TransportError`](crate::clients::TransportError) for network, timeout and
//!   token failures
//! - [`ResourceError`](crate::rest::ResourceError) for resource operations,
//!   including server-reported [`RemoteError`](crate::rest::RemoteError)s
//!
//! # Example
//!
//! ```rust
//! use paypal_subscriptions::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// All configuration constructors validate eagerly and return one of these
/// variants with an actionable message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide a valid PayPal REST client ID.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide a valid PayPal REST client secret.")]
    EmptyClientSecret,

    /// The API base URL is invalid.
    #[error("Invalid API base URL '{url}'. Please provide a URL with an http or https scheme (e.g., 'https://api-m.sandbox.paypal.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The environment name is not recognized.
    #[error("Invalid environment '{value}'. Expected 'sandbox', 'live', or an http(s) URL.")]
    InvalidEnvironment {
        /// The value that was provided.
        value: String,
    },

    /// A timeout of zero was configured.
    #[error("Request timeout must be greater than zero.")]
    InvalidTimeout,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is missing.
    #[error("Missing environment variable '{name}'.")]
    MissingEnvVar {
        /// The name of the environment variable.
        name: &'static str,
    },
}
