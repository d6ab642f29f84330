//! Configuration types for the PayPal subscriptions SDK.
//!
//! # Overview
//!
//! - [`ClientConfig`]: The main configuration struct holding all SDK settings
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`ClientId`] / [`ClientSecret`]: Validated REST app credentials
//! - [`Environment`]: Sandbox, live, or a custom base URL
//!
//! # Example
//!
//! ```rust
//! use paypal_subscriptions::{ClientConfig, ClientId, ClientSecret, Environment};
//! use std::time::Duration;
//!
//! let config = ClientConfig::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .environment(Environment::Sandbox)
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_retries(), 2);
//! ```

mod environment;
mod newtypes;

pub use environment::Environment;
pub use newtypes::{ApiBaseUrl, ClientId, ClientSecret};

use std::time::Duration;

use crate::error::ConfigError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of retries for idempotent requests.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

const DEFAULT_RETRY_BASE_DELAY: Duration = Duration::from_millis(200);
const DEFAULT_RETRY_MAX_DELAY: Duration = Duration::from_secs(5);

const ENV_CLIENT_ID: &str = "PAYPAL_CLIENT_ID";
const ENV_CLIENT_SECRET: &str = "PAYPAL_CLIENT_SECRET";
const ENV_MODE: &str = "PAYPAL_MODE";
const ENV_BASE_URL: &str = "PAYPAL_API_BASE_URL";

/// Configuration for the PayPal subscriptions SDK.
///
/// `ClientConfig` is `Clone`, `Send` and `Sync`. It holds no connection state;
/// clients built from it own their own HTTP pool and token cache.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    environment: Environment,
    timeout: Duration,
    max_retries: u32,
    retry_base_delay: Duration,
    retry_max_delay: Duration,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Builds a configuration from process environment variables.
    ///
    /// Reads `PAYPAL_CLIENT_ID`, `PAYPAL_CLIENT_SECRET`, and optionally
    /// `PAYPAL_MODE` (`sandbox` or `live`) and `PAYPAL_API_BASE_URL`. A base URL
    /// takes precedence over the mode.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if the credentials are not set,
    /// or a validation error if any value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let client_id = lookup(ENV_CLIENT_ID).ok_or(ConfigError::MissingEnvVar {
            name: ENV_CLIENT_ID,
        })?;
        let client_secret = lookup(ENV_CLIENT_SECRET).ok_or(ConfigError::MissingEnvVar {
            name: ENV_CLIENT_SECRET,
        })?;

        let environment = match (lookup(ENV_BASE_URL), lookup(ENV_MODE)) {
            (Some(url), _) => Environment::Custom(ApiBaseUrl::new(url)?),
            (None, Some(mode)) => mode.parse()?,
            (None, None) => Environment::default(),
        };

        ClientConfigBuilder::new()
            .client_id(ClientId::new(client_id)?)
            .client_secret(ClientSecret::new(client_secret)?)
            .environment(environment)
            .build()
    }

    /// Returns the client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the target environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns the base URL of the target environment.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.environment.base_url()
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the number of retries allowed for idempotent requests.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the first backoff delay.
    #[must_use]
    pub const fn retry_base_delay(&self) -> Duration {
        self.retry_base_delay
    }

    /// Returns the upper bound for a single backoff delay.
    #[must_use]
    pub const fn retry_max_delay(&self) -> Duration {
        self.retry_max_delay
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Required fields are `client_id` and `client_secret`.
///
/// # Defaults
///
/// - `environment`: [`Environment::Sandbox`]
/// - `timeout`: 30 seconds
/// - `max_retries`: 2
/// - `retry_base_delay`: 200 ms, `retry_max_delay`: 5 s
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    environment: Option<Environment>,
    timeout: Option<Duration>,
    max_retries: Option<u32>,
    retry_base_delay: Option<Duration>,
    retry_max_delay: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client ID (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the target environment.
    #[must_use]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets how many times an idempotent request is retried after a
    /// transient failure. Zero disables retries.
    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Sets the backoff bounds used between retries.
    #[must_use]
    pub const fn retry_backoff(mut self, base_delay: Duration, max_delay: Duration) -> Self {
        self.retry_base_delay = Some(base_delay);
        self.retry_max_delay = Some(max_delay);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` are not set, and [`ConfigError::InvalidTimeout`] for a
    /// zero timeout.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        let retry_base_delay = self.retry_base_delay.unwrap_or(DEFAULT_RETRY_BASE_DELAY);
        let retry_max_delay = self
            .retry_max_delay
            .unwrap_or(DEFAULT_RETRY_MAX_DELAY)
            .max(retry_base_delay);

        Ok(ClientConfig {
            client_id,
            client_secret,
            environment: self.environment.unwrap_or_default(),
            timeout,
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            retry_base_delay,
            retry_max_delay,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
