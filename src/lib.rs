//! # PayPal Subscriptions Rust SDK
//!
//! A Rust client for the PayPal catalog and billing REST APIs: products,
//! billing plans and subscriptions.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for API credentials and base URLs
//! - OAuth 2.0 client-credentials tokens with a shared, single-flight
//!   [`TokenCache`]
//! - An async HTTP client with timeouts, 401 token refresh and retries for
//!   idempotent requests
//! - Typed resources with create, find, paginated listing, JSON-Patch updates
//!   and lifecycle actions via [`rest::RestResource`]
//!
//! ## Quick Start
//!
//! ```rust
//! use paypal_subscriptions::{ClientConfig, ClientId, ClientSecret, Environment};
//! use std::time::Duration;
//!
//! let config = ClientConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-client-secret").unwrap())
//!     .environment(Environment::Sandbox)
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://api-m.sandbox.paypal.com");
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use paypal_subscriptions::{ClientConfig, RestClient};
//! use paypal_subscriptions::rest::RestResource;
//! use paypal_subscriptions::rest::resources::v1::{Plan, Product, Subscription};
//!
//! let client = RestClient::new(&ClientConfig::from_env()?)?;
//!
//! let product = Product::create(&client, &product_attrs).await?;
//! let mut plan = Plan::create(&client, &plan_attrs).await?;
//! plan.activate(&client).await?;
//!
//! let mut subscription = Subscription::create(&client, &subscription_attrs).await?;
//! subscription.suspend(&client, "Customer-requested pause").await?;
//! ```
//!
//! ## Errors
//!
//! Every call that talks to PayPal returns a `Result`. When PayPal answers
//! with a 4xx/5xx status the error is [`rest::ResourceError::Remote`], which
//! carries the parsed error body for inspection. Network failures and
//! timeouts are [`TransportError`]s; malformed bodies are
//! [`rest::DecodeError`]s.
//!
//! ## Blocking Callers
//!
//! Operations are `async`. Callers without a runtime wrap each call:
//!
//! ```rust,ignore
//! let runtime = tokio::runtime::Runtime::new()?;
//! let plan = runtime.block_on(Plan::find(&client, "P-5ML4271244454362WXNWU5NQ"))?;
//! ```
//!
//! ## Thread Safety
//!
//! All public types are `Send + Sync`. A [`RestClient`] can be shared across
//! tasks; only the token cache holds mutable state, and only its refresh is
//! serialized.

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{
    AccessToken, AuthError, ClientCredentialsProvider, StaticTokenProvider, TokenCache,
    TokenProvider,
};
pub use config::{ApiBaseUrl, ClientConfig, ClientConfigBuilder, ClientId, ClientSecret, Environment};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, PaginationInfo, RestClient, RetryPolicy, TransportError,
};
