//! Authentication for the PayPal REST API.
//!
//! Every API request carries an OAuth 2.0 bearer token. This module provides
//! the pieces that obtain and share that token:
//!
//! - [`AccessToken`]: A bearer token with optional expiry
//! - [`TokenProvider`]: Source of fresh tokens
//! - [`ClientCredentialsProvider`]: Exchanges client ID and secret for a token
//! - [`StaticTokenProvider`]: Returns a caller-supplied token
//! - [`TokenCache`]: Lazily fetched, process-wide token with single-flight refresh
//!
//! # Token Lifecycle
//!
//! The cache fetches a token on the first request, reuses it while it is
//! valid, and fetches a new one when it expires or when the API answers 401.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use paypal_subscriptions::auth::{ClientCredentialsProvider, TokenCache};
//!
//! let provider = ClientCredentialsProvider::from_config(&config)?;
//! let cache = Arc::new(TokenCache::new(Arc::new(provider)));
//! let token = cache.token().await?;
//! ```

mod cache;
mod error;
mod provider;
mod token;

pub use cache::TokenCache;
pub use error::AuthError;
pub use provider::{ClientCredentialsProvider, StaticTokenProvider, TokenProvider};
pub use token::{AccessToken, EXPIRY_SKEW_SECONDS};
