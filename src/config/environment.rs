//! PayPal API environment definitions.
//!
//! This module provides the [`Environment`] enum for selecting which PayPal
//! REST endpoint the SDK talks to.

use crate::config::ApiBaseUrl;
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

const SANDBOX_BASE_URL: &str = "https://api-m.sandbox.paypal.com";
const LIVE_BASE_URL: &str = "https://api-m.paypal.com";

/// PayPal API environment.
///
/// `Sandbox` and `Live` map to PayPal's published REST hosts. `Custom` points
/// the SDK at any other base URL, such as a local proxy or a mock server.
///
/// # Example
///
/// ```rust
/// use paypal_subscriptions::Environment;
///
/// let env: Environment = "live".parse().unwrap();
/// assert_eq!(env, Environment::Live);
/// assert_eq!(env.base_url(), "https://api-m.paypal.com");
///
/// let custom: Environment = "http://127.0.0.1:9000".parse().unwrap();
/// assert_eq!(custom.base_url(), "http://127.0.0.1:9000");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    /// The sandbox environment for development and testing.
    #[default]
    Sandbox,
    /// The live (production) environment.
    Live,
    /// A custom base URL.
    Custom(ApiBaseUrl),
}

impl Environment {
    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        match self {
            Self::Sandbox => SANDBOX_BASE_URL,
            Self::Live => LIVE_BASE_URL,
            Self::Custom(url) => url.as_ref(),
        }
    }

    /// Returns `true` for the live environment.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sandbox => f.write_str("sandbox"),
            Self::Live => f.write_str("live"),
            Self::Custom(url) => write!(f, "{url}"),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Self::Sandbox),
            "live" | "production" => Ok(Self::Live),
            _ if trimmed.contains("://") => Ok(Self::Custom(ApiBaseUrl::new(trimmed)?)),
            _ => Err(ConfigError::InvalidEnvironment {
                value: s.to_string(),
            }),
        }
    }
}
