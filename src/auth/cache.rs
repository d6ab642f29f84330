//! Process-wide access token cache.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::auth::{AccessToken, AuthError, TokenProvider};

/// Caches the bearer token shared by every request of a client.
///
/// The first call to [`token`](Self::token) fetches a token from the
/// provider. Later calls return the cached token until it expires. When the
/// server rejects a token with 401, the transport calls
/// [`refresh`](Self::refresh) with the rejected value.
///
/// Refreshes are single-flight: only the refresh itself is serialized, and
/// callers that queued behind a refresh reuse its result instead of fetching
/// again. Requests that already hold a valid token never wait.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use paypal_subscriptions::auth::{StaticTokenProvider, TokenCache};
/// use paypal_subscriptions::AccessToken;
///
/// # tokio_test::block_on(async {
/// let cache = TokenCache::new(Arc::new(StaticTokenProvider::new(AccessToken::new("abc"))));
/// let token = cache.token().await.unwrap();
/// assert_eq!(token.value(), "abc");
/// # });
/// ```
#[derive(Debug)]
pub struct TokenCache {
    provider: Arc<dyn TokenProvider>,
    current: RwLock<Option<AccessToken>>,
    refresh_lock: Mutex<()>,
}

// Verify TokenCache is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenCache>();
};

impl TokenCache {
    /// Creates an empty cache backed by `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            provider,
            current: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Returns a valid token, fetching one if none is cached or the cached
    /// token has expired.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the provider fails.
    pub async fn token(&self) -> Result<AccessToken, AuthError> {
        if let Some(token) = self.cached().await {
            return Ok(token);
        }
        self.refresh(None).await
    }

    /// Replaces the cached token.
    ///
    /// `stale` is the token value the caller saw rejected. If another task
    /// already replaced it, the newer token is returned without another fetch.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the provider fails.
    pub async fn refresh(&self, stale: Option<&str>) -> Result<AccessToken, AuthError> {
        let _guard = self.refresh_lock.lock().await;

        if let Some(current) = self.current.read().await.as_ref() {
            let replaced = stale.is_some_and(|stale| stale != current.value());
            let still_fresh = stale.is_none() && !current.expired();
            if replaced || still_fresh {
                return Ok(current.clone());
            }
        }

        tracing::info!("refreshing access token");
        let token = self.provider.fetch_token().await?;
        *self.current.write().await = Some(token.clone());
        Ok(token)
    }

    /// Drops the cached token so the next request fetches a new one.
    pub async fn invalidate(&self) {
        *self.current.write().await = None;
    }

    async fn cached(&self) -> Option<AccessToken> {
        self.current
            .read()
            .await
            .as_ref()
            .filter(|token| !token.expired())
            .cloned()
    }
}
