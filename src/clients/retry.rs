//! Bounded exponential backoff with jitter for idempotent requests.

use std::time::Duration;

use rand::Rng;

use crate::clients::HttpMethod;
use crate::config::ClientConfig;

/// Exponent cap so `2^n` never overflows.
const MAX_BACKOFF_EXPONENT: u32 = 16;

/// Fraction of the delay used as the jitter window.
const JITTER_FACTOR: f64 = 0.5;

/// HTTP statuses that indicate a transient server-side condition.
pub const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Retry policy for the transport.
///
/// Only idempotent methods are retried. The delay before retry `n`
/// (zero-based) is `base_delay * 2^n`, capped at `max_delay`, with up to
/// +/-25% random jitter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
    max_delay: Duration,
    jitter_factor: f64,
}

impl RetryPolicy {
    /// Creates a policy.
    #[must_use]
    pub fn new(max_retries: u32, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            max_delay: max_delay.max(base_delay),
            jitter_factor: JITTER_FACTOR,
        }
    }

    /// Creates a policy from the retry settings in `config`.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            config.max_retries(),
            config.retry_base_delay(),
            config.retry_max_delay(),
        )
    }

    /// A policy that never retries.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(0, Duration::ZERO, Duration::ZERO)
    }

    /// Disables jitter, making delays deterministic.
    #[must_use]
    pub const fn without_jitter(mut self) -> Self {
        self.jitter_factor = 0.0;
        self
    }

    /// Returns the number of retries after the first attempt.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns `true` if another attempt is allowed for `method` after
    /// `retries_done` retries.
    #[must_use]
    pub const fn should_retry(&self, method: HttpMethod, retries_done: u32) -> bool {
        method.is_idempotent() && retries_done < self.max_retries
    }

    /// Returns `true` if `status` is worth retrying.
    #[must_use]
    pub fn is_retryable_status(status: u16) -> bool {
        RETRYABLE_STATUSES.contains(&status)
    }

    /// Calculates the delay before retry number `retry` (zero-based).
    #[must_use]
    pub fn delay(&self, retry: u32) -> Duration {
        self.apply_jitter(self.exponential_delay(retry))
    }

    fn exponential_delay(&self, retry: u32) -> Duration {
        let base_millis = u64::try_from(self.base_delay.as_millis()).unwrap_or(u64::MAX);
        let max_millis = u64::try_from(self.max_delay.as_millis()).unwrap_or(u64::MAX);

        let multiplier = 2_u64.saturating_pow(retry.min(MAX_BACKOFF_EXPONENT));
        Duration::from_millis(base_millis.saturating_mul(multiplier).min(max_millis))
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn apply_jitter(&self, delay: Duration) -> Duration {
        if self.jitter_factor == 0.0 || delay.is_zero() {
            return delay;
        }

        let delay_millis = delay.as_millis() as f64;
        let jitter_range = delay_millis * self.jitter_factor;
        let jitter = rand::thread_rng().gen_range(-jitter_range / 2.0..=jitter_range / 2.0);

        Duration::from_millis((delay_millis + jitter).max(0.0) as u64)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(2, Duration::from_millis(200), Duration::from_secs(5))
    }
}
