//! Retry executor with exponential backoff and additive jitter.
//!
//! Attempt `n` (0-indexed) that fails while retries remain is followed by a
//! sleep of `base_delay * 2^n` plus a jitter drawn uniformly from
//! `[0, jitter_ratio * delay)`. The last failure is returned unchanged once
//! `max_retries + 1` attempts have failed.
//!
//! ```ignore
//! let draft = RetryPolicy::default()
//!     .execute(|| api.get_draft_revision(&id))
//!     .await?;
//! ```

use std::fmt;
use std::future::Future;
use std::time::Duration;

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_JITTER_RATIO: f64 = 0.1;

/// Source of uniform samples in `[0, 1)` used to size the jitter.
pub type JitterSource = fn() -> f64;

/// How many times to retry and how long to wait in between.
///
/// Pure data plus one `async` executor; the policy itself is never mutated
/// by a retry sequence, so one value can drive any number of independent
/// executions.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
    jitter_ratio: f64,
    jitter_source: JitterSource,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, DEFAULT_BASE_DELAY)
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            jitter_ratio: DEFAULT_JITTER_RATIO,
            jitter_source: rand::random::<f64>,
        }
    }

    /// Override the jitter ratio (default 0.1). Clamped to `[0, 1]`.
    pub fn with_jitter_ratio(mut self, ratio: f64) -> Self {
        self.jitter_ratio = unit_interval(ratio);
        self
    }

    /// Replace the random sample source, e.g. with a constant in tests.
    pub fn with_jitter_source(mut self, source: JitterSource) -> Self {
        self.jitter_source = source;
        self
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    pub fn jitter_ratio(&self) -> f64 {
        self.jitter_ratio
    }

    /// Initial attempt plus retries.
    pub fn total_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Un-jittered delay after failed attempt `attempt` (0-indexed).
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }

    /// Backoff for `attempt` plus `jitter_ratio * backoff * sample`.
    ///
    /// `sample` is expected in `[0, 1)`; anything outside `[0, 1]` (or NaN)
    /// is clamped.
    pub fn delay_for(&self, attempt: u32, sample: f64) -> Duration {
        let delay = self.backoff(attempt);
        let jitter = delay.mul_f64(self.jitter_ratio * unit_interval(sample));
        delay.saturating_add(jitter)
    }

    /// Run `operation` until it succeeds or the policy is exhausted.
    ///
    /// `operation` is called once per attempt and must build a fresh future
    /// each time. Attempts never overlap.
    pub async fn execute<F, Fut, T, E>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        let total = self.total_attempts();
        let mut attempt = 0u32;

        loop {
            let err = match operation().await {
                Ok(value) => return Ok(value),
                Err(e) => e,
            };

            if attempt >= self.max_retries {
                tracing::error!(attempts = total, error = %err, "retries exhausted");
                return Err(err);
            }

            let delay = self.delay_for(attempt, (self.jitter_source)());
            tracing::warn!(
                attempt = attempt + 1,
                total,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "attempt failed, retrying"
            );
            drop(err);

            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

/// Retry `operation` with the given bounds and the default jitter.
pub async fn with_backoff<F, Fut, T, E>(
    operation: F,
    max_retries: u32,
    base_delay: Duration,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    RetryPolicy::new(max_retries, base_delay)
        .execute(operation)
        .await
}

fn unit_interval(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}
