use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff policy for retried database operations.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the initial attempt
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds
    pub initial_delay_ms: u64,

    /// Upper bound on any single delay, in milliseconds
    pub max_delay_ms: u64,

    /// Growth factor between consecutive delays
    pub backoff_multiplier: f64,

    /// Randomize each delay to avoid synchronized reconnect storms
    pub use_jitter: bool,
}

impl RetryConfig {
    /// Default policy: 3 retries, 100ms initial delay, 5s cap, doubling,
    /// jitter on.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    /// Delay before retry number `retry` (1-based), jitter not applied.
    fn backoff_delay_ms(&self, retry: u32) -> u64 {
        let exponent = retry.saturating_sub(1);
        let grown = self.initial_delay_ms as f64 * self.backoff_multiplier.powi(exponent as i32);

        (grown as u64).min(self.max_delay_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

/// Run `operation` until it succeeds or the policy's retries are spent.
///
/// The final error is returned unchanged; intermediate failures are logged
/// at debug level so a flapping store does not flood the log.
///
/// # Example
/// ```ignore
/// use database::common::retry::{RetryConfig, retry_with_backoff};
///
/// let policy = RetryConfig::new().with_max_retries(5);
/// let client = retry_with_backoff(|| database::mongodb::connect(&url), policy).await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut failures = 0;

    loop {
        match operation().await {
            Ok(value) => {
                if failures > 0 {
                    debug!("Operation succeeded after {} retries", failures);
                }
                return Ok(value);
            }
            Err(e) => {
                failures += 1;

                if failures > config.max_retries {
                    warn!(
                        "Giving up after {} attempts, last error: {}",
                        failures, e
                    );
                    return Err(e);
                }

                let mut delay = config.backoff_delay_ms(failures);
                if config.use_jitter {
                    delay = apply_jitter(delay);
                }

                debug!(
                    "Attempt {}/{} failed: {}. Next try in {}ms",
                    failures,
                    config.max_retries + 1,
                    e,
                    delay
                );

                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
        }
    }
}

/// Scale a delay by a pseudo-random factor in [0.5, 1.0).
fn apply_jitter(delay: u64) -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let noise = RandomState::new().hash_one(std::time::SystemTime::now()) % 50;
    let factor = noise as f64 / 100.0 + 0.5;

    (delay as f64 * factor) as u64
}

/// [`retry_with_backoff`] with the default policy.
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn backoff_delays_grow_and_cap() {
        let config = RetryConfig::new()
            .with_initial_delay(100)
            .with_max_delay(500);

        assert_eq!(config.backoff_delay_ms(1), 100);
        assert_eq!(config.backoff_delay_ms(2), 200);
        assert_eq!(config.backoff_delay_ms(3), 400);
        assert_eq!(config.backoff_delay_ms(4), 500);
        assert_eq!(config.backoff_delay_ms(10), 500);
    }

    #[tokio::test]
    async fn succeeds_on_first_attempt() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = attempts.clone();

        let result = retry(|| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, String>("connected")
            }
        })
        .await;

        assert_eq!(result.unwrap(), "connected");
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn recovers_after_transient_failures() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = attempts.clone();

        let config = RetryConfig::new().with_initial_delay(10).without_jitter();

        let result = retry_with_backoff(
            || {
                let counter = counter.clone();
                async move {
                    if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                        Err("connection refused".to_string())
                    } else {
                        Ok("connected")
                    }
                }
            },
            config,
        )
        .await;

        assert_eq!(result.unwrap(), "connected");
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = attempts.clone();

        let config = RetryConfig::new()
            .with_max_retries(2)
            .with_initial_delay(10)
            .without_jitter();

        let result = retry_with_backoff(
            || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>("still down")
                }
            },
            config,
        )
        .await;

        assert_eq!(result.unwrap_err(), "still down");
        // 1 initial attempt + 2 retries
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }
}
