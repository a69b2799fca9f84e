//! Waiting for the database to accept queries.
//!
//! Retries an operation with exponential backoff until it succeeds or the
//! retry budget is spent.

use sea_orm::DbErr;
use std::future::Future;
use std::time::Duration;

/// Backoff settings for [`with_retry`].
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Attempts after the first one.
    pub max_retries: u32,
    pub base_delay_ms: u64,
    /// Upper bound for a single delay.
    pub max_delay_ms: u64,
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            base_delay_ms: 200,
            max_delay_ms: 5_000,
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    pub fn with_delays(max_retries: u32, base_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            max_retries,
            base_delay_ms,
            max_delay_ms,
            backoff_multiplier: 2.0,
        }
    }

    /// No retries at all: the operation runs exactly once.
    pub fn none() -> Self {
        Self::with_delays(0, 0, 0)
    }

    /// Delay before `attempt` (0 is the first try and never waits).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }

        let exponential =
            self.base_delay_ms as f64 * self.backoff_multiplier.powi((attempt - 1) as i32);
        Duration::from_millis((exponential as u64).min(self.max_delay_ms))
    }
}

/// Runs `operation` until it returns `Ok`, sleeping between attempts.
///
/// Returns the last error once `max_retries` extra attempts have failed.
pub async fn with_retry<T, F, Fut>(
    config: &RetryConfig,
    label: &str,
    operation: F,
) -> Result<T, DbErr>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, DbErr>>,
{
    let mut attempt = 0;
    loop {
        let delay = config.delay_for(attempt);
        if !delay.is_zero() {
            log::debug!("{label}: retrying in {}ms (attempt {})", delay.as_millis(), attempt + 1);
            tokio::time::sleep(delay).await;
        }

        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    log::info!("{label}: succeeded after {} attempts", attempt + 1);
                }
                return Ok(value);
            }
            Err(err) if attempt < config.max_retries => {
                log::warn!("{label}: attempt {} failed: {err}", attempt + 1);
                attempt += 1;
            }
            Err(err) => {
                log::warn!("{label}: giving up after {} attempts: {err}", attempt + 1);
                return Err(err);
            }
        }
    }
}
