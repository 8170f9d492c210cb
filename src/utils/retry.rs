use std::future::Future;
use std::time::Duration;

/// Bounded retry for lookups that may race a concurrent write.
///
/// The operation runs at most `max_attempts` times with a fixed `delay`
/// between attempts, so the longest added wait is `(max_attempts - 1) * delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// `max_attempts` of 0 is treated as a single attempt.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn max_wait(&self) -> Duration {
        self.delay * (self.max_attempts - 1)
    }

    /// Runs `op` until it yields `Some`, an error, or attempts run out.
    pub async fn retry_until_some<T, E, F, Fut>(&self, mut op: F) -> Result<Option<T>, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<T>, E>>,
    {
        for attempt in 1..=self.max_attempts {
            if let Some(found) = op().await? {
                return Ok(Some(found));
            }

            if attempt < self.max_attempts {
                tracing::debug!(attempt, "Lookup empty, retrying");
                actix_web::rt::time::sleep(self.delay).await;
            }
        }

        Ok(None)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(200))
    }
}
