//! Pacing and retry wrapper around the API client.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use federalregister_api::types::{DocumentDetail, SearchResult};
use federalregister_api::{Client, SearchRequest};
use rand::Rng;

use crate::config::{RetryConfig, Settings};
use crate::error::FederalRegisterError;

/// API client wrapper that spaces requests out and retries transient failures.
///
/// Consecutive calls are separated by at least `min_interval` (plus up to 50%
/// jitter). The first call has no delay. Only errors the API layer reports as
/// retryable are retried; everything else is returned at once.
pub struct PacedClient {
    inner: Client,
    min_interval: Duration,
    retry: RetryConfig,
    /// Tracks when the last HTTP request was sent, for pacing.
    last_request: Mutex<Option<Instant>>,
}

impl RetryConfig {
    fn delay_for_attempt(&self, attempt: usize) -> Duration {
        let shift = (attempt.saturating_sub(1)).min(30) as u32;
        let exp = 1u32 << shift;
        let base = self.base_delay.saturating_mul(exp).min(self.max_delay);
        let jitter = rand::thread_rng().gen_range(0.8..1.2);
        base.mul_f64(jitter)
    }
}

impl PacedClient {
    /// Builds the wrapped client from settings.
    pub fn new(settings: Settings) -> Result<Self, FederalRegisterError> {
        Ok(Self::from_client(
            Client::with_config(settings.client)?,
            settings.min_interval,
            settings.retry,
        ))
    }

    pub fn from_client(inner: Client, min_interval: Duration, retry: RetryConfig) -> Self {
        Self {
            inner,
            min_interval,
            retry,
            last_request: Mutex::new(None),
        }
    }

    async fn pace(&self) {
        let sleep_dur = {
            let last = self.last_request.lock().unwrap_or_else(|e| e.into_inner());
            match *last {
                Some(last_time) if !self.min_interval.is_zero() => {
                    let elapsed = last_time.elapsed();
                    let delay = self
                        .min_interval
                        .mul_f64(rand::thread_rng().gen_range(1.0..1.5));
                    delay.checked_sub(elapsed)
                }
                _ => None,
            }
        };
        if let Some(dur) = sleep_dur {
            tokio::time::sleep(dur).await;
        }
        *self.last_request.lock().unwrap_or_else(|e| e.into_inner()) = Some(Instant::now());
    }

    async fn with_retry<T, F, Fut>(&self, label: &str, mut f: F) -> Result<T, FederalRegisterError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, FederalRegisterError>>,
    {
        let mut attempt = 0usize;
        loop {
            match f().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempt += 1;
                    if attempt > self.retry.max_retries || !err.is_retryable() {
                        return Err(err);
                    }
                    let delay = self.retry.delay_for_attempt(attempt);
                    tracing::warn!(
                        "{} request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        label,
                        attempt,
                        self.retry.max_retries,
                        delay.as_secs_f64(),
                        err
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Runs one page of a documents search.
    pub async fn search_documents(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResult, FederalRegisterError> {
        self.with_retry("search", || async {
            self.pace().await;
            Ok(self.inner.search_documents(request).await?)
        })
        .await
    }

    /// Fetches a document's metadata and raw text.
    ///
    /// Both underlying requests count as one paced call; a retry repeats both.
    pub async fn fetch(&self, document_number: &str) -> Result<DocumentDetail, FederalRegisterError> {
        self.with_retry(document_number, || async {
            self.pace().await;
            Ok(self.inner.fetch(document_number).await?)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_grows_and_caps() {
        let cfg = RetryConfig {
            max_retries: 5,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(1000),
        };
        let first = cfg.delay_for_attempt(1);
        assert!(first >= Duration::from_millis(80) && first <= Duration::from_millis(120));
        let third = cfg.delay_for_attempt(3);
        assert!(third >= Duration::from_millis(320) && third <= Duration::from_millis(480));
        let capped = cfg.delay_for_attempt(20);
        assert!(capped <= Duration::from_millis(1200));
    }

    #[tokio::test]
    async fn first_call_is_not_delayed() {
        let client = PacedClient::from_client(
            Client::with_base_url("http://127.0.0.1:9").unwrap(),
            Duration::from_secs(60),
            RetryConfig::disabled(),
        );
        let started = Instant::now();
        client.pace().await;
        assert!(started.elapsed() < Duration::from_secs(1));
        assert!(client.last_request.lock().unwrap().is_some());
    }
}
