//! Resilient Provider Wrapper
//!
//! Bounds every call to the wrapped provider with a timeout and retries
//! retryable failures with exponential backoff (via `backon`).
//!
//! ## Strategy
//!
//! 1. Run the attempt under `with_timeout`
//! 2. On a retryable failure (rate limit, network, transient, timeout), back off
//! 3. Stop after `max_retries` retries and return the last error
//!
//! Auth, bad-request and unavailable errors fail on the first attempt.

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use std::time::Duration;
use tracing::{debug, warn};

use super::{LlmProvider, LlmResponse, SharedProvider};
use crate::ai::timeout::with_timeout;
use crate::constants::retry as retry_constants;
use crate::types::{Result, SousError};

pub struct ResilientProvider {
    inner: SharedProvider,
    timeout: Duration,
    max_retries: usize,
    min_delay: Duration,
    max_delay: Duration,
}

impl ResilientProvider {
    pub fn new(inner: SharedProvider, timeout: Duration, max_retries: usize) -> Self {
        Self {
            inner,
            timeout,
            max_retries,
            min_delay: Duration::from_millis(retry_constants::BASE_DELAY_MS),
            max_delay: Duration::from_secs(retry_constants::MAX_DELAY_SECS),
        }
    }

    /// Override backoff delays
    pub fn with_backoff(mut self, min_delay: Duration, max_delay: Duration) -> Self {
        self.min_delay = min_delay;
        self.max_delay = max_delay;
        self
    }

    fn backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(self.min_delay)
            .with_max_delay(self.max_delay)
            .with_factor(retry_constants::BACKOFF_FACTOR)
            .with_max_times(self.max_retries)
            .with_jitter()
    }

    async fn attempt(&self, prompt: &str) -> Result<LlmResponse> {
        with_timeout(
            self.timeout,
            self.inner.generate(prompt),
            &format!("{} generation", self.inner.name()),
        )
        .await
    }
}

#[async_trait]
impl LlmProvider for ResilientProvider {
    async fn generate(&self, prompt: &str) -> Result<LlmResponse> {
        debug!(
            "Calling {} (timeout: {:?}, max retries: {})",
            self.inner.name(),
            self.timeout,
            self.max_retries
        );

        (|| async { self.attempt(prompt).await })
            .retry(self.backoff())
            .sleep(tokio::time::sleep)
            .when(|e: &SousError| e.is_recoverable())
            .notify(|e: &SousError, delay: Duration| {
                warn!(
                    "{} call failed, retrying in {:?}: {}",
                    self.inner.name(),
                    delay,
                    e
                );
            })
            .await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn model(&self) -> &str {
        self.inner.model()
    }

    async fn health_check(&self) -> Result<bool> {
        with_timeout(self.timeout, self.inner.health_check(), "health check").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::provider::FakeProvider;
    use crate::types::{ErrorCategory, LlmError};
    use std::sync::Arc;

    fn wrap(fake: Arc<FakeProvider>, timeout: Duration, max_retries: usize) -> ResilientProvider {
        ResilientProvider::new(fake, timeout, max_retries)
            .with_backoff(Duration::from_millis(1), Duration::from_millis(5))
    }

    #[tokio::test]
    async fn test_retries_transient_failures() {
        let fake = Arc::new(
            FakeProvider::new()
                .with_default_response(r#"["Stir"]"#)
                .with_failure(LlmError::new(ErrorCategory::Transient, "overloaded"))
                .with_failure(LlmError::new(ErrorCategory::RateLimit, "slow down")),
        );
        let provider = wrap(fake.clone(), Duration::from_secs(1), 2);

        let response = provider.generate("prompt").await.unwrap();
        assert_eq!(response.content.as_deref(), Some(r#"["Stir"]"#));
        assert_eq!(fake.call_count(), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let fake = Arc::new(
            FakeProvider::new()
                .with_default_response("[]")
                .with_failure(LlmError::new(ErrorCategory::Network, "reset"))
                .with_failure(LlmError::new(ErrorCategory::Network, "reset"))
                .with_failure(LlmError::new(ErrorCategory::Network, "reset")),
        );
        let provider = wrap(fake.clone(), Duration::from_secs(1), 1);

        let err = provider.generate("prompt").await.unwrap_err();
        assert!(matches!(err, SousError::Llm(_)));
        assert_eq!(fake.call_count(), 2);
    }

    #[tokio::test]
    async fn test_non_retryable_fails_fast() {
        let fake = Arc::new(
            FakeProvider::new()
                .with_default_response("[]")
                .with_failure(LlmError::new(ErrorCategory::Auth, "bad key")),
        );
        let provider = wrap(fake.clone(), Duration::from_secs(1), 3);

        let err = provider.generate("prompt").await.unwrap_err();
        assert!(matches!(err, SousError::Llm(ref e) if e.category == ErrorCategory::Auth));
        assert_eq!(fake.call_count(), 1);
    }

    #[tokio::test]
    async fn test_timeout_is_distinct_error() {
        let fake = Arc::new(
            FakeProvider::new()
                .with_default_response("[]")
                .with_delay(Duration::from_millis(200)),
        );
        let provider = wrap(fake.clone(), Duration::from_millis(10), 0);

        let err = provider.generate("prompt").await.unwrap_err();
        assert!(matches!(err, SousError::Timeout { .. }));
        assert_eq!(fake.call_count(), 1);
    }

    #[tokio::test]
    async fn test_health_check_passes_through() {
        let up = wrap(Arc::new(FakeProvider::new()), Duration::from_secs(1), 0);
        assert!(up.health_check().await.unwrap());

        let down = wrap(
            Arc::new(FakeProvider::new().with_unavailable()),
            Duration::from_secs(1),
            0,
        );
        assert!(!down.health_check().await.unwrap());
    }

    #[test]
    fn test_delegates_identity() {
        let provider = wrap(Arc::new(FakeProvider::new()), Duration::from_secs(1), 0);
        assert_eq!(provider.name(), "fake");
        assert_eq!(provider.model(), "fake-model");
    }
}
