//! Fake LLM provider for tests and offline runs.
//!
//! Responses are matched by prompt substring so tests run without network
//! access or API costs. Failures and latency can be scripted to exercise the
//! retry and timeout paths.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};
use std::time::Duration;

use super::{LlmProvider, LlmResponse, ResponseMetadata};
use crate::types::{ErrorCategory, LlmError, Result};

const PROVIDER_NAME: &str = "fake";
const MODEL_NAME: &str = "fake-model";

/// A fake LLM provider.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring (case-insensitive). Patterns are tried in registration order, so
/// the earliest matching pattern wins. If no match is found, the default
/// response is returned, or an error when no default is set.
#[derive(Debug, Default)]
pub struct FakeProvider {
    /// (lowercased prompt substring, response) in registration order
    responses: RwLock<Vec<(String, String)>>,
    /// Response used when no pattern matches
    default_response: Option<String>,
    /// Errors returned (front first) before any response is served
    failures: Mutex<VecDeque<LlmError>>,
    /// Artificial latency per call
    delay: Option<Duration>,
    /// Reported by `health_check`
    unavailable: bool,
    calls: AtomicUsize,
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeProvider that returns a specific response for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Add a response for prompts containing a specific substring.
    ///
    /// Re-registering a pattern replaces its response but keeps its position.
    pub fn add_response(&self, prompt_contains: &str, response: &str) {
        let pattern = prompt_contains.to_lowercase();
        let mut responses = self
            .responses
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match responses.iter_mut().find(|(existing, _)| *existing == pattern) {
            Some((_, existing)) => *existing = response.to_string(),
            None => responses.push((pattern, response.to_string())),
        }
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Fail the next call with `error` (queued after earlier failures).
    pub fn with_failure(self, error: LlmError) -> Self {
        self.failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(error);
        self
    }

    /// Sleep this long before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Report the provider as unreachable from `health_check`.
    pub fn with_unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Number of `generate` calls received so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Provider used by `llm.provider = "fake"`: a chatty, fenced reply that
    /// exercises the output sanitizer.
    pub fn with_sample_instructions() -> Self {
        Self::new().with_default_response(
            "Sure! Here are the steps:\n```json\n[\n  \"Gather and measure all ingredients.\",\n  \"Combine the ingredients as the recipe requires.\",\n  \"Cook until done, then serve.\"\n]\n```\nEnjoy your meal!",
        )
    }

    fn next_failure(&self) -> Option<LlmError> {
        self.failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
    }

    fn lookup(&self, prompt: &str) -> Option<String> {
        let responses = self
            .responses
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let prompt_lower = prompt.to_lowercase();
        responses
            .iter()
            .find(|(pattern, _)| prompt_lower.contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
            .or_else(|| self.default_response.clone())
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn generate(&self, prompt: &str) -> Result<LlmResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.next_failure() {
            return Err(error.into());
        }

        let content = self.lookup(prompt).ok_or_else(|| {
            LlmError::with_provider(
                ErrorCategory::BadRequest,
                "No fake response registered for prompt",
                PROVIDER_NAME,
            )
        })?;

        Ok(LlmResponse {
            content: Some(content),
            metadata: ResponseMetadata {
                model: MODEL_NAME.to_string(),
                provider: PROVIDER_NAME.to_string(),
            },
            ..LlmResponse::default()
        })
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn model(&self) -> &str {
        MODEL_NAME
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(!self.unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SousError;

    #[tokio::test]
    async fn test_fake_provider_matching() {
        let provider = FakeProvider::with_response("pancakes", r#"["Flip"]"#);
        let result = provider
            .generate("Recipe title: Pancakes")
            .await
            .unwrap();
        assert_eq!(result.content.as_deref(), Some(r#"["Flip"]"#));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_overlapping_patterns_first_registered_wins() {
        let provider = FakeProvider::new();
        provider.add_response("recipe title", "first");
        provider.add_response("pancakes", "second");
        provider.add_response("title: pancakes", "third");

        for _ in 0..10 {
            let result = provider.generate("Recipe title: Pancakes").await.unwrap();
            assert_eq!(result.content.as_deref(), Some("first"));
        }

        provider.add_response("RECIPE TITLE", "replaced");
        let result = provider.generate("Recipe title: Pancakes").await.unwrap();
        assert_eq!(result.content.as_deref(), Some("replaced"));
    }

    #[tokio::test]
    async fn test_health_check_reports_availability() {
        assert!(FakeProvider::new().health_check().await.unwrap());
        assert!(!FakeProvider::new().with_unavailable().health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_fake_provider_no_match() {
        let provider = FakeProvider::new();
        let result = provider.generate("random prompt").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fake_provider_default_response() {
        let provider = FakeProvider::new().with_default_response("default");
        let result = provider.generate("random prompt").await.unwrap();
        assert_eq!(result.content.as_deref(), Some("default"));
    }

    #[tokio::test]
    async fn test_scripted_failures_come_first() {
        let provider = FakeProvider::new()
            .with_default_response("[]")
            .with_failure(LlmError::new(ErrorCategory::Transient, "overloaded"));

        let first = provider.generate("anything").await;
        assert!(matches!(first, Err(SousError::Llm(_))));

        let second = provider.generate("anything").await.unwrap();
        assert_eq!(second.content.as_deref(), Some("[]"));
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_sample_instructions_parse() {
        let provider = FakeProvider::with_sample_instructions();
        let response = provider.generate("any recipe").await.unwrap();
        let steps = crate::ai::validation::parse_steps(response.content.as_deref());
        assert_eq!(steps.len(), 3);
    }
}
