//! LLM Provider Abstraction
//!
//! Defines the `LlmProvider` trait: one text prompt in, raw model text out.
//! Providers do not interpret the text; shaping it into instruction steps is
//! the job of `ai::validation`.
//!
//! ## Modules
//!
//! - `gemini`: Google Generative Language API
//! - `fake`: deterministic provider for tests and offline runs
//! - `resilient`: per-attempt timeout and bounded retry around any provider

mod fake;
mod gemini;
mod resilient;

pub use fake::FakeProvider;
pub use gemini::GeminiProvider;
pub use resilient::ResilientProvider;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::config::LlmConfig;
use crate::types::{Result, SousError};

// =============================================================================
// LLM Response with Usage Metrics
// =============================================================================

/// Raw LLM response with usage metrics
#[derive(Debug, Clone, Default)]
pub struct LlmResponse {
    /// Generated text; `None` when the provider returned no text at all
    pub content: Option<String>,
    /// Token usage metrics
    pub usage: TokenUsage,
    /// Response timing
    pub timing: ResponseTiming,
    /// Provider and model info
    pub metadata: ResponseMetadata,
}

/// Token usage metrics
#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    /// Input tokens (prompt)
    pub input_tokens: u32,
    /// Output tokens (response)
    pub output_tokens: u32,
}

impl TokenUsage {
    /// Total tokens used (input + output)
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// Response timing metrics
#[derive(Debug, Clone, Default)]
pub struct ResponseTiming {
    /// Total response time in milliseconds (wall clock)
    pub total_ms: u64,
}

impl ResponseTiming {
    pub fn from_duration(duration: Duration) -> Self {
        Self {
            total_ms: duration.as_millis() as u64,
        }
    }
}

/// Response metadata
#[derive(Debug, Clone, Default)]
pub struct ResponseMetadata {
    /// Model used
    pub model: String,
    /// Provider name
    pub provider: String,
}

/// Shared LLM provider type for concurrent request handlers.
pub type SharedProvider = Arc<dyn LlmProvider>;

// =============================================================================
// LLM Provider Trait
// =============================================================================

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a prompt and return the raw model text.
    ///
    /// Transport, authentication and provider-side failures are returned as
    /// errors; they are not retried or swallowed at this layer.
    async fn generate(&self, prompt: &str) -> Result<LlmResponse>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;

    /// Check if the provider is reachable (reported by `GET /health`)
    async fn health_check(&self) -> Result<bool>;
}

/// Create a shared provider from configuration.
///
/// The concrete provider is wrapped in a `ResilientProvider` so every call is
/// bounded by `timeout_secs` and retried at most `max_retries` times.
pub fn create_provider(config: &LlmConfig) -> Result<SharedProvider> {
    let inner: SharedProvider = match config.provider.as_str() {
        "gemini" => Arc::new(GeminiProvider::new(config)?),
        "fake" => Arc::new(FakeProvider::with_sample_instructions()),
        other => {
            return Err(SousError::Config(format!(
                "Unknown provider: {}. Supported: gemini, fake",
                other
            )));
        }
    };

    Ok(Arc::new(ResilientProvider::new(
        inner,
        Duration::from_secs(config.timeout_secs),
        config.max_retries,
    )))
}
