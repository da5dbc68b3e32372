//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Network and provider constants
pub mod network {
    /// Default timeout for a single LLM request (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

    /// Default connection timeout for the HTTP client (seconds)
    pub const CONNECTION_TIMEOUT_SECS: u64 = 10;

    /// Default HTTP server bind address
    pub const DEFAULT_HOST: &str = "127.0.0.1";

    /// Default HTTP server port
    pub const DEFAULT_PORT: u16 = 8080;
}

/// Retry constants for generation requests
pub mod retry {
    /// Default number of retries after the first attempt
    pub const DEFAULT_MAX_RETRIES: usize = 2;

    /// Upper bound accepted by config validation
    pub const MAX_RETRIES_LIMIT: usize = 5;

    /// Base delay for exponential backoff (milliseconds)
    pub const BASE_DELAY_MS: u64 = 500;

    /// Maximum delay between retries (seconds)
    pub const MAX_DELAY_SECS: u64 = 8;

    /// Backoff multiplier
    pub const BACKOFF_FACTOR: f32 = 2.0;
}

/// LLM generation defaults
pub mod llm {
    /// Default provider
    pub const DEFAULT_PROVIDER: &str = "gemini";

    /// Default Gemini model
    pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

    /// Default sampling temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.2;

    /// Default maximum output tokens
    pub const DEFAULT_MAX_TOKENS: u32 = 2048;

    /// Characters of a raw response kept in log previews
    pub const LOG_PREVIEW_CHARS: usize = 500;
}
