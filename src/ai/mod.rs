//! AI Integration Layer
//!
//! Prompt construction, generation providers, and recovery of instruction
//! steps from raw model text.

pub mod prompt;
pub mod provider;
pub mod timeout;
pub mod validation;

pub use prompt::InstructionPromptBuilder;
pub use provider::{
    FakeProvider, GeminiProvider, LlmProvider, LlmResponse, ResilientProvider, ResponseMetadata,
    ResponseTiming, SharedProvider, TokenUsage, create_provider,
};
pub use timeout::with_timeout;
pub use validation::{parse_steps, sanitize};
