//! SousChef - Recipe Instruction Service
//!
//! Serves a fixed recipe collection over HTTP and generates step-by-step
//! cooking instructions for any recipe on demand using a generative model.
//!
//! ## Pipeline
//!
//! lookup -> prompt -> generate -> sanitize -> parse
//!
//! ## Quick Start
//!
//! ```ignore
//! use souschef::{ConfigLoader, RecipeService, RecipeStore, create_provider};
//!
//! let config = ConfigLoader::load(None)?;
//! let store = Arc::new(RecipeStore::load(&config.recipes)?);
//! let service = RecipeService::new(store, create_provider(&config.llm)?);
//! let steps = service.instructions("Pancakes").await?;
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: prompt builder, generation providers, output sanitizer
//! - [`store`]: in-memory recipe collection
//! - [`service`]: instruction orchestration
//! - [`server`]: axum HTTP surface
//! - [`config`]: layered configuration

pub mod ai;
pub mod cli;
pub mod config;
pub mod constants;
pub mod server;
pub mod service;
pub mod store;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use config::{Config, ConfigLoader, LlmConfig, RecipesConfig, ServerConfig};
pub use types::{ErrorCategory, LlmError, Recipe, Result, SousError};

pub use service::{RecipeService, SharedRecipeService};
pub use store::{RecipeStore, SharedRecipeStore};

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{
    FakeProvider, GeminiProvider, InstructionPromptBuilder, LlmProvider, LlmResponse,
    ResilientProvider, SharedProvider, create_provider, parse_steps, sanitize, with_timeout,
};
