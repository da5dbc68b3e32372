//! Recipe Instruction Service
//!
//! Orchestrates lookup, prompt construction, generation and parsing for a
//! single request. Holds no per-request state; one instance is shared by all
//! handlers.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::ai::{InstructionPromptBuilder, SharedProvider, parse_steps};
use crate::constants::llm::LOG_PREVIEW_CHARS;
use crate::store::SharedRecipeStore;
use crate::types::{Recipe, Result};

pub type SharedRecipeService = Arc<RecipeService>;

pub struct RecipeService {
    store: SharedRecipeStore,
    provider: SharedProvider,
    prompt_builder: InstructionPromptBuilder,
}

impl RecipeService {
    pub fn new(store: SharedRecipeStore, provider: SharedProvider) -> Self {
        Self {
            store,
            provider,
            prompt_builder: InstructionPromptBuilder::new(),
        }
    }

    /// All recipes in source order
    pub fn recipes(&self) -> &[Recipe] {
        self.store.all()
    }

    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.store.find(name)
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn provider_model(&self) -> &str {
        self.provider.model()
    }

    /// Whether the generation provider answers its health check.
    ///
    /// A failed check counts as unavailable.
    pub async fn provider_available(&self) -> bool {
        match self.provider.health_check().await {
            Ok(available) => available,
            Err(e) => {
                warn!("Health check for {} failed: {}", self.provider.name(), e);
                false
            }
        }
    }

    /// Generate ordered instruction steps for the named recipe.
    ///
    /// An unknown name yields an empty list and the provider is not called.
    /// Unusable model output also yields an empty list. Provider failures,
    /// including timeouts, are returned as errors.
    pub async fn instructions(&self, name: &str) -> Result<Vec<String>> {
        let Some(recipe) = self.store.find(name) else {
            debug!("No recipe named {:?}, skipping generation", name);
            return Ok(Vec::new());
        };

        let prompt = self.prompt_builder.build(recipe);
        debug!(
            "Generating instructions for {:?} via {}/{} ({} prompt chars)",
            recipe.title,
            self.provider.name(),
            self.provider.model(),
            prompt.len()
        );

        let response = self.provider.generate(&prompt).await?;
        let raw = response.content.as_deref();
        info!(
            "Raw instructions for {:?} ({}ms, {} tokens): {}",
            recipe.title,
            response.timing.total_ms,
            response.usage.total(),
            preview(raw.unwrap_or("<none>"))
        );

        let steps = parse_steps(raw);
        debug!("Parsed {} steps for {:?}", steps.len(), recipe.title);
        Ok(steps)
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() <= LOG_PREVIEW_CHARS {
        return text.to_string();
    }
    let truncated: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
    format!("{}...", truncated)
}
