//! CLI Common Utilities
//!
//! Shared initialization for command handlers: configuration, the recipe
//! store and the instruction service.

use std::path::Path;
use std::sync::Arc;

use crate::ai::create_provider;
use crate::config::{Config, ConfigLoader};
use crate::service::RecipeService;
use crate::store::{RecipeStore, SharedRecipeStore};
use crate::types::{Recipe, Result, SousError};

/// Command execution context
///
/// Created via `CommandContext::load()`. Commands may adjust `config` (for
/// flag overrides) before calling `service()`.
#[derive(Clone)]
pub struct CommandContext {
    /// Merged and validated configuration
    pub config: Config,
    /// Recipes loaded at startup
    pub store: SharedRecipeStore,
}

impl CommandContext {
    /// Load configuration and recipes.
    ///
    /// A recipe source that cannot be read or parsed is fatal.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = ConfigLoader::load(config_path)?;
        let store = Arc::new(RecipeStore::load(&config.recipes)?);
        Ok(Self { config, store })
    }

    /// Look up a recipe, treating a miss as an error
    pub fn recipe(&self, name: &str) -> Result<&Recipe> {
        self.store
            .find(name)
            .ok_or_else(|| SousError::RecipeNotFound(name.to_string()))
    }

    /// Build the instruction service from the current configuration
    pub fn service(&self) -> Result<RecipeService> {
        self.config.validate()?;
        let provider = create_provider(&self.config.llm)?;
        Ok(RecipeService::new(self.store.clone(), provider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> CommandContext {
        CommandContext {
            config: Config::default(),
            store: Arc::new(RecipeStore::new(vec![Recipe::new("Pancakes", 4)])),
        }
    }

    #[test]
    fn test_recipe_lookup() {
        let ctx = context();
        assert_eq!(ctx.recipe("PANCAKES").unwrap().yield_count, 4);

        let err = ctx.recipe("Waffles").unwrap_err();
        assert!(matches!(err, SousError::RecipeNotFound(ref name) if name == "Waffles"));
    }

    #[test]
    fn test_service_uses_configured_provider() {
        let mut ctx = context();
        ctx.config.llm.provider = "fake".to_string();
        let service = ctx.service().unwrap();
        assert_eq!(service.provider_name(), "fake");
    }
}
