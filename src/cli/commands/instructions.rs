//! Instructions Command
//!
//! Run the instruction pipeline once and print the resulting JSON array.
//!
//! Usage:
//!   souschef instructions "Pancakes"
//!   souschef instructions "Pancakes" --provider fake
//!   souschef instructions "Pancakes" --model gemini-2.5-flash

use std::path::Path;

use tokio::runtime::Runtime;

use crate::cli::CommandContext;
use crate::types::Result;

pub fn run(
    config_path: Option<&Path>,
    name: &str,
    provider: Option<String>,
    model: Option<String>,
) -> Result<()> {
    let mut ctx = CommandContext::load(config_path)?;

    if let Some(provider) = provider {
        ctx.config.llm.provider = provider;
    }
    if let Some(model) = model {
        ctx.config.llm.model = model;
    }

    let steps = generate(&ctx, name)?;
    println!("{}", serde_json::to_string_pretty(&steps)?);
    Ok(())
}

/// Steps for `name`; an unknown recipe yields `[]` without building a provider
fn generate(ctx: &CommandContext, name: &str) -> Result<Vec<String>> {
    if ctx.store.find(name).is_none() {
        eprintln!("No recipe named '{}'.", name);
        return Ok(Vec::new());
    }

    let service = ctx.service()?;
    let rt = Runtime::new()?;
    rt.block_on(service.instructions(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::RecipeStore;
    use crate::types::Recipe;
    use std::sync::Arc;

    fn context(provider: &str) -> CommandContext {
        let mut config = Config::default();
        config.llm.provider = provider.to_string();
        config.llm.api_key = None;
        CommandContext {
            config,
            store: Arc::new(RecipeStore::new(vec![
                Recipe::new("Pancakes", 4).with_ingredients(["flour", "egg", "milk"]),
            ])),
        }
    }

    #[test]
    fn test_unknown_recipe_skips_provider_setup() {
        // An unknown provider would fail in service(); the miss returns first.
        let ctx = context("not-a-provider");
        let steps = generate(&ctx, "Unknown Dish").unwrap();
        assert!(steps.is_empty());
    }

    #[test]
    fn test_known_recipe_runs_pipeline() {
        let ctx = context("fake");
        let steps = generate(&ctx, "pancakes").unwrap();
        assert_eq!(steps.len(), 3);
    }
}
