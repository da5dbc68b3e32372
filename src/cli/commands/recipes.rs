//! Recipes Command
//!
//! List the loaded recipes.

use std::path::Path;

use crate::cli::CommandContext;
use crate::types::Result;

pub fn run(config_path: Option<&Path>, format: &str) -> Result<()> {
    let ctx = CommandContext::load(config_path)?;
    let recipes = ctx.store.all();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(recipes)?);
        return Ok(());
    }

    if recipes.is_empty() {
        println!("No recipes loaded.");
        return Ok(());
    }

    println!("Recipes ({})", recipes.len());
    println!("══════════════════════════════════════");
    for recipe in recipes {
        println!(
            "  {:<32} serves {:>3}  ({} ingredients)",
            recipe.title,
            recipe.yield_count,
            recipe.ingredients.len()
        );
    }
    Ok(())
}
