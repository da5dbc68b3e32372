use std::path::Path;

use crate::cli::CommandContext;
use crate::types::Result;

/// Print one recipe as JSON; an unknown name is an error
pub fn run(config_path: Option<&Path>, name: &str) -> Result<()> {
    let ctx = CommandContext::load(config_path)?;
    let recipe = ctx.recipe(name)?;
    println!("{}", serde_json::to_string_pretty(recipe)?);
    Ok(())
}
