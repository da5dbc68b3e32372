//! Config Command
//!
//! Inspect SousChef configuration.
//!
//! Usage:
//!   souschef config show [-f json|toml]
//!   souschef config path

use std::path::Path;

use crate::config::ConfigLoader;
use crate::types::Result;

/// Show the merged effective configuration (API key omitted)
pub fn show(config_path: Option<&Path>, format: &str) -> Result<()> {
    let config = ConfigLoader::load(config_path)?;
    println!("{}", ConfigLoader::render(&config, format == "json")?);
    Ok(())
}

/// Show configuration paths
pub fn path(config_path: Option<&Path>) -> Result<()> {
    println!("Configuration paths:");
    println!();

    if let Some(global) = ConfigLoader::global_config_path() {
        println!("  Global:  {} {}", marker(&global), global.display());
    } else {
        println!("  Global:  (not available)");
    }

    let project = ConfigLoader::project_config_path();
    println!("  Project: {} {}", marker(&project), project.display());

    if let Some(explicit) = config_path {
        println!("  --config: {} {}", marker(explicit), explicit.display());
    }
    Ok(())
}

fn marker(path: &Path) -> &'static str {
    if path.exists() { "✓" } else { "✗" }
}
