//! Recipe Store
//!
//! Read-only, in-memory recipe collection loaded once at startup.
//!
//! Lookups go through a case-normalized index built at load time. The index
//! keeps the position of the first recipe for each normalized title, so
//! duplicate titles resolve to the earliest entry in the source.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::RecipesConfig;
use crate::types::{Recipe, Result, SousError, normalize_title};

/// Recipe set compiled into the binary
const BUNDLED_RECIPES: &str = include_str!("../../data/recipes.json");

/// Name reported for the bundled source in errors and logs
const BUNDLED_SOURCE: &str = "bundled recipes.json";

/// Shared store for concurrent readers
pub type SharedRecipeStore = Arc<RecipeStore>;

#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    index: HashMap<String, usize>,
}

impl RecipeStore {
    /// Build a store from recipes in source order
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut index = HashMap::with_capacity(recipes.len());
        for (position, recipe) in recipes.iter().enumerate() {
            index.entry(recipe.lookup_key()).or_insert(position);
        }
        Self { recipes, index }
    }

    /// Load according to configuration: the configured file, or the bundled set
    pub fn load(config: &RecipesConfig) -> Result<Self> {
        match &config.path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    /// Load the recipe set compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_RECIPES, BUNDLED_SOURCE)
    }

    /// Load recipes from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let source_name = path.display().to_string();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SousError::recipe_load(&source_name, e))?;
        Self::parse(&content, &source_name)
    }

    /// Parse recipes from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse(json, "inline JSON")
    }

    fn parse(json: &str, source_name: &str) -> Result<Self> {
        info!("Loading recipes from {}", source_name);
        let recipes: Vec<Recipe> =
            serde_json::from_str(json).map_err(|e| SousError::recipe_load(source_name, e))?;
        let store = Self::new(recipes);
        debug!(
            "Loaded {} recipes ({} distinct titles)",
            store.len(),
            store.index.len()
        );
        Ok(store)
    }

    /// All recipes in source order
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Case-insensitive exact title match; first match wins
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.index
            .get(&normalize_title(name))
            .and_then(|&position| self.recipes.get(position))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_store() -> RecipeStore {
        RecipeStore::new(vec![
            Recipe::new("Pancakes", 4).with_ingredients(["flour", "egg", "milk"]),
            Recipe::new("Guacamole", 2).with_ingredients(["avocado"]),
            Recipe::new("pancakes", 12),
        ])
    }

    #[test]
    fn test_find_every_recipe_by_title_and_case_variants() {
        let store = RecipeStore::bundled().unwrap();
        assert!(!store.is_empty());

        for recipe in store.all() {
            assert_eq!(store.find(&recipe.title), Some(recipe));
            assert_eq!(store.find(&recipe.title.to_uppercase()), Some(recipe));
            assert_eq!(store.find(&recipe.title.to_lowercase()), Some(recipe));
        }
    }

    #[test]
    fn test_find_unknown_is_none() {
        let store = sample_store();
        assert!(store.find("Unknown Dish").is_none());
        assert!(store.find("").is_none());
        assert!(store.find("Pancake").is_none());
    }

    #[test]
    fn test_duplicate_titles_first_match_wins() {
        let store = sample_store();
        assert_eq!(store.len(), 3);
        assert_eq!(store.find("PANCAKES").unwrap().yield_count, 4);
        assert_eq!(store.all()[2].yield_count, 12);
    }

    #[test]
    fn test_all_preserves_source_order() {
        let store = sample_store();
        let titles: Vec<&str> = store.all().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Pancakes", "Guacamole", "pancakes"]);
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title": "Toast", "yield": 1, "ingredients": ["bread"]}}]"#
        )
        .unwrap();

        let store = RecipeStore::load(&RecipesConfig {
            path: Some(file.path().to_path_buf()),
        })
        .unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.find("toast").unwrap().ingredients, vec!["bread"]);
    }

    #[test]
    fn test_load_failures_are_errors() {
        let missing = RecipeStore::from_path(Path::new("/nonexistent/recipes.json"));
        assert!(matches!(missing, Err(SousError::RecipeLoad { .. })));

        let malformed = RecipeStore::from_json_str(r#"{"title": "not an array"}"#);
        assert!(matches!(malformed, Err(SousError::RecipeLoad { .. })));
    }
}
