//! Recipe type definitions

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A recipe as loaded from the static recipe source.
///
/// Missing `title`, `yield`, `ingredients` or `instructions` fields fall back to
/// empty values so a sparse source entry still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    #[serde(default)]
    pub title: String,
    /// Number of servings
    #[serde(rename = "yield", default)]
    pub yield_count: i32,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl Recipe {
    pub fn new(title: impl Into<String>, yield_count: i32) -> Self {
        Self {
            title: title.into(),
            yield_count,
            ..Self::default()
        }
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Case-normalized lookup key
    pub fn lookup_key(&self) -> String {
        normalize_title(&self.title)
    }
}

/// Normalize a title or requested name for case-insensitive matching.
///
/// Folds one character at a time (simple case mapping, upper then lower), so
/// the key has as many characters as the input. Context rules such as the
/// word-final sigma and multi-character expansions like `İ` -> `i̇` do not
/// apply: `"ΟΔΟΣ"` matches `"οδοσ"` and `"İ"` matches `"i"`.
pub fn normalize_title(name: &str) -> String {
    name.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    let upper = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    };
    upper.to_lowercase().next().unwrap_or(upper)
}
