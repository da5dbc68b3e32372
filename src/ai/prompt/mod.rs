//! Instruction Prompt Builder
//!
//! Builds the instruction-generation prompt for a recipe.
//!
//! The prompt is line-oriented and deterministic. It always carries four
//! constraints the output parser depends on:
//!
//! 1. **Shape**: return ONLY a JSON array of strings
//! 2. **Granularity**: one array element per step
//! 3. **Order**: steps ordered first to last
//! 4. **Noise**: no numbering, titles, commentary or code fences

use crate::types::Recipe;

/// Preamble lines preceding the recipe details
const PREAMBLE: [&str; 6] = [
    "You are an expert chef.",
    "Create clear, complete cooking instructions for the recipe below.",
    "Return ONLY a valid JSON array of strings.",
    "Each array element must be one step.",
    "Do not include numbers, titles, commentary, code fences, or any text outside the JSON array.",
    "Order steps from first to last.",
];

/// Placeholder ingredient line for recipes without ingredients
const NO_INGREDIENTS: &str = "(none provided)";

/// Stateless builder for instruction-generation prompts
#[derive(Debug, Clone, Copy, Default)]
pub struct InstructionPromptBuilder;

impl InstructionPromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the prompt for a recipe
    pub fn build(&self, recipe: &Recipe) -> String {
        let mut prompt = String::new();

        for line in PREAMBLE {
            prompt.push_str(line);
            prompt.push('\n');
        }
        prompt.push('\n');

        prompt.push_str(&format!("Recipe title: {}\n", recipe.title));
        prompt.push_str(&format!("Yield: {}\n", recipe.yield_count));
        prompt.push_str("Ingredients:\n");

        if recipe.ingredients.is_empty() {
            prompt.push_str(&format!("- {}\n", NO_INGREDIENTS));
        } else {
            for ingredient in &recipe.ingredients {
                prompt.push_str(&format!("- {}\n", ingredient));
            }
        }

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pancakes() -> Recipe {
        Recipe::new("Pancakes", 4).with_ingredients(["flour", "egg", "milk"])
    }

    #[test]
    fn test_prompt_embeds_recipe_details() {
        let prompt = InstructionPromptBuilder::new().build(&pancakes());

        assert!(prompt.contains("Recipe title: Pancakes\n"));
        assert!(prompt.contains("Yield: 4\n"));
        assert!(prompt.contains("- flour\n"));
        assert!(prompt.contains("- egg\n"));
        assert!(prompt.contains("- milk\n"));
        assert!(prompt.contains("Return ONLY a valid JSON array of strings."));
    }

    #[test]
    fn test_prompt_carries_output_constraints() {
        let prompt = InstructionPromptBuilder::new().build(&pancakes());

        assert!(prompt.contains("Each array element must be one step."));
        assert!(prompt.contains("Order steps from first to last."));
        assert!(prompt.contains("numbers, titles, commentary, code fences"));
    }

    #[test]
    fn test_ingredients_listed_in_order_after_header() {
        let prompt = InstructionPromptBuilder::new().build(&pancakes());
        let tail = prompt.split("Ingredients:\n").nth(1).unwrap();
        assert_eq!(tail, "- flour\n- egg\n- milk\n");
    }

    #[test]
    fn test_empty_ingredients_placeholder() {
        let prompt = InstructionPromptBuilder::new().build(&Recipe::new("Water", 1));
        assert!(prompt.ends_with("Ingredients:\n- (none provided)\n"));
    }

    #[test]
    fn test_empty_title_is_blank_not_null() {
        let recipe: Recipe = serde_json::from_str(r#"{"yield": 3}"#).unwrap();
        let prompt = InstructionPromptBuilder::new().build(&recipe);
        assert!(prompt.contains("Recipe title: \n"));
        assert!(!prompt.contains("null"));
    }

    #[test]
    fn test_deterministic() {
        let builder = InstructionPromptBuilder::new();
        assert_eq!(builder.build(&pancakes()), builder.build(&pancakes()));
    }
}
