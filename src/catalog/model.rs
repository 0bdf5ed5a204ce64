//! Data model for the recipe catalog
//!
//! These are pure data structures with no business logic. Direct field
//! access is used for comparisons and filtering (idiomatic Rust style).
//! The serde names match the dataset's JSON keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One dish in the catalog
///
/// Immutable for the lifetime of a session; `id` is the join key used by
/// the favorites set and the selection state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier, stable for the session
    pub id: u32,

    /// Display title, also searched by the filter engine
    pub title: String,

    /// Short display description, also searched by the filter engine
    pub description: String,

    /// Preparation time in minutes
    pub prep_time: u32,

    /// Cooking time in minutes
    pub cook_time: u32,

    /// Total time in minutes, informational display data
    pub total_time: u32,

    /// Number of servings the recipe yields
    pub servings: u32,

    /// Difficulty rating
    pub difficulty: Difficulty,

    /// Protein category, exact-match filter key (e.g. "Chicken")
    pub protein: String,

    /// Cooking method category, exact-match filter key (e.g. "Grilling")
    pub cooking_method: String,

    /// Opaque image reference, not interpreted by the core
    pub image: String,

    /// Ingredients in display order, no dedup
    pub ingredients: Vec<String>,

    /// Instructions in step order; step N depends on step N-1
    pub instructions: Vec<String>,

    /// Per-serving nutrition values
    pub nutrition_facts: NutritionFacts,

    /// Free-form tags; the first two are featured in summary views
    pub tags: Vec<String>,
}

/// Difficulty rating, a closed set with no case variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// String form matching the dataset vocabulary
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-serving nutrition values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: u32,
    /// Grams of protein
    pub protein: u32,
    /// Grams of carbohydrates
    pub carbs: u32,
    /// Grams of fat
    pub fat: u32,
    /// Grams of fiber
    pub fiber: u32,
}

impl Recipe {
    /// Featured tags for summary views: the first two, plus how many more exist
    #[must_use]
    pub fn featured_tags(&self) -> (&[String], usize) {
        let shown = self.tags.len().min(2);
        (&self.tags[..shown], self.tags.len() - shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_recipe;

    #[test]
    fn test_deserialize_from_camel_case_json() {
        let json = r#"{
            "id": 7,
            "title": "Garlic Chicken Stir-Fry",
            "description": "Tender chicken strips",
            "prepTime": 7,
            "cookTime": 8,
            "totalTime": 15,
            "servings": 2,
            "difficulty": "Easy",
            "protein": "Chicken",
            "cookingMethod": "Stir-Frying",
            "image": "images/x.jpg",
            "ingredients": ["300g chicken"],
            "instructions": ["Stir-fry."],
            "nutritionFacts": {"calories": 320, "protein": 38, "carbs": 14, "fat": 12, "fiber": 4},
            "tags": ["High Protein"]
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, 7);
        assert_eq!(recipe.cooking_method, "Stir-Frying");
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.nutrition_facts.calories, 320);
    }

    #[test]
    fn test_difficulty_rejects_case_variants() {
        let result: Result<Difficulty, _> = serde_json::from_str("\"easy\"");
        assert!(result.is_err());

        let ok: Difficulty = serde_json::from_str("\"Hard\"").unwrap();
        assert_eq!(ok, Difficulty::Hard);
    }

    #[test]
    fn test_featured_tags() {
        let recipe = sample_recipe(1, "Test");
        let (shown, more) = recipe.featured_tags();
        assert_eq!(shown, &["Quick".to_string(), "Healthy".to_string()][..]);
        assert_eq!(more, 1);

        let mut short = sample_recipe(2, "Short");
        short.tags.truncate(1);
        let (shown, more) = short.featured_tags();
        assert_eq!(shown.len(), 1);
        assert_eq!(more, 0);
    }
}
