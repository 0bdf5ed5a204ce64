//! Testing utilities for quickprep
//!
//! This module provides fixture builders for writing tests against the
//! catalog core without going through the embedded dataset.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Difficulty, NutritionFacts, Recipe, Repository};

/// Build a minimal recipe with the given id and title
///
/// Defaults to a Chicken / Grilling dish; override fields as needed:
///
/// ```ignore
/// let recipe = Recipe { protein: "Fish".into(), ..sample_recipe(2, "Cod") };
/// ```
#[must_use]
pub fn sample_recipe(id: u32, title: &str) -> Recipe {
    Recipe {
        id,
        title: title.to_string(),
        description: "A test dish".to_string(),
        prep_time: 5,
        cook_time: 10,
        total_time: 15,
        servings: 2,
        difficulty: Difficulty::Easy,
        protein: "Chicken".to_string(),
        cooking_method: "Grilling".to_string(),
        image: "images/test.jpg".to_string(),
        ingredients: vec!["1 thing".to_string()],
        instructions: vec!["Cook it.".to_string()],
        nutrition_facts: NutritionFacts {
            calories: 300,
            protein: 30,
            carbs: 10,
            fat: 12,
            fiber: 3,
        },
        tags: vec![
            "Quick".to_string(),
            "Healthy".to_string(),
            "Weeknight".to_string(),
        ],
    }
}

/// Build a small repository spanning several proteins and methods
///
/// Layout: ids 1-4 in repository order, so order-preservation tests can
/// assert on relative positions.
#[must_use]
pub fn test_repository() -> Repository {
    Repository::new(vec![
        Recipe {
            description: "Strips of chicken in a garlic sauce".to_string(),
            cooking_method: "Stir-Frying".to_string(),
            ..sample_recipe(1, "Garlic Chicken Stir-Fry")
        },
        Recipe {
            protein: "Fish".to_string(),
            cooking_method: "Pan-Searing".to_string(),
            ..sample_recipe(2, "Pan-Seared Salmon")
        },
        Recipe {
            protein: "Beef".to_string(),
            description: "Charred sirloin over greens".to_string(),
            ..sample_recipe(3, "Grilled Steak Salad")
        },
        sample_recipe(4, "Grilled Chicken Caprese"),
    ])
}
