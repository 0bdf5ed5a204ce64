//! Output formatting for CLI display
//!
//! This module provides utilities for formatting recipes in the
//! non-interactive commands. All informational decoration respects the
//! quiet flag so scripted callers get plain, parseable lines.

use crate::catalog::{Difficulty, Recipe};
use colored::Colorize;

/// Format one recipe as a summary line
///
/// Quiet mode prints `id<TAB>title` only; otherwise the line carries the
/// card data: time, difficulty, servings, calories, categories and the
/// two featured tags.
#[must_use]
pub fn recipe_summary(recipe: &Recipe, favorite: bool, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", recipe.id, recipe.title);
    }

    let marker = if favorite { "♥ " } else { "  " };
    let (featured, more) = recipe.featured_tags();
    let mut tags = featured.join(", ");
    if more > 0 {
        tags.push_str(&format!(" (+{more} more)"));
    }

    format!(
        "{}[{:>2}] {} · {} min · {} · serves {} · {} cal\n      {} · {} · {}",
        marker.red(),
        recipe.id,
        recipe.title.bold(),
        recipe.total_time,
        colorize_difficulty(recipe.difficulty),
        recipe.servings,
        recipe.nutrition_facts.calories,
        recipe.protein.cyan(),
        recipe.cooking_method,
        tags.dimmed(),
    )
}

/// Format the full detail view of a recipe for the show command
#[must_use]
pub fn recipe_detail(recipe: &Recipe, favorite: bool, quiet: bool) -> String {
    let mut out = String::new();

    if quiet {
        out.push_str(&format!("{}\t{}\n", recipe.id, recipe.title));
    } else {
        let marker = if favorite { " ♥" } else { "" };
        out.push_str(&format!("{}{}\n", recipe.title.bold(), marker.red()));
        out.push_str(&format!("{}\n\n", recipe.description));
        out.push_str(&format!(
            "{} min total ({} prep + {} cook) · {} · serves {}\n",
            recipe.total_time,
            recipe.prep_time,
            recipe.cook_time,
            colorize_difficulty(recipe.difficulty),
            recipe.servings,
        ));
        out.push_str(&format!(
            "{} · {}\n",
            recipe.protein.cyan(),
            recipe.cooking_method
        ));
        if !recipe.tags.is_empty() {
            out.push_str(&format!("Tags: {}\n", recipe.tags.join(", ").dimmed()));
        }
        out.push('\n');
    }

    out.push_str(&nutrition_line(recipe, quiet));
    out.push('\n');

    out.push_str(if quiet { "ingredients:\n" } else { "Ingredients:\n" });
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("  - {ingredient}\n"));
    }

    out.push_str(if quiet { "instructions:\n" } else { "Instructions:\n" });
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        out.push_str(&format!("  {}. {instruction}\n", step + 1));
    }

    out
}

/// Format the per-serving nutrition facts on one line
#[must_use]
pub fn nutrition_line(recipe: &Recipe, quiet: bool) -> String {
    let n = &recipe.nutrition_facts;
    let line = format!(
        "{} cal · {}g protein · {}g carbs · {}g fat · {}g fiber (per serving)",
        n.calories, n.protein, n.carbs, n.fat, n.fiber
    );

    if quiet {
        line
    } else {
        line.dimmed().to_string()
    }
}

/// Format a vocabulary value with its usage count
#[must_use]
pub fn category_with_count(value: &str, count: usize, quiet: bool) -> String {
    if quiet {
        value.to_string()
    } else {
        format!("  {value} ({count} recipe(s))")
    }
}

fn colorize_difficulty(difficulty: Difficulty) -> String {
    match difficulty {
        Difficulty::Easy => difficulty.as_str().green().to_string(),
        Difficulty::Medium => difficulty.as_str().yellow().to_string(),
        Difficulty::Hard => difficulty.as_str().red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_recipe;

    #[test]
    fn test_quiet_summary_is_plain() {
        let recipe = sample_recipe(3, "Grilled Thing");
        let line = recipe_summary(&recipe, true, true);
        assert_eq!(line, "3\tGrilled Thing");
    }

    #[test]
    fn test_summary_includes_card_data() {
        let recipe = sample_recipe(1, "Garlic Chicken Stir-Fry");
        let line = recipe_summary(&recipe, false, false);

        assert!(line.contains("Garlic Chicken Stir-Fry"));
        assert!(line.contains("15 min"));
        assert!(line.contains("serves 2"));
        assert!(line.contains("300 cal"));
        // Two featured tags plus the overflow marker for the third
        assert!(line.contains("Quick, Healthy"));
        assert!(line.contains("(+1 more)"));
    }

    #[test]
    fn test_detail_numbers_instructions() {
        let mut recipe = sample_recipe(2, "Steps");
        recipe.instructions = vec!["First.".to_string(), "Second.".to_string()];

        let detail = recipe_detail(&recipe, false, true);
        assert!(detail.contains("  1. First."));
        assert!(detail.contains("  2. Second."));
    }

    #[test]
    fn test_nutrition_line_quiet() {
        let recipe = sample_recipe(4, "Macro Dish");
        let line = nutrition_line(&recipe, true);
        assert_eq!(
            line,
            "300 cal · 30g protein · 10g carbs · 12g fat · 3g fiber (per serving)"
        );
    }

    #[test]
    fn test_category_with_count() {
        assert_eq!(category_with_count("Chicken", 2, true), "Chicken");
        assert_eq!(
            category_with_count("Chicken", 2, false),
            "  Chicken (2 recipe(s))"
        );
    }
}
