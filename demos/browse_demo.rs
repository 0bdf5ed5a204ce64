//! Demo showing the browse session API
//!
//! This example loads the embedded recipe catalog and walks through the
//! same intents the interactive browser relays: search, category filters,
//! favorites and the detail selection.

use quickprep::catalog::{BrowseSession, Repository};

fn main() {
    println!("=== QuickPrep Browse Session Demo ===\n");

    let repository = Repository::embedded().expect("Failed to load embedded dataset");

    println!(
        "Loaded {} recipes, {} proteins, {} cooking methods\n",
        repository.len(),
        repository.proteins().len(),
        repository.cooking_methods().len()
    );

    println!("Catalog:");
    for recipe in repository.iter() {
        println!(
            "  [{:>2}] {} ({} min, {}, {})",
            recipe.id, recipe.title, recipe.total_time, recipe.difficulty, recipe.protein
        );
    }

    let mut session = BrowseSession::new(repository);

    println!("\n--- Searching for \"chicken\" ---");
    session.set_query("chicken");
    for recipe in session.visible() {
        println!("  {} ({})", recipe.title, recipe.cooking_method);
    }

    println!("\n--- Narrowing to Stir-Frying ---");
    session.set_method_filter(Some("Stir-Frying".into()));
    for recipe in session.visible() {
        println!("  {}", recipe.title);
    }

    println!("\n--- Opening the first match ---");
    let first_match = session.visible().first().map(|r| r.id);
    if let Some(first) = first_match {
        session.select_recipe(first);
        session.toggle_favorite(first);

        if let Some(recipe) = session.open_recipe() {
            println!("  {} — {}", recipe.title, recipe.description);
            println!("  Ingredients:");
            for ingredient in &recipe.ingredients {
                println!("    - {ingredient}");
            }
            println!("  Favorited: {}", session.is_favorite(recipe.id));
        }

        session.close_selection();
    }

    println!("\n--- Clearing filters ---");
    session.set_query("");
    session.set_method_filter(None);
    println!(
        "  {} recipes visible, {} favorited",
        session.visible().len(),
        session.favorite_count()
    );
}
