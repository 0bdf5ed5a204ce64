//! Integration tests for quickprep
//!
//! These tests drive the public API end-to-end: loading the embedded
//! catalog, running complete browse-session workflows, and loading a
//! custom dataset from disk.

use quickprep::catalog::{BrowseSession, FilterState, Repository, Selection, visible_recipes};
use std::fs;

/// Helper to build a session over the embedded catalog
fn embedded_session() -> BrowseSession {
    BrowseSession::new(Repository::embedded().expect("embedded dataset must parse"))
}

#[test]
fn test_empty_filter_returns_whole_catalog_in_order() {
    let repo = Repository::embedded().unwrap();
    let filter = FilterState::new();

    let visible = visible_recipes(&repo, &filter);

    let all_ids: Vec<u32> = repo.iter().map(|r| r.id).collect();
    let visible_ids: Vec<u32> = visible.iter().map(|r| r.id).collect();
    assert_eq!(visible_ids, all_ids);
}

#[test]
fn test_search_is_case_insensitive_on_real_data() {
    let mut session = embedded_session();

    session.set_query("chicken");
    let lower: Vec<u32> = session.visible().iter().map(|r| r.id).collect();
    assert!(
        session
            .visible()
            .iter()
            .any(|r| r.title == "Garlic Chicken Stir-Fry")
    );

    session.set_query("CHICKEN");
    let upper: Vec<u32> = session.visible().iter().map(|r| r.id).collect();
    assert_eq!(lower, upper);

    // The stir-fry mentions neither beef in title nor description
    session.set_query("beef");
    assert!(
        !session
            .visible()
            .iter()
            .any(|r| r.title == "Garlic Chicken Stir-Fry")
    );
}

#[test]
fn test_protein_filter_returns_exactly_matching_recipes() {
    let mut session = embedded_session();

    session.set_protein_filter(Some("Fish".to_string()));
    let visible = session.visible();

    assert!(!visible.is_empty());
    assert!(visible.iter().all(|r| r.protein == "Fish"));

    // Nothing from other categories leaks in
    let fish_count = session
        .repository()
        .iter()
        .filter(|r| r.protein == "Fish")
        .count();
    assert_eq!(visible.len(), fish_count);
}

#[test]
fn test_combined_filters_are_anded() {
    let mut session = embedded_session();

    session.set_protein_filter(Some("Chicken".to_string()));
    session.set_method_filter(Some("Stir-Frying".to_string()));

    for recipe in session.visible() {
        assert_eq!(recipe.protein, "Chicken");
        assert_eq!(recipe.cooking_method, "Stir-Frying");
    }

    session.set_query("garlic");
    let visible = session.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Garlic Chicken Stir-Fry");
}

#[test]
fn test_no_match_query_yields_empty_sequence() {
    let mut session = embedded_session();

    session.set_query("nonexistent-zzz");
    assert!(session.visible().is_empty());

    // And recovers cleanly once the query is cleared
    session.set_query("");
    assert_eq!(session.visible().len(), session.repository().len());
}

#[test]
fn test_filtering_preserves_relative_order() {
    let session = {
        let mut s = embedded_session();
        s.set_method_filter(Some("Grilling".to_string()));
        s
    };

    let positions: Vec<usize> = session
        .visible()
        .iter()
        .map(|r| {
            session
                .repository()
                .iter()
                .position(|x| x.id == r.id)
                .unwrap()
        })
        .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_favorite_toggle_involution() {
    let mut session = embedded_session();
    let id = session.repository().iter().next().unwrap().id;

    let before = session.is_favorite(id);
    session.toggle_favorite(id);
    session.toggle_favorite(id);
    assert_eq!(session.is_favorite(id), before);
}

#[test]
fn test_selection_replaces_without_closing() {
    let mut session = embedded_session();

    session.select_recipe(1);
    session.select_recipe(2);
    assert_eq!(session.selection(), Selection::Open(2));

    session.close_selection();
    assert_eq!(session.selection(), Selection::Closed);
}

#[test]
fn test_full_browse_workflow() {
    let mut session = embedded_session();

    // User types a query, narrows by category, opens a recipe...
    session.set_query("salmon");
    session.set_protein_filter(Some("Fish".to_string()));
    let visible = session.visible();
    assert!(!visible.is_empty());
    let chosen = visible[0].id;

    session.select_recipe(chosen);
    let open = session.open_recipe().expect("selected recipe must resolve");
    assert_eq!(open.id, chosen);
    assert!(!open.ingredients.is_empty());
    assert!(!open.instructions.is_empty());

    // ...favorites it from the detail view (selection unaffected)...
    session.toggle_favorite(chosen);
    assert_eq!(session.selection(), Selection::Open(chosen));
    assert!(session.is_favorite(chosen));

    // ...dismisses the overlay and clears the filters.
    session.close_selection();
    session.set_query("");
    session.set_protein_filter(None);

    assert_eq!(session.visible().len(), session.repository().len());
    assert!(session.is_favorite(chosen));
}

#[test]
fn test_selecting_unknown_id_never_crashes_rendering() {
    let mut session = embedded_session();

    session.select_recipe(u32::MAX);
    assert_eq!(session.selection(), Selection::Open(u32::MAX));

    // Lookup returns nothing; the renderer draws nothing
    assert!(session.open_recipe().is_none());

    session.close_selection();
    assert_eq!(session.selection(), Selection::Closed);
}

#[test]
fn test_load_custom_dataset_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipes.json");

    fs::write(
        &path,
        r#"[{
            "id": 100,
            "title": "Custom Dish",
            "description": "From a user dataset",
            "prepTime": 5,
            "cookTime": 5,
            "totalTime": 10,
            "servings": 1,
            "difficulty": "Easy",
            "protein": "Tofu",
            "cookingMethod": "Steaming",
            "image": "custom.jpg",
            "ingredients": ["tofu"],
            "instructions": ["steam"],
            "nutritionFacts": {"calories": 120, "protein": 12, "carbs": 4, "fat": 6, "fiber": 1},
            "tags": ["Vegan"]
        }]"#,
    )
    .unwrap();

    let repo = Repository::from_file(&path).unwrap();
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.get(100).map(|r| r.title.as_str()), Some("Custom Dish"));
    assert_eq!(repo.proteins(), vec!["Tofu"]);
}

#[test]
fn test_load_missing_dataset_is_io_error() {
    let result = Repository::from_file(std::path::Path::new("/nonexistent/recipes.json"));
    assert!(matches!(result, Err(quickprep::QuickPrepError::IoError(_))));
}
