//! Catalog module - recipe data and browse logic
//!
//! This module holds the data model and business logic for browsing the
//! recipe catalog. It is designed to be UI-agnostic: the CLI commands and
//! the ratatui frontend both drive the same `BrowseSession`.
//!
//! # Architecture
//!
//! - `model`: Core data types (Recipe, Difficulty, NutritionFacts)
//! - `repository`: The immutable, fully-loaded recipe collection
//! - `filter`: Pure filtering over the repository
//! - `favorites`: Session-scoped favorite membership set
//! - `selection`: Which recipe (if any) is open in the detail view
//! - `session`: Facade tying the pieces together for a frontend

pub mod favorites;
pub mod filter;
pub mod model;
pub mod repository;
pub mod selection;
pub mod session;

pub use favorites::Favorites;
pub use filter::{FilterState, visible_recipes};
pub use model::{Difficulty, NutritionFacts, Recipe};
pub use repository::Repository;
pub use selection::Selection;
pub use session::BrowseSession;
