//! Recipe repository - the immutable, fully-loaded recipe collection
//!
//! The whole catalog is resident in memory for the lifetime of the session.
//! There is no insert/update/delete; the only mutation anywhere in the
//! program happens in the favorites set and the selection state.

use crate::QuickPrepError;
use crate::catalog::Recipe;
use std::collections::HashMap;
use std::path::Path;

/// The recipe dataset compiled into the binary
const EMBEDDED_DATASET: &str = include_str!("../../data/recipes.json");

/// Immutable ordered collection of recipes with O(1) lookup by id
///
/// The id index is built once at load; iteration always yields the
/// dataset's original order.
#[derive(Debug, Clone)]
pub struct Repository {
    recipes: Vec<Recipe>,
    by_id: HashMap<u32, usize>,
}

impl Repository {
    /// Build a repository from an ordered recipe sequence
    ///
    /// Later duplicates of an id shadow earlier ones in the lookup index;
    /// the dataset invariant is that ids are unique.
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let by_id = recipes
            .iter()
            .enumerate()
            .map(|(idx, recipe)| (recipe.id, idx))
            .collect();

        Self { recipes, by_id }
    }

    /// Load the dataset compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `QuickPrepError::DatasetError` if the embedded JSON is
    /// malformed.
    pub fn embedded() -> Result<Self, QuickPrepError> {
        Self::from_json(EMBEDDED_DATASET)
    }

    /// Load a dataset from a JSON file on disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, QuickPrepError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse a repository from a JSON array of recipes
    ///
    /// # Errors
    ///
    /// Returns `QuickPrepError::DatasetError` on malformed JSON.
    pub fn from_json(raw: &str) -> Result<Self, QuickPrepError> {
        let recipes: Vec<Recipe> = serde_json::from_str(raw)?;
        Ok(Self::new(recipes))
    }

    /// Look up a recipe by id
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.by_id.get(&id).map(|&idx| &self.recipes[idx])
    }

    /// All recipes in dataset order
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// All recipes as a slice, in dataset order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Distinct protein values in first-appearance order
    ///
    /// This is the closed vocabulary the filter panel offers; the filter
    /// engine itself accepts any string.
    #[must_use]
    pub fn proteins(&self) -> Vec<&str> {
        Self::distinct(self.recipes.iter().map(|r| r.protein.as_str()))
    }

    /// Distinct cooking-method values in first-appearance order
    #[must_use]
    pub fn cooking_methods(&self) -> Vec<&str> {
        Self::distinct(self.recipes.iter().map(|r| r.cooking_method.as_str()))
    }

    fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
        let mut seen = Vec::new();
        for value in values {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        seen
    }
}
