//! Filtering over the recipe repository
//!
//! `FilterState` is the live filter for a browse session: a free-text
//! query plus two optional exact-match category filters. `visible_recipes`
//! is the pure function that applies it; it takes everything as parameters
//! and has no hidden state, so it is safe to recompute on every keystroke
//! and callable from any thread.

use crate::catalog::{Recipe, Repository};

/// Live filter state for a browse session
///
/// All three dimensions are independent; `None` / empty means "no filter"
/// for that dimension. Defaults to fully open at session start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query matched against title and description
    pub query: String,

    /// Exact protein category, or `None` for all proteins
    pub protein: Option<String>,

    /// Exact cooking-method category, or `None` for all methods
    pub method: Option<String>,
}

impl FilterState {
    /// Create a fully-open filter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the free-text query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Set or clear the protein filter
    pub fn set_protein(&mut self, protein: Option<String>) {
        self.protein = protein;
    }

    /// Set or clear the cooking-method filter
    pub fn set_method(&mut self, method: Option<String>) {
        self.method = method;
    }

    /// Toggle the protein filter: selecting the active value clears it
    ///
    /// Returns true if the filter is now set, false if it was cleared.
    pub fn toggle_protein(&mut self, protein: &str) -> bool {
        if self.protein.as_deref() == Some(protein) {
            self.protein = None;
            false
        } else {
            self.protein = Some(protein.to_string());
            true
        }
    }

    /// Toggle the cooking-method filter: selecting the active value clears it
    ///
    /// Returns true if the filter is now set, false if it was cleared.
    pub fn toggle_method(&mut self, method: &str) -> bool {
        if self.method.as_deref() == Some(method) {
            self.method = None;
            false
        } else {
            self.method = Some(method.to_string());
            true
        }
    }

    /// Check if no dimension is filtering (every recipe is visible)
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.query.is_empty() && self.protein.is_none() && self.method.is_none()
    }
}

/// Compute the recipes visible under the given filter state
///
/// A recipe survives iff it matches every dimension (logical AND). The
/// result preserves the repository's original relative order; an empty
/// result is a normal outcome, not an error. Unrecognized category values
/// simply match zero recipes.
#[must_use]
pub fn visible_recipes<'a>(repository: &'a Repository, filter: &FilterState) -> Vec<&'a Recipe> {
    let query = filter.query.to_lowercase();

    let predicates: [Box<dyn Fn(&Recipe) -> bool + '_>; 3] = [
        Box::new(move |recipe| matches_query(recipe, &query)),
        Box::new(|recipe| matches_category(&recipe.protein, filter.protein.as_deref())),
        Box::new(|recipe| matches_category(&recipe.cooking_method, filter.method.as_deref())),
    ];

    repository
        .iter()
        .filter(|&recipe| predicates.iter().all(|matches| matches(recipe)))
        .collect()
}

/// Case-insensitive substring match against title and description
///
/// Exact character containment after lowercasing both sides; no
/// tokenization, no fuzzy matching, no ranking. The query is expected to
/// be lowercased already so the per-recipe work stays cheap.
fn matches_query(recipe: &Recipe, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }

    recipe.title.to_lowercase().contains(query_lower)
        || recipe.description.to_lowercase().contains(query_lower)
}

/// Exact, case-sensitive category equality, with `None` matching everything
///
/// Filter values come from a fixed closed vocabulary rather than being
/// typed by the user, so no normalization is applied.
fn matches_category(value: &str, filter: Option<&str>) -> bool {
    filter.is_none_or(|wanted| value == wanted)
}
