//! Browse session - the boundary between the core and a frontend
//!
//! A `BrowseSession` owns the repository together with all mutable
//! session state (filter, favorites, selection) and exposes exactly the
//! intents a frontend relays: query edits, filter changes, favorite
//! toggles, and opening/dismissing the detail view. Every operation is
//! synchronous, total and runs to completion before the next intent is
//! processed; the visible list is recomputed from scratch on demand.

use crate::catalog::filter::visible_recipes;
use crate::catalog::{Favorites, FilterState, Recipe, Repository, Selection};

/// State for one interactive browse session over a fixed catalog
#[derive(Debug)]
pub struct BrowseSession {
    repository: Repository,
    filter: FilterState,
    favorites: Favorites,
    selection: Selection,
}

impl BrowseSession {
    /// Start a session: fully-open filter, no favorites, nothing selected
    #[must_use]
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            filter: FilterState::new(),
            favorites: Favorites::new(),
            selection: Selection::default(),
        }
    }

    // ------------------------------------------------------------------
    // Inbound intents
    // ------------------------------------------------------------------

    /// Replace the free-text search query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    /// Set or clear the protein filter
    pub fn set_protein_filter(&mut self, protein: Option<String>) {
        self.filter.set_protein(protein);
    }

    /// Set or clear the cooking-method filter
    pub fn set_method_filter(&mut self, method: Option<String>) {
        self.filter.set_method(method);
    }

    /// Toggle the protein filter (re-selecting the active value clears it)
    pub fn toggle_protein_filter(&mut self, protein: &str) -> bool {
        self.filter.toggle_protein(protein)
    }

    /// Toggle the cooking-method filter (re-selecting the active value clears it)
    pub fn toggle_method_filter(&mut self, method: &str) -> bool {
        self.filter.toggle_method(method)
    }

    /// Toggle favorite membership for a recipe id
    ///
    /// Unknown ids are accepted silently; the selection is never touched,
    /// so favoriting the open recipe leaves the detail view open.
    pub fn toggle_favorite(&mut self, id: u32) -> bool {
        self.favorites.toggle(id)
    }

    /// Open the detail view for a recipe id
    pub fn select_recipe(&mut self, id: u32) {
        self.selection.open(id);
    }

    /// Dismiss the detail view
    pub fn close_selection(&mut self) {
        self.selection.close();
    }

    // ------------------------------------------------------------------
    // Outbound reads
    // ------------------------------------------------------------------

    /// Recipes visible under the current filter, in repository order
    #[must_use]
    pub fn visible(&self) -> Vec<&Recipe> {
        visible_recipes(&self.repository, &self.filter)
    }

    /// Membership test for the favorites set
    #[must_use]
    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.is_favorite(id)
    }

    /// The current selection state
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// The recipe open in the detail view, resolved against the repository
    ///
    /// `None` both when nothing is selected and when the selected id does
    /// not exist; the renderer treats either as "render nothing".
    #[must_use]
    pub fn open_recipe(&self) -> Option<&Recipe> {
        self.selection.open_id().and_then(|id| self.repository.get(id))
    }

    /// Look up any recipe by id
    #[must_use]
    pub fn recipe(&self, id: u32) -> Option<&Recipe> {
        self.repository.get(id)
    }

    /// The current filter state
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The underlying repository
    #[must_use]
    pub const fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Number of favorited recipes
    #[must_use]
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_repository;

    #[test]
    fn test_session_starts_fully_open() {
        let session = BrowseSession::new(test_repository());

        assert_eq!(session.visible().len(), session.repository().len());
        assert_eq!(session.selection(), Selection::Closed);
        assert_eq!(session.favorite_count(), 0);
    }

    #[test]
    fn test_query_intent_recomputes_visible_list() {
        let mut session = BrowseSession::new(test_repository());

        session.set_query("salmon");
        let visible = session.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Pan-Seared Salmon");

        session.set_query("");
        assert_eq!(session.visible().len(), 4);
    }

    #[test]
    fn test_filters_compose_with_query() {
        let mut session = BrowseSession::new(test_repository());

        session.set_query("grilled");
        session.set_protein_filter(Some("Beef".to_string()));

        let visible = session.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 3);
    }

    #[test]
    fn test_favoriting_open_recipe_keeps_selection() {
        let mut session = BrowseSession::new(test_repository());

        session.select_recipe(2);
        session.toggle_favorite(2);

        assert_eq!(session.selection(), Selection::Open(2));
        assert!(session.is_favorite(2));
    }

    #[test]
    fn test_selection_replace_semantics() {
        let mut session = BrowseSession::new(test_repository());

        session.select_recipe(1);
        session.select_recipe(3);
        assert_eq!(session.selection(), Selection::Open(3));

        session.close_selection();
        assert_eq!(session.selection(), Selection::Closed);
    }

    #[test]
    fn test_selecting_unknown_id_renders_nothing() {
        let mut session = BrowseSession::new(test_repository());

        session.select_recipe(999);
        assert_eq!(session.selection(), Selection::Open(999));
        assert!(session.open_recipe().is_none());
    }

    #[test]
    fn test_favorites_independent_of_filtering() {
        let mut session = BrowseSession::new(test_repository());

        session.toggle_favorite(4);
        session.set_query("nonexistent-zzz");

        // The favorite survives even while the recipe is filtered out
        assert!(session.visible().is_empty());
        assert!(session.is_favorite(4));
    }

    #[test]
    fn test_toggle_filter_clears_on_reselect() {
        let mut session = BrowseSession::new(test_repository());

        assert!(session.toggle_protein_filter("Fish"));
        assert_eq!(session.visible().len(), 1);

        assert!(!session.toggle_protein_filter("Fish"));
        assert_eq!(session.visible().len(), 4);
    }
}
