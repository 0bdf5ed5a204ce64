//! Session-scoped favorites
//!
//! Membership only: a set of recipe ids, created empty at session start
//! and destroyed with the session. Ids are not validated against the
//! repository; the toggle is harmless for unknown ids and the renderer
//! never resolves them into anything visible.

use std::collections::HashSet;

/// Mutable set of recipe ids marked as favorite
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    ids: HashSet<u32>,
}

impl Favorites {
    /// Create an empty favorites set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership test
    #[must_use]
    pub fn is_favorite(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Toggle membership: add if absent, remove if present
    ///
    /// Returns true if the id is now a favorite. Toggling twice restores
    /// the original state.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Number of favorited ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no recipe is favorited
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
