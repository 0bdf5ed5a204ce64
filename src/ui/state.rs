//! Application state for the TUI
//!
//! Wraps the catalog `BrowseSession` with the presentation-only state the
//! widgets need: cursor and scroll positions, the active UI mode, the
//! filter panel state and transient status messages.

use crate::catalog::{BrowseSession, Recipe};
use crate::ui::MessageLevel;
use crate::ui::widgets::FilterPanelState;
use std::time::{Duration, Instant};

/// Current mode of the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing: typing edits the query, arrows move the cursor
    #[default]
    Normal,
    /// The detail overlay is open
    Detail,
    /// The filter panel overlay is open
    Filter,
    /// The help overlay is open
    Help,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Application state for the recipe browser
#[derive(Debug)]
pub struct AppState {
    /// The catalog session driving everything visible
    pub session: BrowseSession,
    /// Ids of recipes matching the current filter, in repository order
    pub visible_ids: Vec<u32>,
    /// Cursor position within the visible list
    pub cursor: usize,
    /// Cursor position within the query string
    pub query_cursor: usize,
    /// Current UI mode
    pub mode: Mode,
    /// Scroll offset for the recipe list
    pub scroll_offset: usize,
    /// Scroll offset for the detail overlay
    pub detail_scroll: u16,
    /// Height of the visible list area (set during render)
    pub visible_height: usize,
    /// State for the filter panel overlay
    pub filter_panel: Option<FilterPanelState>,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the browser should exit
    pub should_exit: bool,
}

impl AppState {
    /// Create application state around a session
    #[must_use]
    pub fn new(session: BrowseSession) -> Self {
        let query_cursor = session.filter().query.len();
        let mut state = Self {
            session,
            visible_ids: Vec::new(),
            cursor: 0,
            query_cursor,
            mode: Mode::Normal,
            scroll_offset: 0,
            detail_scroll: 0,
            visible_height: 20, // Default, updated during render
            filter_panel: None,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
        };
        state.refresh_visible();
        state
    }

    /// Recompute the visible list after a filter-affecting mutation
    ///
    /// Clamps the cursor so it always points at a real row (or 0 when the
    /// result is empty).
    pub fn refresh_visible(&mut self) {
        self.visible_ids = self.session.visible().iter().map(|r| r.id).collect();
        if self.cursor >= self.visible_ids.len() {
            self.cursor = self.visible_ids.len().saturating_sub(1);
        }
        self.scroll_offset = 0;
        self.adjust_scroll();
    }

    /// The recipe currently under the cursor
    #[must_use]
    pub fn current_recipe(&self) -> Option<&Recipe> {
        self.visible_ids
            .get(self.cursor)
            .and_then(|&id| self.session.recipe(id))
    }

    /// Move cursor up
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.visible_ids.len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor up by one page
    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self) {
        let max_cursor = self.visible_ids.len().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.adjust_scroll();
    }

    /// Jump to first recipe
    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to last recipe
    pub fn jump_to_end(&mut self) {
        self.cursor = self.visible_ids.len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Adjust scroll offset to keep cursor visible
    fn adjust_scroll(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.visible_height > 0
            && self.cursor >= self.scroll_offset + self.visible_height
        {
            self.scroll_offset = self.cursor.saturating_sub(self.visible_height - 1);
        }
    }

    // ------------------------------------------------------------------
    // Query editing
    // ------------------------------------------------------------------

    /// Add a character to the query at the cursor
    pub fn query_push(&mut self, c: char) {
        let mut query = self.session.filter().query.clone();
        query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
        self.session.set_query(query);
    }

    /// Remove the character before the cursor (backspace)
    pub fn query_backspace(&mut self) {
        if self.query_cursor == 0 {
            return;
        }
        let mut query = self.session.filter().query.clone();
        let prev_char_boundary = query[..self.query_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        query.remove(prev_char_boundary);
        self.query_cursor = prev_char_boundary;
        self.session.set_query(query);
    }

    /// Move query cursor left
    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.session.filter().query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move query cursor right
    pub fn query_cursor_right(&mut self) {
        let query = &self.session.filter().query;
        if self.query_cursor < query.len() {
            self.query_cursor = query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Clear the query
    pub fn query_clear(&mut self) {
        self.session.set_query("");
        self.query_cursor = 0;
    }

    // ------------------------------------------------------------------
    // Overlays
    // ------------------------------------------------------------------

    /// Open the detail overlay for the recipe under the cursor
    pub fn open_detail(&mut self) {
        if let Some(id) = self.visible_ids.get(self.cursor).copied() {
            self.session.select_recipe(id);
            self.detail_scroll = 0;
            self.mode = Mode::Detail;
        }
    }

    /// Dismiss the detail overlay
    pub fn close_detail(&mut self) {
        self.session.close_selection();
        self.mode = Mode::Normal;
    }

    /// Open the filter panel overlay
    pub fn open_filter_panel(&mut self) {
        let proteins: Vec<String> = self
            .session
            .repository()
            .proteins()
            .into_iter()
            .map(str::to_string)
            .collect();
        let methods: Vec<String> = self
            .session
            .repository()
            .cooking_methods()
            .into_iter()
            .map(str::to_string)
            .collect();

        self.filter_panel = Some(FilterPanelState::new(proteins, methods));
        self.mode = Mode::Filter;
    }

    /// Close the filter panel overlay
    pub fn close_filter_panel(&mut self) {
        self.filter_panel = None;
        self.mode = Mode::Normal;
    }

    /// Toggle favorite for the recipe under the cursor (or the open one)
    ///
    /// In detail mode this targets the open recipe and leaves the
    /// selection untouched.
    pub fn toggle_favorite(&mut self) {
        let target = match self.mode {
            Mode::Detail => self.session.selection().open_id(),
            _ => self.visible_ids.get(self.cursor).copied(),
        };

        if let Some(id) = target {
            let title = self
                .session
                .recipe(id)
                .map_or_else(|| format!("recipe {id}"), |r| r.title.clone());
            if self.session.toggle_favorite(id) {
                self.add_message(MessageLevel::Success, format!("Added {title} to favorites"));
            } else {
                self.add_message(MessageLevel::Info, format!("Removed {title} from favorites"));
            }
        }
    }

    // ------------------------------------------------------------------
    // Status messages
    // ------------------------------------------------------------------

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Get the most recent non-expired message
    #[must_use]
    pub fn active_message(&self) -> Option<&StatusMessage> {
        self.messages
            .iter()
            .rev()
            .find(|m| !m.is_expired(self.message_ttl))
    }

    /// Clean up expired messages
    pub fn cleanup_messages(&mut self) {
        self.messages.retain(|m| !m.is_expired(self.message_ttl));
    }

    /// Mark the browser to exit
    pub fn quit(&mut self) {
        self.should_exit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Selection;
    use crate::testing::test_repository;

    fn make_state() -> AppState {
        AppState::new(BrowseSession::new(test_repository()))
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let state = make_state();
        assert_eq!(state.visible_ids, vec![1, 2, 3, 4]);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_cursor_navigation_clamps() {
        let mut state = make_state();

        state.cursor_down();
        state.cursor_down();
        state.cursor_down();
        assert_eq!(state.cursor, 3);

        // Should not go past end
        state.cursor_down();
        assert_eq!(state.cursor, 3);

        state.jump_to_start();
        assert_eq!(state.cursor, 0);
        state.cursor_up();
        assert_eq!(state.cursor, 0);

        state.jump_to_end();
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn test_query_editing_refreshes_list() {
        let mut state = make_state();

        for c in "salmon".chars() {
            state.query_push(c);
        }
        state.refresh_visible();

        assert_eq!(state.visible_ids, vec![2]);
        assert_eq!(state.cursor, 0);

        state.query_clear();
        state.refresh_visible();
        assert_eq!(state.visible_ids.len(), 4);
    }

    #[test]
    fn test_cursor_clamped_when_list_shrinks() {
        let mut state = make_state();
        state.jump_to_end();
        assert_eq!(state.cursor, 3);

        state.query_push('G');
        state.refresh_visible();

        // Fewer matches now; the cursor must still point at a real row
        assert!(state.cursor < state.visible_ids.len());
    }

    #[test]
    fn test_open_detail_selects_cursor_recipe() {
        let mut state = make_state();
        state.cursor_down();

        state.open_detail();
        assert_eq!(state.mode, Mode::Detail);
        assert_eq!(state.session.selection(), Selection::Open(2));

        state.close_detail();
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.session.selection(), Selection::Closed);
    }

    #[test]
    fn test_open_detail_on_empty_list_is_noop() {
        let mut state = make_state();
        state.session.set_query("nonexistent-zzz");
        state.refresh_visible();

        state.open_detail();
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.session.selection(), Selection::Closed);
    }

    #[test]
    fn test_toggle_favorite_in_detail_keeps_selection() {
        let mut state = make_state();
        state.open_detail();

        state.toggle_favorite();
        assert_eq!(state.session.selection(), Selection::Open(1));
        assert!(state.session.is_favorite(1));
        assert!(state.active_message().is_some());
    }

    #[test]
    fn test_query_cursor_moves_on_char_boundaries() {
        let mut state = make_state();
        state.query_push('é');
        state.query_push('x');

        state.query_cursor_left();
        state.query_cursor_left();
        assert_eq!(state.query_cursor, 0);

        state.query_cursor_right();
        assert_eq!(state.query_cursor, 'é'.len_utf8());

        state.query_backspace();
        assert_eq!(state.session.filter().query, "x");
    }

    #[test]
    fn test_filter_panel_lifecycle() {
        let mut state = make_state();

        state.open_filter_panel();
        assert_eq!(state.mode, Mode::Filter);
        assert!(state.filter_panel.is_some());

        state.close_filter_panel();
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.filter_panel.is_none());
    }
}
