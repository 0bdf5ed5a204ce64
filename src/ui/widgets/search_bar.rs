//! Search bar widget for query input
//!
//! Shows the free-text query with a cursor, plus the active category
//! filters so the user can always see why the list is narrowed.

use crate::catalog::FilterState;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Current filter state (query + category filters)
    filter: &'a FilterState,
    /// Cursor position in the query
    cursor: usize,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the widget has focus
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(filter: &'a FilterState, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            filter,
            cursor,
            theme,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Title line showing which category filters are active
    fn title(&self) -> String {
        let mut title = String::from(" Search ");
        if let Some(protein) = &self.filter.protein {
            title.push_str(&format!("· {protein} "));
        }
        if let Some(method) = &self.filter.method {
            title.push_str(&format!("· {method} "));
        }
        title
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title());

        let inner = block.inner(area);
        block.render(area, buf);

        let query = self.filter.query.as_str();
        let mut spans = vec![
            Span::styled(">", self.theme.dimmed_style()),
            Span::raw(" "),
        ];

        if query.is_empty() {
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
            spans.push(Span::styled(
                "Search recipes...",
                self.theme.dimmed_style(),
            ));
        } else {
            // Split query at cursor position
            let (before, after) = query.split_at(self.cursor.min(query.len()));
            spans.push(Span::raw(before));
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
            spans.push(Span::raw(after));
        }

        let line = Line::from(spans);
        Paragraph::new(line).render(inner, buf);
    }
}
