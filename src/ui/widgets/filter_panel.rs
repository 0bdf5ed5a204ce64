//! Filter panel overlay for choosing category filters
//!
//! Two columns - protein and cooking method - each headed by an "All"
//! entry that clears the dimension. Choosing the value that is already
//! active clears it too, mirroring the chip behavior of the original
//! filter bar.

use crate::catalog::FilterState;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Widget},
};

/// Which filter column has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterColumn {
    #[default]
    Protein,
    Method,
}

impl FilterColumn {
    /// Column label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Protein => "Protein Type",
            Self::Method => "Cooking Method",
        }
    }

    /// The other column (wrapping)
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Protein => Self::Method,
            Self::Method => Self::Protein,
        }
    }
}

/// State for the filter panel overlay
///
/// Cursor index 0 is the "All" entry; indices 1..=N address the
/// vocabulary values.
#[derive(Debug, Clone, Default)]
pub struct FilterPanelState {
    /// Currently focused column
    pub column: FilterColumn,
    /// Cursor position in the protein column
    pub protein_cursor: usize,
    /// Cursor position in the method column
    pub method_cursor: usize,
    /// Protein vocabulary in first-appearance order
    pub proteins: Vec<String>,
    /// Cooking-method vocabulary in first-appearance order
    pub methods: Vec<String>,
}

impl FilterPanelState {
    /// Create panel state over the repository vocabularies
    #[must_use]
    pub fn new(proteins: Vec<String>, methods: Vec<String>) -> Self {
        Self {
            column: FilterColumn::Protein,
            protein_cursor: 0,
            method_cursor: 0,
            proteins,
            methods,
        }
    }

    /// Switch focus to the other column
    pub fn switch_column(&mut self) {
        self.column = self.column.other();
    }

    /// Move the focused cursor up
    pub fn move_up(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    /// Move the focused cursor down
    pub fn move_down(&mut self) {
        let max = self.focused_values_len(); // "All" + values
        let cursor = self.cursor_mut();
        if *cursor < max {
            *cursor += 1;
        }
    }

    /// The value under the focused cursor, `None` for the "All" entry
    #[must_use]
    pub fn current_value(&self) -> Option<&str> {
        match self.column {
            FilterColumn::Protein => self
                .protein_cursor
                .checked_sub(1)
                .and_then(|i| self.proteins.get(i))
                .map(String::as_str),
            FilterColumn::Method => self
                .method_cursor
                .checked_sub(1)
                .and_then(|i| self.methods.get(i))
                .map(String::as_str),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.column {
            FilterColumn::Protein => &mut self.protein_cursor,
            FilterColumn::Method => &mut self.method_cursor,
        }
    }

    fn focused_values_len(&self) -> usize {
        match self.column {
            FilterColumn::Protein => self.proteins.len(),
            FilterColumn::Method => self.methods.len(),
        }
    }
}

/// Filter panel overlay widget
pub struct FilterPanel<'a> {
    /// Panel state (columns, cursors, vocabularies)
    state: &'a FilterPanelState,
    /// Active filter, for marking the selected entries
    filter: &'a FilterState,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> FilterPanel<'a> {
    /// Create a new filter panel widget
    #[must_use]
    pub const fn new(
        state: &'a FilterPanelState,
        filter: &'a FilterState,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            filter,
            theme,
        }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height.min(90)) / 2),
            Constraint::Percentage(height.min(90)),
            Constraint::Percentage((100 - height.min(90)) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width.min(90)) / 2),
            Constraint::Percentage(width.min(90)),
            Constraint::Percentage((100 - width.min(90)) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    /// Render one column ("All" + vocabulary values)
    fn render_column(
        &self,
        area: Rect,
        buf: &mut Buffer,
        column: FilterColumn,
        values: &[String],
        cursor: usize,
        active: Option<&str>,
    ) {
        let focused = self.state.column == column;
        let border_style = if focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", column.label()));

        let inner = block.inner(area);
        block.render(area, buf);

        let rows: Vec<ListItem> = std::iter::once(None)
            .chain(values.iter().map(Some))
            .enumerate()
            .map(|(row, value)| {
                let is_cursor = focused && row == cursor;
                let is_active = match value {
                    None => active.is_none(),
                    Some(v) => active == Some(v.as_str()),
                };

                let cursor_char = if is_cursor { ">" } else { " " };
                let active_char = if is_active { "●" } else { " " };
                let label = value.map_or("All", |v| v.as_str()).to_string();

                let label_style = if is_cursor {
                    self.theme.selected_style()
                } else if is_active {
                    self.theme.normal_style().add_modifier(Modifier::BOLD)
                } else {
                    self.theme.normal_style()
                };

                ListItem::new(Line::from(vec![
                    Span::styled(cursor_char.to_string(), self.theme.cursor_style()),
                    Span::raw(" "),
                    Span::styled(active_char.to_string(), self.theme.success_style()),
                    Span::raw(" "),
                    Span::styled(label, label_style),
                ]))
            })
            .collect();

        List::new(rows).render(inner, buf);
    }
}

impl Widget for FilterPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 60, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Filters ")
            .title_alignment(Alignment::Center)
            .title_bottom(" TAB column · Enter select · ESC close ");

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        self.render_column(
            columns[0],
            buf,
            FilterColumn::Protein,
            &self.state.proteins,
            self.state.protein_cursor,
            self.filter.protein.as_deref(),
        );
        self.render_column(
            columns[1],
            buf,
            FilterColumn::Method,
            &self.state.methods,
            self.state.method_cursor,
            self.filter.method.as_deref(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_state() -> FilterPanelState {
        FilterPanelState::new(
            vec!["Chicken".to_string(), "Fish".to_string()],
            vec!["Grilling".to_string()],
        )
    }

    #[test]
    fn test_cursor_zero_is_the_all_entry() {
        let state = make_state();
        assert_eq!(state.current_value(), None);
    }

    #[test]
    fn test_cursor_addresses_vocabulary() {
        let mut state = make_state();

        state.move_down();
        assert_eq!(state.current_value(), Some("Chicken"));

        state.move_down();
        assert_eq!(state.current_value(), Some("Fish"));

        // Clamped at the last value
        state.move_down();
        assert_eq!(state.current_value(), Some("Fish"));

        state.move_up();
        state.move_up();
        assert_eq!(state.current_value(), None);
        state.move_up();
        assert_eq!(state.current_value(), None);
    }

    #[test]
    fn test_columns_keep_independent_cursors() {
        let mut state = make_state();

        state.move_down();
        state.switch_column();
        assert_eq!(state.column, FilterColumn::Method);
        assert_eq!(state.current_value(), None);

        state.move_down();
        assert_eq!(state.current_value(), Some("Grilling"));

        state.switch_column();
        assert_eq!(state.current_value(), Some("Chicken"));
    }
}
