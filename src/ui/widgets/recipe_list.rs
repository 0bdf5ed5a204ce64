//! Recipe list widget for displaying filtered recipes
//!
//! One row per visible recipe, carrying the card data: favorite marker,
//! title, total time, difficulty, servings, calories and categories.
//! An empty result renders the no-match message rather than a bare pane.

use crate::catalog::Recipe;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// Recipe list widget with cursor and favorite indicators
pub struct RecipeList<'a> {
    /// Application state
    state: &'a AppState,
    /// Theme for styling
    theme: &'a Theme,
    /// Title for the list block
    title: String,
}

impl<'a> RecipeList<'a> {
    /// Create a new recipe list widget
    #[must_use]
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        let visible = state.visible_ids.len();
        let total = state.session.repository().len();
        let title = format!(" Recipes ({visible}/{total}) ");

        Self {
            state,
            theme,
            title,
        }
    }

    /// Render a single recipe row
    fn render_row(&self, recipe: &Recipe, is_cursor: bool) -> ListItem<'a> {
        let favorite = self.state.session.is_favorite(recipe.id);

        let cursor_char = if is_cursor { ">" } else { " " };
        let favorite_char = if favorite { "♥" } else { " " };

        let title_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(favorite_char, self.theme.favorite_style()),
            Span::raw(" "),
            Span::styled(recipe.title.clone(), title_style),
            Span::raw("  "),
            Span::styled(
                format!("{} min", recipe.total_time),
                self.theme.dimmed_style(),
            ),
            Span::raw(" · "),
            Span::styled(
                recipe.difficulty.as_str(),
                self.theme.difficulty_style(recipe.difficulty),
            ),
            Span::raw(" · "),
            Span::styled(recipe.protein.clone(), self.theme.protein_style()),
            Span::raw(" · "),
            Span::styled(recipe.cooking_method.clone(), self.theme.dimmed_style()),
        ];

        ListItem::new(Line::from(spans))
    }

    /// Render the no-match message in place of the list
    fn render_empty(&self, inner: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::default(),
            Line::styled("No recipes found", self.theme.normal_style()),
            Line::styled(
                "Try adjusting your search or filters",
                self.theme.dimmed_style(),
            ),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

impl Widget for RecipeList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.state.visible_ids.is_empty() {
            self.render_empty(inner, buf);
            return;
        }

        // Calculate visible range
        let visible_height = inner.height as usize;
        let start = self.state.scroll_offset;
        let end = (start + visible_height).min(self.state.visible_ids.len());

        let items: Vec<ListItem> = (start..end)
            .filter_map(|row| {
                let id = *self.state.visible_ids.get(row)?;
                let recipe = self.state.session.recipe(id)?;
                Some(self.render_row(recipe, row == self.state.cursor))
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
