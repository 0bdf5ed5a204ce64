//! Detail overlay widget for the full recipe view
//!
//! A centered modal carrying everything the summary row omits: the
//! description, timing breakdown, all tags, the per-serving nutrition
//! table, bulleted ingredients and numbered instructions.

use crate::catalog::Recipe;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Detail overlay widget that displays one recipe in full
pub struct DetailOverlay<'a> {
    /// Recipe to display
    recipe: &'a Recipe,
    /// Whether the recipe is currently favorited
    favorite: bool,
    /// Vertical scroll offset
    scroll: u16,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> DetailOverlay<'a> {
    /// Create a new detail overlay
    #[must_use]
    pub const fn new(recipe: &'a Recipe, favorite: bool, scroll: u16, theme: &'a Theme) -> Self {
        Self {
            recipe,
            favorite,
            scroll,
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

    /// Build content lines for the overlay
    fn build_content(&self) -> Vec<Line<'static>> {
        let recipe = self.recipe;

        let mut title_spans = vec![Span::styled(
            recipe.title.clone(),
            self.theme.normal_style().add_modifier(Modifier::BOLD),
        )];
        if self.favorite {
            title_spans.push(Span::raw(" "));
            title_spans.push(Span::styled("♥", self.theme.favorite_style()));
        }

        let mut lines = vec![
            Line::from(title_spans),
            Line::styled(recipe.description.clone(), self.theme.dimmed_style()),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    format!(
                        "{} min total ({} prep + {} cook)",
                        recipe.total_time, recipe.prep_time, recipe.cook_time
                    ),
                    self.theme.normal_style(),
                ),
                Span::raw(" · "),
                Span::styled(
                    recipe.difficulty.as_str(),
                    self.theme.difficulty_style(recipe.difficulty),
                ),
                Span::raw(" · "),
                Span::raw(format!("serves {}", recipe.servings)),
            ]),
            Line::from(vec![
                Span::styled(recipe.protein.clone(), self.theme.protein_style()),
                Span::raw(" · "),
                Span::raw(recipe.cooking_method.clone()),
            ]),
        ];

        if !recipe.tags.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Tags: ", self.theme.dimmed_style()),
                Span::styled(recipe.tags.join(", "), self.theme.tag_style()),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from("─".repeat(70)));
        lines.push(Line::default());

        // Nutrition facts (per serving)
        let n = &recipe.nutrition_facts;
        lines.push(Line::styled(
            "Nutrition Facts (per serving)",
            self.theme.normal_style().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(vec![
            Span::styled(format!("{} cal", n.calories), self.theme.success_style()),
            Span::raw(" · "),
            Span::raw(format!("{}g protein", n.protein)),
            Span::raw(" · "),
            Span::raw(format!("{}g carbs", n.carbs)),
            Span::raw(" · "),
            Span::raw(format!("{}g fat", n.fat)),
            Span::raw(" · "),
            Span::raw(format!("{}g fiber", n.fiber)),
        ]));

        lines.push(Line::default());
        lines.push(Line::styled(
            "Ingredients",
            self.theme.normal_style().add_modifier(Modifier::BOLD),
        ));
        for ingredient in &recipe.ingredients {
            lines.push(Line::from(vec![
                Span::styled("  • ", self.theme.success_style()),
                Span::raw(ingredient.clone()),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::styled(
            "Instructions",
            self.theme.normal_style().add_modifier(Modifier::BOLD),
        ));
        for (step, instruction) in recipe.instructions.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}. ", step + 1), self.theme.cursor_style()),
                Span::raw(instruction.clone()),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from("─".repeat(70)));
        lines.push(Line::styled(
            "ESC close · Ctrl+F favorite · ↑/↓ scroll",
            self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
        ));

        lines
    }
}

impl Widget for DetailOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(80, 80, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Recipe ")
            .title_alignment(Alignment::Center);

        let content = self.build_content();
        Paragraph::new(content)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(popup_area, buf);
    }
}
