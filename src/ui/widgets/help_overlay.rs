//! Help overlay widget for displaying the full keybind reference

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            Line::styled(
                "  Navigation",
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ),
            Line::default(),
            Self::help_line("  ↑/↓", "Move cursor"),
            Self::help_line("  PgUp/PgDn", "Page up/down"),
            Self::help_line("  Home/End", "Jump to start/end"),
            Self::help_line("  Enter", "Open recipe detail"),
            Self::help_line("  ESC", "Quit / Close overlay"),
            Line::default(),
            Line::styled(
                "  Search & Filters",
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ),
            Line::default(),
            Self::help_line("  Type", "Search titles and descriptions"),
            Self::help_line("  Ctrl+U", "Clear query"),
            Self::help_line("  ←/→", "Move cursor in query"),
            Self::help_line("  F2", "Open filter panel"),
            Line::default(),
            Line::styled(
                "  Favorites",
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ),
            Line::default(),
            Self::help_line("  Ctrl+F", "Toggle favorite"),
            Line::default(),
            Line::styled("  Press any key to close", self.theme.dimmed_style()),
            Line::default(),
        ]
    }

    /// Create a help line with key and description
    fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{key:<14}"),
                ratatui::style::Style::default().fg(ratatui::style::Color::Cyan),
            ),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 70, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        let content = self.build_content();
        Paragraph::new(content).block(block).render(popup_area, buf);
    }
}
