//! Status bar widget for displaying messages and session counters

use crate::ui::MessageLevel;
use crate::ui::state::{AppState, StatusMessage};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget that shows the latest message plus match/favorite counts
pub struct StatusBar<'a> {
    /// Application state
    state: &'a AppState,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Get style for a message level
    fn style_for_level(&self, level: MessageLevel) -> ratatui::style::Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Info => self.theme.info_style(),
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Info => "ℹ ",
        }
    }

    fn message_line(&self, msg: &StatusMessage) -> Line<'static> {
        let style = self.style_for_level(msg.level);
        Line::from(vec![
            Span::styled(Self::prefix_for_level(msg.level), style),
            Span::styled(msg.text.clone(), style),
        ])
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        // Left: latest message; right: counters
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(inner);

        if let Some(msg) = self.state.active_message() {
            Paragraph::new(self.message_line(msg)).render(chunks[0], buf);
        }

        let counters = format!(
            "{}/{} shown · ♥ {} ",
            self.state.visible_ids.len(),
            self.state.session.repository().len(),
            self.state.session.favorite_count(),
        );
        Paragraph::new(Line::styled(counters, self.theme.dimmed_style()))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
