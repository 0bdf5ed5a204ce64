//! Color theme definitions for the TUI
//!
//! Defines colors and styles used throughout the browser.

use crate::catalog::Difficulty;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the highlighted recipe row
    pub selection_bg: Color,
    /// Foreground color for the highlighted recipe row
    pub selection_fg: Color,
    /// Color for the cursor indicator
    pub cursor: Color,
    /// Color for the favorite marker
    pub favorite: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/secondary text
    pub dimmed: Color,
    /// Color for protein categories
    pub protein: Color,
    /// Color for tags
    pub tag: Color,
    /// Color for Easy difficulty
    pub easy: Color,
    /// Color for Medium difficulty
    pub medium: Color,
    /// Color for Hard difficulty
    pub hard: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            favorite: Color::Red,
            success: Color::Green,
            error: Color::Red,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            protein: Color::Cyan,
            tag: Color::Magenta,
            easy: Color::Green,
            medium: Color::Yellow,
            hard: Color::Red,
        }
    }

    /// Style for the highlighted recipe row
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unhighlighted rows
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the favorite marker (♥)
    #[must_use]
    pub fn favorite_style(&self) -> Style {
        Style::default()
            .fg(self.favorite)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for protein categories
    #[must_use]
    pub fn protein_style(&self) -> Style {
        Style::default().fg(self.protein)
    }

    /// Style for tags
    #[must_use]
    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag)
    }

    /// Style for a difficulty badge
    #[must_use]
    pub fn difficulty_style(&self, difficulty: Difficulty) -> Style {
        let color = match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        };
        Style::default().fg(color)
    }
}
