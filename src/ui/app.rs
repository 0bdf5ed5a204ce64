//! TUI event loop and terminal lifecycle
//!
//! Owns raw-mode setup and teardown around the render/event loop. The
//! loop is synchronous: one user intent is applied to completion, the
//! visible list is recomputed if the filter changed, and the frame is
//! redrawn.

use crate::QuickPrepError;
use crate::catalog::BrowseSession;
use crate::ui::events::{EventResult, poll_and_handle};
use crate::ui::state::{AppState, Mode};
use crate::ui::theme::Theme;
use crate::ui::widgets::{
    DetailOverlay, FilterPanel, HelpBar, HelpOverlay, RecipeList, SearchBar, StatusBar,
};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// What happened over the lifetime of a browse session
#[derive(Debug, Clone, Copy)]
pub struct SessionSummary {
    /// Number of recipes favorited when the browser exited
    pub favorites: usize,
}

/// Run the interactive browser until the user quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be configured or event
/// polling fails. The terminal is restored before the error propagates.
pub fn run(session: BrowseSession) -> Result<SessionSummary, QuickPrepError> {
    let mut terminal = setup_terminal()?;
    let mut state = AppState::new(session);
    let theme = Theme::default();

    let result = run_loop(&mut terminal, &mut state, &theme);

    cleanup_terminal()?;
    result?;

    Ok(SessionSummary {
        favorites: state.session.favorite_count(),
    })
}

/// Setup terminal for TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, QuickPrepError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

/// Cleanup terminal after TUI
fn cleanup_terminal() -> Result<(), QuickPrepError> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// The render/event loop
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut AppState,
    theme: &Theme,
) -> Result<(), QuickPrepError> {
    loop {
        state.cleanup_messages();
        terminal.draw(|frame| render(frame, state, theme))?;

        match poll_and_handle(state, Duration::from_millis(100))? {
            EventResult::FilterChanged => state.refresh_visible(),
            EventResult::Continue | EventResult::Ignored => {}
        }

        if state.should_exit {
            return Ok(());
        }
    }
}

/// Render the UI
fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Recipe list
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    state.visible_height = main_layout[1].height.saturating_sub(2) as usize;

    let search_bar = SearchBar::new(state.session.filter(), state.query_cursor, theme)
        .focused(state.mode == Mode::Normal);
    frame.render_widget(search_bar, main_layout[0]);

    frame.render_widget(RecipeList::new(state, theme), main_layout[1]);
    frame.render_widget(StatusBar::new(state, theme), main_layout[2]);

    let hints = HelpBar::default_hints();
    frame.render_widget(HelpBar::new(&hints, theme), main_layout[3]);

    // Overlays on top of the base layout
    match state.mode {
        Mode::Detail => {
            // A selection pointing at a missing id renders nothing
            if let Some(recipe) = state.session.open_recipe() {
                let favorite = state.session.is_favorite(recipe.id);
                frame.render_widget(
                    DetailOverlay::new(recipe, favorite, state.detail_scroll, theme),
                    area,
                );
            }
        }
        Mode::Filter => {
            if let Some(panel) = &state.filter_panel {
                frame.render_widget(
                    FilterPanel::new(panel, state.session.filter(), theme),
                    area,
                );
            }
        }
        Mode::Help => frame.render_widget(HelpOverlay::new(theme), area),
        Mode::Normal => {}
    }
}
