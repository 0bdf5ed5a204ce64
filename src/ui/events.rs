//! Event handling for the TUI
//!
//! Handles keyboard and mouse events, dispatched by the current UI mode.
//! Every handler is a pure function over `AppState`, so the interaction
//! rules are testable without a terminal.

use crate::ui::state::{AppState, Mode};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// A filter-affecting mutation happened; the visible list is stale
    FilterChanged,
    /// No action taken
    Ignored,
}

/// Handle events in normal browsing mode
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.quit();
            EventResult::Continue
        }

        // Open detail overlay
        (KeyCode::Enter, _) => {
            state.open_detail();
            EventResult::Continue
        }

        // Favorite the highlighted recipe
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => {
            state.toggle_favorite();
            EventResult::Continue
        }

        // Overlays
        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }
        (KeyCode::F(2), _) => {
            state.open_filter_panel();
            EventResult::Continue
        }

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::FilterChanged
        }
        (KeyCode::Backspace, _) => {
            if state.session.filter().query.is_empty() {
                EventResult::Ignored
            } else {
                state.query_backspace();
                EventResult::FilterChanged
            }
        }
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query_clear();
            EventResult::FilterChanged
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events while the detail overlay is open
fn handle_detail_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Dismiss
        (KeyCode::Esc | KeyCode::Enter, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.close_detail();
            EventResult::Continue
        }

        // Favoriting the open recipe keeps the overlay open
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => {
            state.toggle_favorite();
            EventResult::Continue
        }

        // Scroll the overlay content
        (KeyCode::Up, _) => {
            state.detail_scroll = state.detail_scroll.saturating_sub(1);
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.detail_scroll = state.detail_scroll.saturating_add(1);
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events while the filter panel is open
fn handle_filter_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    let Some(panel) = state.filter_panel.as_mut() else {
        state.mode = Mode::Normal;
        return EventResult::Ignored;
    };

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.close_filter_panel();
            EventResult::Continue
        }

        (KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right, _) => {
            panel.switch_column();
            EventResult::Continue
        }

        (KeyCode::Up, _) => {
            panel.move_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            panel.move_down();
            EventResult::Continue
        }

        (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => {
            let column = panel.column;
            let value = panel.current_value().map(str::to_string);

            match (column, value) {
                (crate::ui::widgets::FilterColumn::Protein, None) => {
                    state.session.set_protein_filter(None);
                }
                (crate::ui::widgets::FilterColumn::Protein, Some(v)) => {
                    state.session.toggle_protein_filter(&v);
                }
                (crate::ui::widgets::FilterColumn::Method, None) => {
                    state.session.set_method_filter(None);
                }
                (crate::ui::widgets::FilterColumn::Method, Some(v)) => {
                    state.session.toggle_method_filter(&v);
                }
            }

            EventResult::FilterChanged
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events in help mode
fn handle_help_mode(state: &mut AppState, _key: KeyEvent) -> EventResult {
    // Any key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    match (state.mode, mouse.kind) {
        (Mode::Normal, MouseEventKind::ScrollUp) => {
            state.cursor_up();
            EventResult::Continue
        }
        (Mode::Normal, MouseEventKind::ScrollDown) => {
            state.cursor_down();
            EventResult::Continue
        }
        (Mode::Detail, MouseEventKind::ScrollUp) => {
            state.detail_scroll = state.detail_scroll.saturating_sub(1);
            EventResult::Continue
        }
        (Mode::Detail, MouseEventKind::ScrollDown) => {
            state.detail_scroll = state.detail_scroll.saturating_add(1);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Dispatch a key event by the current mode
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match state.mode {
        Mode::Normal => handle_normal_mode(state, key),
        Mode::Detail => handle_detail_mode(state, key),
        Mode::Filter => handle_filter_mode(state, key),
        Mode::Help => handle_help_mode(state, key),
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
