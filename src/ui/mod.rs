//! Ratatui presentation layer
//!
//! Renders the browse session to the terminal and relays user intents
//! (typed text, filter choices, card selection, favorite toggles,
//! overlay dismissal) back into the catalog core. The core never pulls
//! from the UI; all state lives in `AppState` and the wrapped session.

pub mod app;
pub mod events;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{SessionSummary, run};
pub use theme::Theme;

/// Severity of a transient status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Error,
    Info,
}
