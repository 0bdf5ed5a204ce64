//! QuickPrep - a terminal recipe browser for quick healthy meals
//!
//! This library provides the in-memory recipe catalog together with the
//! filtering, favorites and selection logic that both the CLI commands and
//! the interactive TUI sit on.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum QuickPrepError {
    /// Recipe dataset could not be parsed
    #[error("Dataset error: {0}")]
    DatasetError(#[from] serde_json::Error),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
