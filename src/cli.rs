//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for quickprep using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive recipe browser (default)
//! - **search**: Run the filter engine once and print matching recipes
//! - **show**: Print the full detail view for one recipe
//! - **list**: Enumerate the catalog or a filter vocabulary
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--data` flag to browse a custom dataset file
//! - Command aliases (e.g., `b` for `browse`, `s` for `search`)

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// What the list command enumerates
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListVariant {
    /// List every recipe in the catalog
    #[default]
    Recipes,
    /// List the protein filter vocabulary
    Proteins,
    /// List the cooking-method filter vocabulary
    Methods,
}

/// Filter arguments shared by search and browse
#[derive(Parser, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only recipes with this exact protein category (e.g. "Chicken")
    #[arg(short = 'p', long = "protein", value_name = "PROTEIN")]
    pub protein: Option<String>,

    /// Only recipes with this exact cooking method (e.g. "Grilling")
    #[arg(short = 'm', long = "method", value_name = "METHOD")]
    pub method: Option<String>,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "quickprep")]
#[command(about = "A terminal recipe browser for quick healthy meals", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Browse a custom recipe dataset (JSON file) instead of the built-in one
    #[arg(long = "data", global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive recipe browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Initial search query to pre-fill the search bar
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        #[command(flatten)]
        filter_args: FilterArgs,
    },

    /// Find recipes matching a query and/or category filters
    #[command(visible_alias = "s")]
    Search {
        /// Text matched (case-insensitively) against titles and descriptions
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        #[command(flatten)]
        filter_args: FilterArgs,
    },

    /// Show the full detail view for a recipe
    Show {
        /// Recipe id (see `quickprep list`)
        #[arg(value_name = "ID")]
        id: u32,
    },

    /// List recipes or a filter vocabulary
    #[command(visible_alias = "l")]
    List {
        /// What to enumerate
        #[arg(value_enum, default_value_t = ListVariant::Recipes)]
        variant: ListVariant,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            query: None,
            filter_args: FilterArgs::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_browse() {
        let cli = Cli::parse_from(["quickprep"]);
        assert!(matches!(cli.get_command(), Commands::Browse { .. }));
    }

    #[test]
    fn test_search_with_filters() {
        let cli = Cli::parse_from([
            "quickprep", "search", "chicken", "--protein", "Chicken", "-m", "Grilling",
        ]);

        match cli.get_command() {
            Commands::Search { query, filter_args } => {
                assert_eq!(query.as_deref(), Some("chicken"));
                assert_eq!(filter_args.protein.as_deref(), Some("Chicken"));
                assert_eq!(filter_args.method.as_deref(), Some("Grilling"));
            }
            other => panic!("Expected Search, got {other:?}"),
        }
    }

    #[test]
    fn test_aliases() {
        let cli = Cli::parse_from(["quickprep", "s", "fish"]);
        assert!(matches!(cli.get_command(), Commands::Search { .. }));

        let cli = Cli::parse_from(["quickprep", "l", "proteins"]);
        match cli.get_command() {
            Commands::List { variant } => assert_eq!(variant, ListVariant::Proteins),
            other => panic!("Expected List, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["quickprep", "-q", "list", "--data", "extra.json"]);
        assert!(cli.quiet);
        assert_eq!(cli.data.as_deref(), Some(std::path::Path::new("extra.json")));
    }

    #[test]
    fn test_show_requires_numeric_id() {
        assert!(Cli::try_parse_from(["quickprep", "show", "abc"]).is_err());

        let cli = Cli::parse_from(["quickprep", "show", "7"]);
        match cli.get_command() {
            Commands::Show { id } => assert_eq!(id, 7),
            other => panic!("Expected Show, got {other:?}"),
        }
    }
}
