//! QuickPrep CLI application entry point
//!
//! This is the main executable for the quickprep recipe browser. It loads
//! the recipe catalog once at startup and dispatches to the interactive
//! browser or one of the non-interactive commands.
//!
//! # Usage
//!
//! ```bash
//! # Browse recipes interactively (default command)
//! quickprep
//! quickprep browse
//!
//! # Browse with a pre-filled search and filters
//! quickprep browse chicken -p Chicken -m Grilling
//!
//! # Search without the TUI
//! quickprep search salmon
//! quickprep search -p Fish
//!
//! # Show one recipe in full
//! quickprep show 1
//!
//! # List the catalog or the filter vocabularies
//! quickprep list
//! quickprep list proteins
//! quickprep list methods
//!
//! # Quiet mode (only output results)
//! quickprep -q search salmon
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/quickprep/config.toml` on Linux). A custom dataset can be
//! set there or passed per-invocation with `--data`.

use quickprep::{
    QuickPrepError,
    catalog::Repository,
    cli::{Cli, Commands},
    commands,
    config::QuickPrepConfig,
};

type Result<T> = std::result::Result<T, QuickPrepError>;

/// Load the repository: `--data` flag wins over the config key, which
/// wins over the embedded dataset.
fn load_repository(cli: &Cli, config: &QuickPrepConfig) -> Result<Repository> {
    if let Some(path) = cli.data.as_deref().or(config.dataset.as_deref()) {
        Repository::from_file(path)
    } else {
        Repository::embedded()
    }
}

fn main() -> Result<()> {
    let config = QuickPrepConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    let repository = load_repository(&cli, &config)?;

    match cli.get_command() {
        Commands::Browse { query, filter_args } => {
            commands::browse(repository, query, &filter_args, quiet)?;
        }
        Commands::Search { query, filter_args } => {
            commands::search(&repository, query.as_deref(), &filter_args, quiet)?;
        }
        Commands::Show { id } => {
            commands::show(&repository, id, quiet)?;
        }
        Commands::List { variant } => {
            commands::list(&repository, variant, quiet)?;
        }
    }

    Ok(())
}
