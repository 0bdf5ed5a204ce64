//! Browse command - interactive recipe browser

use crate::{
    QuickPrepError,
    catalog::{BrowseSession, Repository},
    cli::FilterArgs,
    ui,
};

type Result<T> = std::result::Result<T, QuickPrepError>;

/// Execute the browse command
///
/// Builds a browse session (optionally pre-filtered from CLI arguments)
/// and hands it to the TUI event loop. Returns once the user quits.
pub fn execute(
    repository: Repository,
    query: Option<String>,
    filter_args: &FilterArgs,
    quiet: bool,
) -> Result<()> {
    let mut session = BrowseSession::new(repository);

    if let Some(query) = query {
        session.set_query(query);
    }
    session.set_protein_filter(filter_args.protein.clone());
    session.set_method_filter(filter_args.method.clone());

    let summary = ui::run(session)?;

    if !quiet && summary.favorites > 0 {
        println!("{} recipe(s) favorited this session.", summary.favorites);
    }

    Ok(())
}
