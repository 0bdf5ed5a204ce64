//! Search command - run the filter engine once and print the matches

use crate::{
    QuickPrepError,
    catalog::{FilterState, Repository, visible_recipes},
    cli::FilterArgs,
    output,
};

type Result<T> = std::result::Result<T, QuickPrepError>;

/// Execute the search command
///
/// Applies the same filter logic as the interactive browser: free-text
/// query against title/description plus exact category filters, ANDed.
pub fn execute(
    repository: &Repository,
    query: Option<&str>,
    filter_args: &FilterArgs,
    quiet: bool,
) -> Result<()> {
    let filter = FilterState {
        query: query.unwrap_or_default().to_string(),
        protein: filter_args.protein.clone(),
        method: filter_args.method.clone(),
    };

    let matches = visible_recipes(repository, &filter);

    if matches.is_empty() {
        if !quiet {
            println!("No recipes found. Try adjusting your search or filters.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Found {} recipe(s):", matches.len());
    }
    for recipe in matches {
        println!("{}", output::recipe_summary(recipe, false, quiet));
    }

    Ok(())
}
