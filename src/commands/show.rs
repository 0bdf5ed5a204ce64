//! Show command - print the full detail view for one recipe

use crate::{QuickPrepError, catalog::Repository, output};

type Result<T> = std::result::Result<T, QuickPrepError>;

/// Execute the show command
///
/// # Errors
///
/// Returns `QuickPrepError::InvalidInput` if the id is not in the catalog;
/// unlike the interactive selection, an explicit `show` of a missing id is
/// worth reporting.
pub fn execute(repository: &Repository, id: u32, quiet: bool) -> Result<()> {
    let recipe = repository
        .get(id)
        .ok_or_else(|| QuickPrepError::InvalidInput(format!("no recipe with id {id}")))?;

    print!("{}", output::recipe_detail(recipe, false, quiet));
    Ok(())
}
