//! List command - enumerate recipes or a filter vocabulary

use crate::{QuickPrepError, catalog::Repository, cli::ListVariant, output};

type Result<T> = std::result::Result<T, QuickPrepError>;

/// Execute the list command
pub fn execute(repository: &Repository, variant: ListVariant, quiet: bool) -> Result<()> {
    match variant {
        ListVariant::Recipes => list_recipes(repository, quiet),
        ListVariant::Proteins => list_category(
            repository,
            "Proteins:",
            &repository.proteins(),
            |recipe| recipe.protein.as_str(),
            quiet,
        ),
        ListVariant::Methods => list_category(
            repository,
            "Cooking methods:",
            &repository.cooking_methods(),
            |recipe| recipe.cooking_method.as_str(),
            quiet,
        ),
    }
}

fn list_recipes(repository: &Repository, quiet: bool) -> Result<()> {
    if repository.is_empty() {
        if !quiet {
            println!("No recipes in the catalog.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Recipes ({}):", repository.len());
    }
    for recipe in repository.iter() {
        println!("{}", output::recipe_summary(recipe, false, quiet));
    }
    Ok(())
}

fn list_category(
    repository: &Repository,
    heading: &str,
    values: &[&str],
    key: impl Fn(&crate::catalog::Recipe) -> &str,
    quiet: bool,
) -> Result<()> {
    if !quiet {
        println!("{heading}");
    }
    for value in values {
        let count = repository.iter().filter(|&r| key(r) == *value).count();
        println!("{}", output::category_with_count(value, count, quiet));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_repository;

    #[test]
    fn test_list_runs_on_every_variant() {
        let repo = test_repository();

        // Smoke: none of the variants may error on a populated catalog
        execute(&repo, ListVariant::Recipes, true).unwrap();
        execute(&repo, ListVariant::Proteins, true).unwrap();
        execute(&repo, ListVariant::Methods, true).unwrap();
    }

    #[test]
    fn test_list_empty_catalog() {
        let repo = Repository::new(vec![]);
        execute(&repo, ListVariant::Recipes, false).unwrap();
    }
}
