//! # Recipe Lookup
//!
//! Recipe selection never touches a recipe table directly. It asks a [`RecipeSource`]
//! for the candidates of a cuisine, so the built-in table, a table loaded from config,
//! or a real recipe service can be swapped in without changing the selection logic.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

static BUILTIN_RECIPES: Lazy<BTreeMap<String, Vec<String>>> = Lazy::new(|| {
    [
        (
            "Italian",
            &["Pasta Carbonara", "Margherita Pizza", "Risotto"][..],
        ),
        (
            "Chinese",
            &["Sweet and Sour Pork", "Kung Pao Chicken", "Spring Rolls"][..],
        ),
        ("Mexican", &["Tacos", "Burritos", "Quesadillas"][..]),
    ]
    .into_iter()
    .map(|(cuisine, recipes)| {
        (
            cuisine.to_string(),
            recipes.iter().map(|r| r.to_string()).collect(),
        )
    })
    .collect()
});

/// The stock three-cuisine table.
pub fn builtin_table() -> BTreeMap<String, Vec<String>> {
    BUILTIN_RECIPES.clone()
}

/// Anything that can answer "which recipes exist for this cuisine".
pub trait RecipeSource {
    /// Candidate recipes for `cuisine`, or `None` when the cuisine is unknown.
    fn recipes_for(&self, cuisine: &str) -> Option<&[String]>;

    /// Every cuisine this source knows, in display order.
    fn cuisines(&self) -> Vec<&str>;
}

/// A fixed cuisine table held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCatalog {
    table: BTreeMap<String, Vec<String>>,
}

impl RecipeCatalog {
    pub fn new(table: BTreeMap<String, Vec<String>>) -> Self {
        Self { table }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_table())
    }
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RecipeSource for RecipeCatalog {
    fn recipes_for(&self, cuisine: &str) -> Option<&[String]> {
        self.table.get(cuisine).map(Vec::as_slice)
    }

    fn cuisines(&self) -> Vec<&str> {
        self.table.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_three_cuisines_of_three() {
        let catalog = RecipeCatalog::builtin();
        assert_eq!(catalog.cuisines(), vec!["Chinese", "Italian", "Mexican"]);
        for cuisine in catalog.cuisines() {
            assert_eq!(catalog.recipes_for(cuisine).unwrap().len(), 3);
        }
    }

    #[test]
    fn lookup_is_exact() {
        let catalog = RecipeCatalog::builtin();
        assert_eq!(
            catalog.recipes_for("Italian").unwrap(),
            &["Pasta Carbonara", "Margherita Pizza", "Risotto"]
        );
        assert!(catalog.recipes_for("italian").is_none());
        assert!(catalog.recipes_for("Thai").is_none());
    }

    #[test]
    fn custom_table_replaces_builtin() {
        let mut table = BTreeMap::new();
        table.insert("Thai".to_string(), vec!["Pad Thai".to_string()]);
        let catalog = RecipeCatalog::new(table);

        assert_eq!(catalog.cuisines(), vec!["Thai"]);
        assert!(catalog.recipes_for("Italian").is_none());
    }
}
