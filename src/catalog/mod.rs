//! Catalog of recipes available to the list view.
//!
//! The catalog is the source of truth for the component: an ordered, immutable
//! list of [`Recipe`] records fixed for the lifetime of the view. Selection
//! never mutates it, only derives ordered subsets from it.
//!
//! # Modules
//!
//! - `builtin`: The catalog shipped with the page
//! - `loader`: JSON and TOML catalog files

mod builtin;
mod loader;

use crate::domain::Recipe;
use std::collections::HashSet;

/// Ordered, read-only collection of recipes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Creates a catalog from records in display order.
    ///
    /// Duplicate ids are reported but kept; the catalog is trusted input.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_shelf::{Catalog, MealType, Recipe};
    ///
    /// let catalog = Catalog::new(vec![
    ///     Recipe::new("a", "Omelette", "a.jpg", MealType::Breakfast),
    /// ]);
    /// assert_eq!(catalog.len(), 1);
    /// ```
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut seen = HashSet::new();
        for recipe in &recipes {
            if !seen.insert(recipe.id.as_str()) {
                tracing::warn!(recipe_id = %recipe.id, "duplicate recipe id in catalog");
            }
        }
        tracing::debug!(recipe_count = recipes.len(), "catalog created");
        Self { recipes }
    }

    /// Returns the records in catalog order.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Iterates over the records in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
