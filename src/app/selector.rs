//! Catalog selection by meal type or search term.
//!
//! The selector derives the active subset from the catalog. It is a pure
//! function of the catalog and a [`SelectionMode`]: no side effects, catalog
//! order always preserved.

use crate::catalog::Catalog;
use crate::domain::{MealType, Recipe};
use crate::infrastructure::ALL_LABEL;

/// The active way of narrowing the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    /// Every recipe.
    All,
    /// Recipes of one meal type.
    ByMealType(MealType),
    /// A navigation label that names no meal type. Selects nothing.
    Unrecognized(String),
    /// Recipes whose name contains the term, ignoring case and surrounding
    /// whitespace.
    BySearchTerm(String),
}

impl SelectionMode {
    /// Maps a meal navigation label to a mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_shelf::app::SelectionMode;
    /// use recipe_shelf::MealType;
    ///
    /// assert_eq!(SelectionMode::from_nav_label("All"), SelectionMode::All);
    /// assert_eq!(SelectionMode::from_nav_label("Dinner"), SelectionMode::ByMealType(MealType::Dinner));
    /// assert_eq!(
    ///     SelectionMode::from_nav_label("Snacks"),
    ///     SelectionMode::Unrecognized("Snacks".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn from_nav_label(label: &str) -> Self {
        if label == ALL_LABEL {
            return Self::All;
        }
        MealType::from_label(label).map_or_else(|| Self::Unrecognized(label.to_string()), Self::ByMealType)
    }
}

/// Returns the recipes of `catalog` selected by `mode`, in catalog order.
///
/// # Examples
///
/// ```
/// use recipe_shelf::app::{select, SelectionMode};
/// use recipe_shelf::Catalog;
///
/// let catalog = Catalog::builtin();
/// let toast = select(&catalog, &SelectionMode::BySearchTerm("  TOAST ".to_string()));
/// assert_eq!(toast.len(), 1);
/// assert_eq!(toast[0].name, "Avocado Toast");
/// ```
#[must_use]
pub fn select(catalog: &Catalog, mode: &SelectionMode) -> Vec<Recipe> {
    match mode {
        SelectionMode::All => catalog.recipes().to_vec(),
        SelectionMode::ByMealType(meal) => catalog
            .iter()
            .filter(|recipe| recipe.meal_type == *meal)
            .cloned()
            .collect(),
        SelectionMode::Unrecognized(label) => {
            tracing::debug!(label = %label, "unrecognized meal label selects nothing");
            Vec::new()
        }
        SelectionMode::BySearchTerm(term) => {
            let needle = term.trim().to_lowercase();
            catalog
                .iter()
                .filter(|recipe| recipe.name_contains(&needle))
                .cloned()
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Recipe::new("1", "Avocado Toast", "1.jpg", MealType::Breakfast),
            Recipe::new("2", "Caprese Salad", "2.jpg", MealType::Lunch),
            Recipe::new("3", "French Toast", "3.jpg", MealType::Breakfast),
            Recipe::new("4", "Beef Wellington", "4.jpg", MealType::Dinner),
            Recipe::new("5", "Thai Noodle Salad", "5.jpg", MealType::Lunch),
        ])
    }

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn all_returns_catalog_unchanged() {
        let catalog = catalog();
        assert_eq!(select(&catalog, &SelectionMode::All), catalog.recipes());
    }

    #[test]
    fn meal_type_keeps_exactly_matching_records_in_order() {
        let catalog = catalog();
        for meal in MealType::ALL {
            let selected = select(&catalog, &SelectionMode::ByMealType(meal));
            let expected: Vec<&Recipe> = catalog.iter().filter(|r| r.meal_type == meal).collect();
            assert_eq!(selected.iter().collect::<Vec<_>>(), expected);
        }
        assert_eq!(ids(&select(&catalog, &SelectionMode::ByMealType(MealType::Lunch))), ["2", "5"]);
    }

    #[test]
    fn unrecognized_label_selects_nothing() {
        let selected = select(&catalog(), &SelectionMode::from_nav_label("breakfast"));
        assert!(selected.is_empty());
    }

    #[test]
    fn search_ignores_case_and_surrounding_whitespace() {
        let catalog = catalog();
        for term in ["toast", "TOAST", "Toast", "  toast\t"] {
            let selected = select(&catalog, &SelectionMode::BySearchTerm(term.to_string()));
            assert_eq!(ids(&selected), ["1", "3"], "term {term:?}");
        }
    }

    #[test]
    fn blank_search_matches_everything() {
        let catalog = catalog();
        for term in ["", "   "] {
            let selected = select(&catalog, &SelectionMode::BySearchTerm(term.to_string()));
            assert_eq!(selected, catalog.recipes());
        }
    }

    #[test]
    fn search_with_no_match_is_empty() {
        let selected = select(&catalog(), &SelectionMode::BySearchTerm("sushi".to_string()));
        assert!(selected.is_empty());
    }
}
