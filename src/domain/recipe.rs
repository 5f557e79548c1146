//! Recipe domain model.
//!
//! This module defines the [`Recipe`] record shown as a card in the list view
//! and the fixed set of [`MealType`] values used for navigation filtering.

use serde::Deserialize;
use std::fmt;

/// Page that renders a single recipe. Every card links here.
pub const DETAIL_PAGE: &str = "recipes.html";

/// Meal category a recipe belongs to.
///
/// The set is fixed. Navigation entries carry these labels verbatim, plus the
/// special `"All"` label which is a reset signal rather than a meal type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    /// All meal types in navigation order.
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Returns the display label, identical to the navigation entry text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }

    /// Parses a navigation label.
    ///
    /// Matching is exact and case-sensitive, mirroring how navigation entries
    /// are compared against their text content.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_shelf::MealType;
    ///
    /// assert_eq!(MealType::from_label("Lunch"), Some(MealType::Lunch));
    /// assert_eq!(MealType::from_label("lunch"), None);
    /// assert_eq!(MealType::from_label("All"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|meal| meal.label() == label)
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recipe shown as one card in the list.
///
/// Records are created when the catalog is loaded and never mutated afterwards.
/// The `id` is the stable identifier used to deep-link into the detail page;
/// the `name` is both the card title and the search key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(rename = "mealType", alias = "meal_type")]
    pub meal_type: MealType,
}

impl Recipe {
    /// Creates a recipe record.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_shelf::{MealType, Recipe};
    ///
    /// let recipe = Recipe::new("Avocado_Toast", "Avocado Toast", "pictures/toast.jpg", MealType::Breakfast);
    /// assert_eq!(recipe.name, "Avocado Toast");
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        image: impl Into<String>,
        meal_type: MealType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            meal_type,
        }
    }

    /// Returns the deep link to this recipe's detail page.
    ///
    /// The id is passed through without any URL encoding; the detail page
    /// reads it back from the `id` query parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_shelf::{MealType, Recipe};
    ///
    /// let recipe = Recipe::new("Beef_Wellington", "Beef Wellington", "b.jpg", MealType::Dinner);
    /// assert_eq!(recipe.detail_link(), "recipes.html?id=Beef_Wellington");
    /// ```
    #[must_use]
    pub fn detail_link(&self) -> String {
        format!("{DETAIL_PAGE}?id={}", self.id)
    }

    /// Returns `true` if the name contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}
