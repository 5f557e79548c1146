use super::Catalog;
use crate::domain::{MealType, Recipe};

/// `(id, name, image, meal type)` rows of the catalog shipped with the page.
const BUILTIN_RECIPES: [(&str, &str, &str, MealType); 7] = [
    ("Fluffy_Pancakes", "Fluffy Pancakes", "pictures/hussein-lazim-sVxDMXluCjQ-unsplash.jpg", MealType::Breakfast),
    ("Avocado_Toast", "Avocado Toast", "pictures/caprese-salad.jpg", MealType::Breakfast),
    ("Caprese_Salad", "Caprese Salad", "pictures/caprese-salad.jpg", MealType::Lunch),
    ("Thai_Noodle_Salad", "Thai Noodle Salad", "pictures/thai-chicken.jpg", MealType::Lunch),
    ("Slow_Cooker_Beef_Bourguignon", "Slow Cooker Beef Bourguignon", "pictures/beefstew.jpg", MealType::Dinner),
    ("Vegetarian_Lasagna", "Vegetarian Lasagna", "pictures/Vegetable_lasagna.jpg", MealType::Dinner),
    ("Beef_Wellington", "Beef Wellington", "pictures/Beef-wellington.jpg", MealType::Dinner),
];

impl Catalog {
    /// Returns the catalog shipped with the page.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_shelf::Catalog;
    ///
    /// let catalog = Catalog::builtin();
    /// assert_eq!(catalog.recipes()[0].name, "Fluffy Pancakes");
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_RECIPES
                .iter()
                .map(|&(id, name, image, meal_type)| Recipe::new(id, name, image, meal_type))
                .collect(),
        )
    }
}
