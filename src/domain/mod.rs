//! Domain layer for the recipe list view.
//!
//! This module contains the core domain types, independent of any host
//! document or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`recipe`]: Recipe record and meal types
//!
//! # Examples
//!
//! ```
//! use recipe_shelf::domain::{MealType, Recipe, Result};
//!
//! fn pancakes() -> Result<Recipe> {
//!     Ok(Recipe::new("Fluffy_Pancakes", "Fluffy Pancakes", "pictures/pancakes.jpg", MealType::Breakfast))
//! }
//! ```

pub mod error;
pub mod recipe;

pub use error::{RecipeShelfError, Result};
pub use recipe::{MealType, Recipe, DETAIL_PAGE};
