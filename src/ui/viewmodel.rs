//! View model types representing renderable list state.
//!
//! View models are computed from application state via
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no selection logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use recipe_shelf::ui::viewmodel::{CardItem, UIViewModel};
//! use recipe_shelf::{MealType, Recipe};
//!
//! let recipe = Recipe::new("1", "Avocado Toast", "images/avocado.jpg", MealType::Breakfast);
//! let vm = UIViewModel {
//!     cards: vec![CardItem::from(&recipe)],
//!     pagination: None,
//!     empty_state: None,
//! };
//! assert_eq!(vm.cards[0].href, "recipes.html?id=1");
//! ```

use crate::app::PageControl;
use crate::domain::Recipe;

/// Complete view model for one render of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Cards of the page being shown, in subset order.
    pub cards: Vec<CardItem>,

    /// Pagination for a non-empty subset. `None` suppresses the controls.
    pub pagination: Option<PaginationInfo>,

    /// Set when the subset is empty.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single recipe card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub id: String,

    /// Link to the detail page, `recipes.html?id=<id>`.
    pub href: String,

    /// Image reference, passed through untouched.
    pub image: String,

    pub name: String,
}

impl From<&Recipe> for CardItem {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            href: recipe.detail_link(),
            image: recipe.image.clone(),
            name: recipe.name.clone(),
        }
    }
}

/// Pagination display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Effective 1-based page.
    pub current_page: usize,

    pub page_count: usize,

    /// Previous, numbered and next controls, in display order.
    pub controls: Vec<PageControl>,
}

/// Message shown in place of the cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}
