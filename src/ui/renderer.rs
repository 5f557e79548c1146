//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the markup components
//!
//! Every render fully replaces the card list and pagination regions. The
//! meal navigation, search input and search submit regions are never written
//! here.
//!
//! # Example
//!
//! ```rust
//! use recipe_shelf::app::AppState;
//! use recipe_shelf::ui::render;
//! use recipe_shelf::Catalog;
//!
//! let state = AppState::new(Catalog::builtin());
//! let view = render(&state);
//! assert_eq!(view.card_list.matches("recipe-card-link").count(), 6);
//! assert!(view.pagination.contains(r#"data-page="2""#));
//! ```

use crate::app::AppState;
use crate::infrastructure::{Document, Region};
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;

/// Markup for the two regions the list view owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub card_list: String,
    pub pagination: String,
}

/// Renders the current page of `state` to markup.
#[must_use]
pub fn render(state: &AppState) -> RenderedView {
    let viewmodel = state.compute_viewmodel();

    render_viewmodel(&viewmodel)
}

/// Renders `state` and replaces the card list and pagination regions of
/// `document`. Both regions are expected to exist; the list view checks them
/// when it mounts.
pub fn render_into<D: Document + ?Sized>(state: &AppState, document: &mut D) {
    let view = render(state);

    tracing::debug!(
        page = state.current_page(),
        subset_len = state.active_subset.len(),
        "rendering list regions"
    );

    document.replace_region(Region::CardList, &view.card_list);
    document.replace_region(Region::Pagination, &view.pagination);
}

fn render_viewmodel(vm: &UIViewModel) -> RenderedView {
    RenderedView {
        card_list: components::render_card_list(vm),
        pagination: components::render_pagination_region(vm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{PageTarget, SelectionMode};
    use crate::catalog::Catalog;
    use crate::domain::{MealType, Recipe};

    fn numbered_catalog(len: usize) -> Catalog {
        Catalog::new(
            (1..=len)
                .map(|n| Recipe::new(n.to_string(), format!("Recipe {n}"), format!("img/{n}.jpg"), MealType::Dinner))
                .collect(),
        )
    }

    #[test]
    fn card_markup_matches_detail_contract() {
        let state = AppState::new(numbered_catalog(1));
        let view = render(&state);

        assert_eq!(
            view.card_list,
            concat!(
                r#"<a href="recipes.html?id=1" class="recipe-card-link">"#,
                r#"<div class="recipe-card">"#,
                r#"<img src="img/1.jpg" alt="Recipe 1">"#,
                r#"<div class="recipe-info"><h3>Recipe 1</h3></div>"#,
                "</div></a>"
            )
        );
    }

    #[test]
    fn last_page_marks_next_disabled_and_page_active() {
        let mut state = AppState::new(numbered_catalog(13));
        state.navigate(PageTarget::Number(3));
        let view = render(&state);

        assert_eq!(view.card_list.matches("recipe-card-link").count(), 1);
        assert!(view.pagination.contains(r##"data-page="3" class="active""##));
        assert!(view.pagination.contains(r##"data-page="next" class="disabled""##));
        assert!(view.pagination.contains(r##"data-page="prev" class="""##));
    }

    #[test]
    fn empty_subset_suppresses_pagination() {
        let mut state = AppState::new(numbered_catalog(3));
        state.apply_selection(SelectionMode::ByMealType(MealType::Breakfast));
        let view = render(&state);

        assert!(view.card_list.contains("No recipes found matching the criteria."));
        assert!(view.pagination.is_empty());
    }

    #[test]
    fn attribute_values_and_names_are_escaped() {
        let state = AppState::new(Catalog::new(vec![Recipe::new(
            "a&b",
            "Fish & Chips",
            "fish.jpg",
            MealType::Dinner,
        )]));
        let view = render(&state);

        assert!(view.card_list.contains(r#"href="recipes.html?id=a&amp;b""#));
        assert!(view.card_list.contains("<h3>Fish &amp; Chips</h3>"));
    }

    #[test]
    fn quote_in_id_stays_inside_href() {
        let state = AppState::new(Catalog::new(vec![Recipe::new(
            r#"x" onclick="y"#,
            "Trap",
            "trap.jpg",
            MealType::Lunch,
        )]));
        let view = render(&state);

        assert!(view
            .card_list
            .starts_with(r#"<a href="recipes.html?id=x&quot; onclick=&quot;y" class="recipe-card-link">"#));
        assert!(!view.card_list.contains(r#"onclick="y""#));
    }
}
