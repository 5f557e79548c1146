//! Composable markup component renderers.
//!
//! Each component renders one part of the list view into an HTML fragment.
//! Fragments are assembled by the [`renderer`](crate::ui::renderer) into the
//! contents of the card list and pagination regions.
//!
//! # Components
//!
//! - [`card`]: One recipe card linking to its detail page
//! - [`pagination`]: Previous, numbered and next page controls
//! - [`empty`]: No-results message
//!
//! # Layout Modes
//!
//! - [`render_card_list`]: Cards of the page, or the empty state when there
//!   are none

mod card;
mod empty;
mod pagination;

pub use card::{render_card, render_cards};
pub use empty::render_empty_state;
pub use pagination::render_pagination;

use crate::ui::viewmodel::UIViewModel;

/// Renders the card list region contents for a view model.
#[must_use]
pub fn render_card_list(vm: &UIViewModel) -> String {
    match &vm.empty_state {
        Some(empty) => render_empty_state(empty),
        None => render_cards(&vm.cards),
    }
}

/// Renders the pagination region contents. Empty when pagination is
/// suppressed.
#[must_use]
pub fn render_pagination_region(vm: &UIViewModel) -> String {
    vm.pagination
        .as_ref()
        .map(render_pagination)
        .unwrap_or_default()
}
