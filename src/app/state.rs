//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the selection state owned by one list view
//! instance. It holds the catalog, the active selection mode, the subset that
//! mode selects and the current page, and computes the view model the renderer
//! draws.
//!
//! # Invariants
//!
//! - `active_subset` is always `select(catalog, mode)`, in catalog order
//! - `current_page` is within `1..=max(1, page_count)`
//!
//! Both are maintained by the transition methods below; the page is private so
//! nothing else can move it out of range.
//!
//! # Example
//!
//! ```rust
//! use recipe_shelf::app::{AppState, SelectionMode};
//! use recipe_shelf::{Catalog, MealType};
//!
//! let mut state = AppState::new(Catalog::builtin());
//! state.apply_selection(SelectionMode::ByMealType(MealType::Dinner));
//! assert_eq!(state.active_subset.len(), 3);
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.cards.len(), 3);
//! ```

use super::modes::ViewMode;
use super::paginator::{self, Page, PageTarget, PAGE_SIZE};
use super::selector::{select, SelectionMode};
use crate::catalog::Catalog;
use crate::domain::Recipe;
use crate::ui::viewmodel::{CardItem, EmptyState, PaginationInfo, UIViewModel};

/// Message shown in place of cards when the subset is empty.
pub const NO_RESULTS_MESSAGE: &str = "No recipes found matching the criteria.";

/// Selection state of one list view.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The full catalog. Never mutated.
    pub catalog: Catalog,

    /// How the catalog is currently narrowed.
    pub mode: SelectionMode,

    /// Recipes selected by `mode`, in catalog order.
    pub active_subset: Vec<Recipe>,

    /// 1-based page of `active_subset` being shown.
    current_page: usize,
}

impl AppState {
    /// Creates the initial state: everything selected, first page.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recipe_shelf::app::{AppState, SelectionMode};
    /// use recipe_shelf::Catalog;
    ///
    /// let state = AppState::new(Catalog::builtin());
    /// assert_eq!(state.mode, SelectionMode::All);
    /// assert_eq!(state.current_page(), 1);
    /// ```
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let active_subset = catalog.recipes().to_vec();
        Self {
            catalog,
            mode: SelectionMode::All,
            active_subset,
            current_page: 1,
        }
    }

    /// Switches to `mode`, recomputes the subset and returns to page 1.
    pub fn apply_selection(&mut self, mode: SelectionMode) {
        let _span = tracing::debug_span!("apply_selection",
            total_recipes = self.catalog.len(),
            mode = ?mode
        ).entered();

        self.active_subset = select(&self.catalog, &mode);
        self.mode = mode;
        self.current_page = 1;

        tracing::debug!(
            selected_count = self.active_subset.len(),
            "selection applied"
        );
    }

    /// Returns the 1-based page being shown.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the items of the page being shown.
    #[must_use]
    pub fn page(&self) -> Page<'_, Recipe> {
        paginator::paginate(&self.active_subset, PAGE_SIZE, self.current_page)
    }

    /// Returns the number of pages of the active subset.
    #[must_use]
    pub fn page_count(&self) -> usize {
        paginator::page_count(self.active_subset.len(), PAGE_SIZE)
    }

    /// Moves to the page `target` points at.
    ///
    /// Returns `false` and leaves the state untouched when the target is
    /// disabled or out of range.
    pub fn navigate(&mut self, target: PageTarget) -> bool {
        match paginator::resolve_target(target, self.current_page, self.page_count()) {
            Some(page) => {
                tracing::debug!(from = self.current_page, to = page, "page changed");
                self.current_page = page;
                true
            }
            None => {
                tracing::debug!(
                    target = %target,
                    current_page = self.current_page,
                    page_count = self.page_count(),
                    "ignoring page target outside range"
                );
                false
            }
        }
    }

    /// Moves to `page`, clamped into `1..=max(1, page_count)`.
    ///
    /// Used when a host restores a page number that may no longer exist.
    /// Returns the page actually stored.
    ///
    /// ```rust
    /// use recipe_shelf::app::AppState;
    /// use recipe_shelf::Catalog;
    ///
    /// let mut state = AppState::new(Catalog::builtin());
    /// assert_eq!(state.request_page(5), 2);
    /// ```
    pub fn request_page(&mut self, page: usize) -> usize {
        let last = self.page_count().max(1);
        let clamped = page.clamp(1, last);
        if clamped != page {
            tracing::debug!(requested = page, clamped, "requested page clamped");
        }
        self.current_page = clamped;
        clamped
    }

    /// Returns the browsing state derived from the selection mode.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        ViewMode::from(&self.mode)
    }

    /// Computes a renderable view model for the current page.
    ///
    /// An empty subset yields no cards, no pagination and an empty-state
    /// message. Otherwise the cards of the effective page are listed with the
    /// pagination controls for that page.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let page = self.page();

        let Some(current_page) = page.effective_page else {
            return UIViewModel {
                cards: vec![],
                pagination: None,
                empty_state: Some(EmptyState {
                    message: NO_RESULTS_MESSAGE.to_string(),
                }),
            };
        };

        let cards = page.items.iter().map(CardItem::from).collect();

        UIViewModel {
            cards,
            pagination: Some(PaginationInfo {
                current_page,
                page_count: page.page_count,
                controls: paginator::page_controls(current_page, page.page_count),
            }),
            empty_state: None,
        }
    }
}
