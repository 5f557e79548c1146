//! The recipe list view mounted onto a host [`Document`].
//!
//! `RecipeListView` is the host-facing wrapper around the application layer.
//! It owns the [`AppState`] and the document, maps raw host interactions to
//! application events, executes the resulting actions and re-renders the card
//! list and pagination regions.
//!
//! # Interaction Mapping
//!
//! - `NavClicked { label }` → `Event::SelectMealType(label)`
//! - `SearchClicked` → `Event::Search(<search field text>)`
//! - `SearchKeyPressed { key: "Enter" }` → `Event::Search(<search field text>)`
//! - `PaginationClicked { data_page }` → `Event::NavigatePage(<parsed target>)`
//!
//! Other keys and unparseable `data-page` values are ignored.
//!
//! # Example
//!
//! ```rust
//! use recipe_shelf::app::AppState;
//! use recipe_shelf::infrastructure::{MemoryDocument, Region};
//! use recipe_shelf::{Catalog, Interaction, RecipeListView};
//!
//! let state = AppState::new(Catalog::builtin());
//! let mut view = RecipeListView::mount(state, MemoryDocument::new())?;
//! assert_eq!(view.document().active_nav(), Some("All"));
//!
//! view.document_mut().type_search("TOAST");
//! assert!(view.dispatch(&Interaction::SearchClicked)?);
//! assert_eq!(view.state().active_subset.len(), 1);
//! # Ok::<(), recipe_shelf::RecipeShelfError>(())
//! ```

use crate::app::{handle_event, Action, AppState, Event, PageTarget};
use crate::domain::error::{RecipeShelfError, Result};
use crate::infrastructure::{Document, Region, ALL_LABEL};
use crate::ui;

/// Key whose press in the search field submits the search.
pub const SUBMIT_KEY: &str = "Enter";

/// Raw user interactions delivered by the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// A meal navigation entry was clicked.
    NavClicked { label: String },
    /// The search submit control was clicked.
    SearchClicked,
    /// A key was pressed in the search field.
    SearchKeyPressed { key: String },
    /// A pagination control was clicked. Carries its `data-page` value.
    PaginationClicked { data_page: String },
}

/// A list view bound to one document.
#[derive(Debug)]
pub struct RecipeListView<D: Document> {
    state: AppState,
    document: D,
}

impl<D: Document> RecipeListView<D> {
    /// Mounts the view: checks the document's regions, renders the first page
    /// and highlights the `All` navigation entry.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeShelfError::MissingRegion`] for the first region the
    /// document lacks. Nothing is written in that case.
    pub fn mount(state: AppState, mut document: D) -> Result<Self> {
        let _span = tracing::info_span!("mount", recipes = state.catalog.len()).entered();

        if let Some(missing) = Region::ALL.into_iter().find(|&r| !document.has_region(r)) {
            tracing::warn!(region = %missing, "document is missing a display region");
            return Err(RecipeShelfError::MissingRegion(missing));
        }

        ui::render_into(&state, &mut document);
        document.highlight_nav(Some(ALL_LABEL));

        tracing::info!(pages = state.page_count(), "list view mounted");
        Ok(Self { state, document })
    }

    /// Handles one host interaction.
    ///
    /// Returns `true` if the card list and pagination regions were
    /// re-rendered.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn dispatch(&mut self, interaction: &Interaction) -> Result<bool> {
        let span = tracing::debug_span!("dispatch", interaction = ?interaction);
        let _guard = span.entered();

        let Some(event) = self.map_interaction(interaction) else {
            tracing::trace!("interaction ignored");
            return Ok(false);
        };

        let (should_render, actions) = handle_event(&mut self.state, &event)?;
        tracing::debug!(
            action_count = actions.len(),
            should_render = should_render,
            "event handled successfully"
        );

        for action in &actions {
            self.execute_action(action);
        }

        if should_render {
            ui::render_into(&self.state, &mut self.document);
        }
        Ok(should_render)
    }

    /// Returns the selection state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the document the view is mounted onto.
    #[must_use]
    pub const fn document(&self) -> &D {
        &self.document
    }

    /// Returns the document mutably, e.g. to type into the search field.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Unmounts the view, returning its document.
    #[must_use]
    pub fn into_document(self) -> D {
        self.document
    }

    fn map_interaction(&self, interaction: &Interaction) -> Option<Event> {
        match interaction {
            Interaction::NavClicked { label } => Some(Event::SelectMealType(label.clone())),
            Interaction::SearchClicked => Some(Event::Search(self.document.search_text())),
            Interaction::SearchKeyPressed { key } if key == SUBMIT_KEY => {
                Some(Event::Search(self.document.search_text()))
            }
            Interaction::SearchKeyPressed { .. } => None,
            Interaction::PaginationClicked { data_page } => match data_page.parse::<PageTarget>() {
                Ok(target) => Some(Event::NavigatePage(target)),
                Err(e) => {
                    tracing::debug!(error = %e, "ignoring pagination control");
                    None
                }
            },
        }
    }

    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::ClearSearchInput => self.document.set_search_text(""),
            Action::HighlightNav(label) => self.document.highlight_nav(label.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::infrastructure::MemoryDocument;

    fn mounted() -> RecipeListView<MemoryDocument> {
        RecipeListView::mount(AppState::new(Catalog::builtin()), MemoryDocument::new()).unwrap()
    }

    #[test]
    fn non_submit_keys_are_ignored() {
        let mut view = mounted();
        view.document_mut().type_search("salad");

        assert!(!view.dispatch(&Interaction::SearchKeyPressed { key: "a".to_string() }).unwrap());
        assert_eq!(view.state().active_subset.len(), 7);

        assert!(view.dispatch(&Interaction::SearchKeyPressed { key: "Enter".to_string() }).unwrap());
        assert_eq!(view.document().active_nav(), None);
    }

    #[test]
    fn malformed_page_value_is_a_no_op() {
        let mut view = mounted();
        let before = view.document().clone();

        assert!(!view
            .dispatch(&Interaction::PaginationClicked { data_page: "two".to_string() })
            .unwrap());
        assert_eq!(view.document(), &before);
    }

    #[test]
    fn mount_checks_regions_before_writing() {
        let doc = MemoryDocument::new().without_region(Region::SearchSubmit);
        let err = RecipeListView::mount(AppState::new(Catalog::builtin()), doc).unwrap_err();

        assert!(matches!(err, RecipeShelfError::MissingRegion(Region::SearchSubmit)));
    }
}
