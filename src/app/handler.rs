//! Event handling and state transition logic.
//!
//! This module implements the coordinator that processes the list view's
//! events, translating them into selection changes and document actions.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. The list view maps a host interaction to an [`Event`]
//! 2. [`handle_event`] pattern-matches the event
//! 3. State mutations occur via `AppState` methods
//! 4. The render decision and actions are returned for execution
//!
//! # Example
//!
//! ```rust
//! use recipe_shelf::app::{handle_event, AppState, Event};
//! use recipe_shelf::Catalog;
//!
//! let mut state = AppState::new(Catalog::builtin());
//! let (should_render, actions) = handle_event(&mut state, &Event::SelectMealType("Lunch".to_string()))?;
//! assert!(should_render);
//! assert_eq!(state.active_subset.len(), 2);
//! # Ok::<(), recipe_shelf::RecipeShelfError>(())
//! ```

use super::paginator::PageTarget;
use super::selector::SelectionMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events driving the list view's state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A meal navigation entry was activated. Carries the entry's label.
    SelectMealType(String),

    /// A search was submitted. Carries the search field's text.
    Search(String),

    /// A pagination control was activated.
    NavigatePage(PageTarget),
}

/// Processes an event, mutates state and returns the actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. When `should_render` is `true` the card list
/// and pagination regions must be re-rendered after the actions run.
///
/// # Errors
///
/// Event handling is total over well-formed events; the `Result` matches the
/// crate's handler signature and currently never carries an error.
///
/// # Transitions
///
/// - `SelectMealType(label)`: clear the search field, select by label, back
///   to page 1, highlight `label`
/// - `Search(term)`: clear navigation highlighting, select by term, back to
///   page 1
/// - `NavigatePage(target)`: move to the target page, or ignore it when it is
///   disabled or out of range
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SelectMealType(label) => {
            tracing::debug!(label = %label, "meal filter selected");
            state.apply_selection(SelectionMode::from_nav_label(label));

            Ok((
                true,
                vec![
                    Action::ClearSearchInput,
                    Action::HighlightNav(state.view_mode().nav_label().map(String::from)),
                ],
            ))
        }
        Event::Search(term) => {
            tracing::debug!(term = %term, "search submitted");
            state.apply_selection(SelectionMode::BySearchTerm(term.clone()));

            Ok((true, vec![Action::HighlightNav(None)]))
        }
        Event::NavigatePage(target) => {
            if state.active_subset.is_empty() {
                tracing::debug!("no pages to navigate");
                return Ok((false, vec![]));
            }

            Ok((state.navigate(*target), vec![]))
        }
    }
}
